//! Properties page state: the ledger plus the add/edit dialog.

use log::debug;
use pmd_properties::{PortfolioStats, Property, PropertyBook, PropertyDraft};

use crate::error::{DashboardError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorMode {
    Adding,
    /// Editing the property with this id
    Editing(String),
}

/// Open add/edit dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyEditor {
    pub mode: EditorMode,
    pub draft: PropertyDraft,
}

impl PropertyEditor {
    pub fn title(&self) -> &'static str {
        match self.mode {
            EditorMode::Adding => "Add New Property",
            EditorMode::Editing(_) => "Edit Property",
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self.mode {
            EditorMode::Adding => "Add Property",
            EditorMode::Editing(_) => "Update Property",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct PropertiesPage {
    book: PropertyBook,
    /// Dialog state; None when closed
    editor: Option<PropertyEditor>,
}

impl PropertiesPage {
    pub fn new(book: PropertyBook) -> Self {
        PropertiesPage { book, editor: None }
    }

    /// Page over the sample ledger.
    pub fn sample() -> Result<Self> {
        Ok(PropertiesPage::new(PropertyBook::sample()?))
    }

    pub fn book(&self) -> &PropertyBook {
        &self.book
    }

    pub fn stats(&self) -> PortfolioStats {
        self.book.stats()
    }

    /// True when the empty-state card should be shown.
    pub fn is_empty(&self) -> bool {
        self.book.is_empty()
    }

    pub fn editor(&self) -> Option<&PropertyEditor> {
        self.editor.as_ref()
    }

    pub fn editor_mut(&mut self) -> Option<&mut PropertyEditor> {
        self.editor.as_mut()
    }

    /// Open the dialog with a blank draft.
    pub fn open_add(&mut self) -> &mut PropertyEditor {
        self.editor.insert(PropertyEditor {
            mode: EditorMode::Adding,
            draft: PropertyDraft::default(),
        })
    }

    /// Open the dialog prefilled from property `id`.
    pub fn open_edit(&mut self, id: &str) -> Result<&mut PropertyEditor> {
        let property = self
            .book
            .get(id)
            .ok_or_else(|| pmd_properties::PropertyError::NotFound(id.to_string()))?;
        let editor = PropertyEditor {
            mode: EditorMode::Editing(property.id.clone()),
            draft: PropertyDraft::from(property),
        };
        Ok(self.editor.insert(editor))
    }

    pub fn cancel(&mut self) {
        self.editor = None;
    }

    /// Save the open draft and close the dialog.
    ///
    /// A draft that fails validation leaves the dialog open.
    pub fn submit(&mut self) -> Result<Property> {
        let editor = self.editor.as_ref().ok_or(DashboardError::EditorClosed)?;
        let draft = editor.draft.clone();
        let saved = match &editor.mode {
            EditorMode::Adding => self.book.add(draft)?.clone(),
            EditorMode::Editing(id) => {
                let id = id.clone();
                self.book.update(&id, draft)?.clone()
            }
        };
        debug!("Saved property {}", saved.id);
        self.editor = None;
        Ok(saved)
    }

    pub fn delete(&mut self, id: &str) -> Result<Property> {
        Ok(self.book.remove(id)?)
    }
}
