//! In-memory rental property ledger for the properties page.
//!
//! The ledger starts from the sample data in `fixtures/properties.csv` and
//! lives only as long as the view that owns it; nothing is persisted.
//!
//! # Usage
//!
//! ```rust
//! use pmd_properties::{PropertyBook, PropertyDraft};
//!
//! let mut book = PropertyBook::sample().unwrap();
//! let draft = PropertyDraft {
//!     name: "Old Town Loft".to_string(),
//!     address: "ul. Długa 7".to_string(),
//!     city: "Gdańsk".to_string(),
//!     rent_price: 4100,
//!     ..PropertyDraft::default()
//! };
//! let id = book.add(draft).unwrap().id.clone();
//! assert_eq!(book.stats().total_monthly_rent, 3500 + 2200 + 4100);
//! book.remove(&id).unwrap();
//! ```

pub mod error;
mod loader;
pub mod models;

pub use error::{PropertyError, Result};
pub use models::{PortfolioStats, Property, PropertyDraft};

use log::debug;
use serde::Serialize;

/// Embedded sample properties.
pub static PROPERTIES_CSV: &str = include_str!("../../fixtures/properties.csv");

/// Ordered collection of properties with ledger-assigned ids.
#[derive(Debug, Clone, Serialize)]
pub struct PropertyBook {
    properties: Vec<Property>,
    #[serde(skip)]
    next_id: u64,
}

impl PropertyBook {
    /// An empty ledger.
    pub fn new() -> Self {
        PropertyBook {
            properties: Vec::new(),
            next_id: 1,
        }
    }

    /// A ledger pre-populated with the sample properties.
    pub fn sample() -> Result<Self> {
        let mut book = PropertyBook::new();
        book.load_properties(PROPERTIES_CSV)?;
        Ok(book)
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Property> {
        self.properties.iter()
    }

    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    pub fn get(&self, id: &str) -> Option<&Property> {
        self.properties.iter().find(|p| p.id == id)
    }

    fn position(&self, id: &str) -> Result<usize> {
        self.properties
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| PropertyError::NotFound(id.to_string()))
    }

    /// Validate `draft` and append it under a fresh id.
    pub fn add(&mut self, draft: PropertyDraft) -> Result<&Property> {
        draft.validate()?;
        let id = self.allocate_id();
        debug!("Adding property {id} ({})", draft.name.trim());
        self.properties.push(draft.into_property(id));
        let index = self.properties.len() - 1;
        Ok(&self.properties[index])
    }

    /// Replace the fields of property `id`, keeping its id and position.
    pub fn update(&mut self, id: &str, draft: PropertyDraft) -> Result<&Property> {
        draft.validate()?;
        let index = self.position(id)?;
        debug!("Updating property {id}");
        self.properties[index] = draft.into_property(id.to_string());
        Ok(&self.properties[index])
    }

    /// Remove property `id`, returning it.
    pub fn remove(&mut self, id: &str) -> Result<Property> {
        let index = self.position(id)?;
        debug!("Removing property {id}");
        Ok(self.properties.remove(index))
    }

    pub fn stats(&self) -> PortfolioStats {
        PortfolioStats::from_properties(&self.properties)
    }

    pub(crate) fn upsert(&mut self, property: Property) {
        if let Ok(numeric) = property.id.parse::<u64>() {
            self.next_id = self.next_id.max(numeric + 1);
        }
        match self.properties.iter_mut().find(|p| p.id == property.id) {
            Some(existing) => *existing = property,
            None => self.properties.push(property),
        }
    }

    fn allocate_id(&mut self) -> String {
        loop {
            let candidate = self.next_id.to_string();
            self.next_id += 1;
            if self.get(&candidate).is_none() {
                return candidate;
            }
        }
    }
}

impl Default for PropertyBook {
    fn default() -> Self {
        PropertyBook::new()
    }
}

impl<'a> IntoIterator for &'a PropertyBook {
    type Item = &'a Property;
    type IntoIter = std::slice::Iter<'a, Property>;

    fn into_iter(self) -> Self::IntoIter {
        self.properties.iter()
    }
}
