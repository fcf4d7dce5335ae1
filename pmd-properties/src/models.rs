//! Property records, editor drafts and portfolio totals.
//!
//! All structs derive `Serialize` so a rendering layer can take them as JSON.

use serde::{Deserialize, Serialize};

use crate::error::{PropertyError, Result};

/// A rental property in the ledger.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Property {
    /// Ledger-assigned identifier.
    pub id: String,
    pub name: String,
    /// Street address, e.g. "ul. Marszałkowska 123".
    pub address: String,
    pub city: String,
    /// Monthly rent in whole PLN.
    pub rent_price: u64,
    /// Floor area in square metres.
    pub size: u32,
    pub bedrooms: u8,
    pub bathrooms: u8,
    pub description: Option<String>,
}

impl Property {
    /// "address, city" as shown under the property name.
    pub fn location(&self) -> String {
        format!("{}, {}", self.address, self.city)
    }
}

/// Editor form state for adding or editing a property.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PropertyDraft {
    pub name: String,
    pub address: String,
    pub city: String,
    pub rent_price: u64,
    pub size: u32,
    pub bedrooms: u8,
    pub bathrooms: u8,
    /// Blank means no description.
    pub description: String,
}

impl Default for PropertyDraft {
    fn default() -> Self {
        PropertyDraft {
            name: String::new(),
            address: String::new(),
            city: String::new(),
            rent_price: 0,
            size: 0,
            bedrooms: 1,
            bathrooms: 1,
            description: String::new(),
        }
    }
}

impl PropertyDraft {
    /// Name, address and city are required.
    pub fn validate(&self) -> Result<()> {
        let required = [
            ("name", &self.name),
            ("address", &self.address),
            ("city", &self.city),
        ];
        match required.iter().find(|(_, value)| value.trim().is_empty()) {
            Some(&(field, _)) => Err(PropertyError::MissingField(field)),
            None => Ok(()),
        }
    }

    pub(crate) fn into_property(self, id: String) -> Property {
        let description = self.description.trim();
        Property {
            id,
            name: self.name.trim().to_string(),
            address: self.address.trim().to_string(),
            city: self.city.trim().to_string(),
            rent_price: self.rent_price,
            size: self.size,
            bedrooms: self.bedrooms,
            bathrooms: self.bathrooms,
            description: (!description.is_empty()).then(|| description.to_string()),
        }
    }
}

impl From<&Property> for PropertyDraft {
    fn from(value: &Property) -> Self {
        PropertyDraft {
            name: value.name.clone(),
            address: value.address.clone(),
            city: value.city.clone(),
            rent_price: value.rent_price,
            size: value.size,
            bedrooms: value.bedrooms,
            bathrooms: value.bathrooms,
            description: value.description.clone().unwrap_or_default(),
        }
    }
}

/// Headline numbers for the properties page.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct PortfolioStats {
    pub total_properties: usize,
    /// Sum of monthly rents in PLN.
    pub total_monthly_rent: u64,
    /// Rounded mean rent; zero for an empty ledger.
    pub average_rent: u64,
}

impl PortfolioStats {
    pub fn from_properties(properties: &[Property]) -> PortfolioStats {
        let total_properties = properties.len();
        let total_monthly_rent: u64 = properties.iter().map(|p| p.rent_price).sum();
        let average_rent = match total_properties as u64 {
            0 => 0,
            count => (total_monthly_rent * 2 + count) / (count * 2),
        };
        PortfolioStats {
            total_properties,
            total_monthly_rent,
            average_rent,
        }
    }
}
