//! CSV loading for the property ledger.
//!
//! # CSV Format
//!
//! - **Properties** (has headers):
//!   `ID,NAME,ADDRESS,CITY,RENT (PLN),SIZE (M2),BEDROOMS,BATHROOMS,DESCRIPTION`
//!
//! A blank `DESCRIPTION` cell means the property has none.

use crate::error::{PropertyError, Result};
use crate::models::Property;
use crate::PropertyBook;
use std::str::FromStr;

fn parse_cell<T: FromStr>(record: &csv::StringRecord, index: usize, field: &'static str) -> Result<T> {
    let raw = record.get(index).unwrap_or("").trim();
    raw.parse().map_err(|_| PropertyError::InvalidValue {
        field,
        value: raw.to_string(),
        line: record.position().map_or(0, |p| p.line()),
    })
}

impl PropertyBook {
    /// Load properties from a CSV string, returning how many rows were read.
    ///
    /// A row whose id is already in the ledger replaces that property in place.
    ///
    /// # Example CSV
    /// ```text
    /// ID,NAME,ADDRESS,CITY,RENT (PLN),SIZE (M2),BEDROOMS,BATHROOMS,DESCRIPTION
    /// 1,Sunny Apartment,ul. Marszałkowska 123,Warsaw,3500,65,2,1,Beautiful apartment in the city center
    /// ```
    pub fn load_properties(&mut self, csv_data: &str) -> Result<usize> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(csv_data.as_bytes());

        let mut count = 0usize;
        for result in rdr.records() {
            let r = result?;
            let description = r.get(8).unwrap_or("").trim();
            let property = Property {
                id: r.get(0).unwrap_or("").trim().to_string(),
                name: r.get(1).unwrap_or("").trim().to_string(),
                address: r.get(2).unwrap_or("").trim().to_string(),
                city: r.get(3).unwrap_or("").trim().to_string(),
                rent_price: parse_cell(&r, 4, "rent")?,
                size: parse_cell(&r, 5, "size")?,
                bedrooms: parse_cell(&r, 6, "bedrooms")?,
                bathrooms: parse_cell(&r, 7, "bathrooms")?,
                description: (!description.is_empty()).then(|| description.to_string()),
            };
            if property.id.is_empty() {
                return Err(PropertyError::MissingField("id"));
            }
            self.upsert(property);
            count += 1;
        }
        log::info!("loader: Loaded {} properties", count);
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "ID,NAME,ADDRESS,CITY,RENT (PLN),SIZE (M2),BEDROOMS,BATHROOMS,DESCRIPTION\n";

    #[test]
    fn loads_rows_and_optional_description() {
        let mut book = PropertyBook::new();
        let csv = format!(
            "{HEADER}7,Garden House,ul. Ogrodowa 3,Poznań,5200,120,4,2,\n8,Attic,ul. Wąska 1,Łódź,1900,30,1,1,Skylight\n"
        );
        assert_eq!(book.load_properties(&csv).unwrap(), 2);
        let garden = book.get("7").unwrap();
        assert_eq!(garden.rent_price, 5200);
        assert_eq!(garden.description, None);
        assert_eq!(book.get("8").unwrap().description.as_deref(), Some("Skylight"));
    }

    #[test]
    fn reloading_an_id_replaces_in_place() {
        let mut book = PropertyBook::new();
        let first = format!("{HEADER}1,A,Street 1,Warsaw,1000,20,1,1,\n2,B,Street 2,Warsaw,2000,40,2,1,\n");
        book.load_properties(&first).unwrap();
        let again = format!("{HEADER}1,A2,Street 1,Warsaw,1500,20,1,1,\n");
        book.load_properties(&again).unwrap();
        assert_eq!(book.len(), 2);
        let ids: Vec<&str> = book.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2"]);
        assert_eq!(book.get("1").unwrap().name, "A2");
    }

    #[test]
    fn rejects_non_numeric_rent() {
        let mut book = PropertyBook::new();
        let csv = format!("{HEADER}1,A,Street 1,Warsaw,lots,20,1,1,\n");
        let err = book.load_properties(&csv).unwrap_err();
        assert!(matches!(
            err,
            PropertyError::InvalidValue { field: "rent", line: 2, .. }
        ));
        assert!(book.is_empty());
    }

    #[test]
    fn rejects_missing_id() {
        let mut book = PropertyBook::new();
        let csv = format!("{HEADER},A,Street 1,Warsaw,1000,20,1,1,\n");
        assert!(matches!(
            book.load_properties(&csv),
            Err(PropertyError::MissingField("id"))
        ));
    }
}
