//! Listing record types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Kind of property a listing describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    House,
    Apartment,
    Plot,
    Villa,
}

impl PropertyType {
    /// All property types, in the order the chat extractor checks them.
    pub const ALL: [PropertyType; 4] = [
        PropertyType::Apartment,
        PropertyType::House,
        PropertyType::Plot,
        PropertyType::Villa,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyType::House => "house",
            PropertyType::Apartment => "apartment",
            PropertyType::Plot => "plot",
            PropertyType::Villa => "villa",
        }
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single real-estate listing.
///
/// Listings are created once when the store is seeded and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Listing {
    /// Unique positive identifier.
    pub id: u32,
    pub city: String,
    #[serde(rename = "type")]
    pub property_type: PropertyType,
    /// Asking price in whole PKR.
    pub price: u64,
    pub beds: u32,
    pub baths: u32,
    /// Area or neighbourhood label, e.g. "DHA Phase 6".
    pub area: String,
}

impl Listing {
    pub fn new(
        id: u32,
        city: impl Into<String>,
        property_type: PropertyType,
        price: u64,
        beds: u32,
        baths: u32,
        area: impl Into<String>,
    ) -> Self {
        Self {
            id,
            city: city.into(),
            property_type,
            price,
            beds,
            baths,
            area: area.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_type_field() {
        let listing = Listing::new(7, "Lahore", PropertyType::Villa, 50_000_000, 6, 5, "Bahria Town");
        let json = serde_json::to_value(&listing).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 7,
                "city": "Lahore",
                "type": "villa",
                "price": 50_000_000u64,
                "beds": 6,
                "baths": 5,
                "area": "Bahria Town"
            })
        );
    }

    #[test]
    fn display_is_lowercase() {
        assert_eq!(PropertyType::Apartment.to_string(), "apartment");
        assert_eq!(PropertyType::Plot.to_string(), "plot");
    }
}
