//! Listing filter: a partial query evaluated over the store.

use serde::Deserialize;
use tracing::debug;

use super::model::Listing;

/// Optional constraints over listings. Absent fields do not constrain.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingQuery {
    /// Case-insensitive city name.
    pub city: Option<String>,
    /// Case-insensitive property type name ("house", "apartment", ...).
    pub property_type: Option<String>,
    /// Inclusive upper bound on price.
    pub max_price: Option<u64>,
    /// Inclusive lower bound on bedrooms.
    pub min_beds: Option<u32>,
}

impl ListingQuery {
    /// Build a query from raw `/properties` query-string values.
    ///
    /// Malformed numbers are dropped rather than rejected.
    pub fn from_params(params: &ListingParams) -> Self {
        Self {
            city: non_empty(params.city.as_deref()),
            property_type: non_empty(params.property_type.as_deref()),
            max_price: params.max_price.as_deref().and_then(parse_max_price),
            min_beds: params.min_beds.as_deref().and_then(parse_min_beds),
        }
    }

    /// Whether `listing` satisfies every present constraint.
    ///
    /// Empty strings and zero bounds count as absent.
    pub fn matches(&self, listing: &Listing) -> bool {
        let city_ok = match self.city.as_deref().filter(|c| !c.is_empty()) {
            Some(city) => listing.city.eq_ignore_ascii_case(city),
            None => true,
        };
        let type_ok = match self.property_type.as_deref().filter(|t| !t.is_empty()) {
            Some(kind) => listing.property_type.as_str().eq_ignore_ascii_case(kind),
            None => true,
        };
        let price_ok = match self.max_price.filter(|p| *p > 0) {
            Some(max) => listing.price <= max,
            None => true,
        };
        let beds_ok = match self.min_beds.filter(|b| *b > 0) {
            Some(min) => listing.beds >= min,
            None => true,
        };

        city_ok && type_ok && price_ok && beds_ok
    }
}

/// Return every listing matching `query`, preserving input order.
pub fn filter<'a>(listings: &'a [Listing], query: &ListingQuery) -> Vec<&'a Listing> {
    let results: Vec<&Listing> = listings.iter().filter(|l| query.matches(l)).collect();
    debug!(
        city = ?query.city,
        property_type = ?query.property_type,
        max_price = ?query.max_price,
        min_beds = ?query.min_beds,
        matched = results.len(),
        "Filtered listings"
    );
    results
}

/// Raw query-string parameters for `GET /properties`.
///
/// Everything is kept as a string so that malformed numbers never cause a
/// rejection at the extractor level.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListingParams {
    pub city: Option<String>,
    #[serde(rename = "type")]
    pub property_type: Option<String>,
    #[serde(rename = "maxPrice")]
    pub max_price: Option<String>,
    #[serde(rename = "minBeds")]
    pub min_beds: Option<String>,
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(String::from)
}

/// Parse a non-negative number. Fractions are accepted and rounded with
/// `round`, which is exact for integer-valued listing fields. Values past
/// `u64::MAX` saturate; they are large, not malformed.
fn parse_non_negative(raw: &str, round: fn(f64) -> f64) -> Option<u64> {
    let raw = raw.trim();
    if let Ok(n) = raw.parse::<u64>() {
        return Some(n);
    }
    let value = raw.parse::<f64>().ok()?;
    if !value.is_finite() || value < 0.0 {
        return None;
    }
    // float-to-int `as` casts saturate at u64::MAX
    Some(round(value) as u64)
}

fn parse_max_price(raw: &str) -> Option<u64> {
    parse_non_negative(raw, f64::floor)
}

fn parse_min_beds(raw: &str) -> Option<u32> {
    parse_non_negative(raw, f64::ceil).map(|n| u32::try_from(n).unwrap_or(u32::MAX))
}
