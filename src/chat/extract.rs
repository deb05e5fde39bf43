//! Search-parameter extraction from normalized chat text.
//!
//! Pulls a city, property type, minimum bedroom count and price ceiling out
//! of free text such as "show apartments in lahore under 1.5 crore with 3 beds".
//! Every field is optional; a missing match leaves that dimension unconstrained.

use std::sync::LazyLock;

use regex::Regex;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use tracing::debug;

use crate::listings::{ListingQuery, PropertyType};

/// Cities the bot recognizes, lower-case.
pub const KNOWN_CITIES: [&str; 5] = ["lahore", "karachi", "islamabad", "rawalpindi", "peshawar"];

/// One crore = 10,000,000.
const CRORE: i64 = 10_000_000;
/// One lac (lakh) = 100,000.
const LAC: i64 = 100_000;

// Word boundaries are ASCII-only: "lahoreé" still mentions lahore.
static CITY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"(?-u:\b)(?:{})(?-u:\b)", KNOWN_CITIES.join("|"))).expect("city regex")
});

static PROPERTY_TYPE: LazyLock<Regex> = LazyLock::new(|| {
    let names: Vec<&str> = PropertyType::ALL.iter().map(|t| t.as_str()).collect();
    Regex::new(&format!(r"(?-u:\b)(?:{})(?-u:\b)", names.join("|")))
        .expect("property type regex")
});

static BEDS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9]+)\s*(?:bed|beds|bedroom)").expect("beds regex"));

static RAW_PRICE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]{6,}").expect("raw price regex"));

static CRORE_PRICE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([0-9]+(?:\.[0-9]+)?)\s*crore").expect("crore price regex")
});

static LAC_PRICE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([0-9]+(?:\.[0-9]+)?)\s*(?:lac|lakh)").expect("lac price regex")
});

/// Search parameters pulled out of a message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchParams {
    pub city: Option<String>,
    pub property_type: Option<PropertyType>,
    pub min_beds: Option<u32>,
    pub max_price: Option<u64>,
}

impl SearchParams {
    /// Extract all search parameters from normalized (lower-cased) text.
    pub fn extract(text: &str) -> Self {
        let params = Self {
            city: find_city(text),
            property_type: find_property_type(text),
            min_beds: find_min_beds(text),
            max_price: find_max_price(text),
        };
        debug!(
            city = ?params.city,
            property_type = ?params.property_type,
            min_beds = ?params.min_beds,
            max_price = ?params.max_price,
            "Extracted search parameters"
        );
        params
    }

    pub fn to_query(&self) -> ListingQuery {
        ListingQuery {
            city: self.city.clone(),
            property_type: self.property_type.map(|t| t.to_string()),
            max_price: self.max_price,
            min_beds: self.min_beds,
        }
    }
}

/// First recognized city appearing as a whole word.
pub fn find_city(text: &str) -> Option<String> {
    CITY.find(text).map(|m| m.as_str().to_string())
}

/// First recognized property type appearing as a whole word.
///
/// Plurals ("apartments") deliberately do not match.
pub fn find_property_type(text: &str) -> Option<PropertyType> {
    let found = PROPERTY_TYPE.find(text)?;
    PropertyType::ALL
        .into_iter()
        .find(|t| t.as_str() == found.as_str())
}

/// First integer directly followed by "bed", "beds" or "bedroom".
///
/// A count too large for `u32` saturates, so it still excludes every listing.
pub fn find_min_beds(text: &str) -> Option<u32> {
    let digits = BEDS.captures(text)?.get(1)?.as_str();
    Some(digits.parse().unwrap_or(u32::MAX))
}

/// Resolve the price ceiling.
///
/// Rules are applied in order and each match overwrites the previous one:
/// a raw 6+ digit number, then "<n> crore", then "<n> lac/lakh". A message
/// mentioning both crore and lac therefore ends up with the lac value.
/// Amounts too large for `u64` saturate rather than dropping the rule.
pub fn find_max_price(text: &str) -> Option<u64> {
    let mut max_price = None;

    if let Some(raw) = RAW_PRICE.find(text) {
        max_price = Some(raw.as_str().parse().unwrap_or(u64::MAX));
    }
    if let Some(crore) = scaled_amount(&CRORE_PRICE, text, CRORE) {
        max_price = Some(crore);
    }
    if let Some(lac) = scaled_amount(&LAC_PRICE, text, LAC) {
        max_price = Some(lac);
    }

    max_price
}

/// Multiply the first captured decimal by `unit`, rounding half away from zero.
///
/// `None` only when the pattern is absent; overflow yields `u64::MAX`.
fn scaled_amount(pattern: &Regex, text: &str, unit: i64) -> Option<u64> {
    let digits = pattern.captures(text)?.get(1)?.as_str();
    let scaled = digits
        .parse::<Decimal>()
        .ok()
        .and_then(|amount| amount.checked_mul(Decimal::from(unit)))
        .and_then(|total| {
            total
                .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
                .to_u64()
        });
    Some(scaled.unwrap_or(u64::MAX))
}

/// Whether any city or property type is mentioned.
pub fn mentions_city_or_type(text: &str) -> bool {
    CITY.is_match(text) || PROPERTY_TYPE.is_match(text)
}
