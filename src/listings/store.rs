//! Read-only listing store.

use std::sync::Arc;

use super::filter::{ListingQuery, filter};
use super::model::{Listing, PropertyType};

/// Immutable, process-wide set of listings.
///
/// Cloning is cheap (the records live behind an `Arc`), so the store can be
/// handed to every request handler without locking.
#[derive(Debug, Clone)]
pub struct ListingStore {
    listings: Arc<[Listing]>,
}

impl ListingStore {
    /// Build a store from an arbitrary set of listings, keeping their order.
    pub fn new(listings: Vec<Listing>) -> Self {
        Self {
            listings: listings.into(),
        }
    }

    /// The demo inventory the service ships with.
    pub fn seeded() -> Self {
        Self::new(vec![
            Listing::new(1, "Lahore", PropertyType::House, 15_000_000, 4, 3, "DHA Phase 6"),
            Listing::new(2, "Karachi", PropertyType::Apartment, 9_000_000, 2, 2, "Clifton"),
            Listing::new(3, "Islamabad", PropertyType::Plot, 6_500_000, 0, 0, "B-17"),
            Listing::new(4, "Lahore", PropertyType::Apartment, 12_000_000, 3, 3, "Gulberg"),
        ])
    }

    /// Every listing, in store order.
    pub fn all(&self) -> &[Listing] {
        &self.listings
    }

    /// Listings matching `query`, in store order.
    pub fn search(&self, query: &ListingQuery) -> Vec<&Listing> {
        filter(&self.listings, query)
    }
}

impl Default for ListingStore {
    fn default() -> Self {
        Self::seeded()
    }
}
