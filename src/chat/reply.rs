//! Reply composition for classified messages.

use crate::listings::{Listing, ListingStore};

use super::intent::Intent;

/// Services PropertyPlus offers, in display order.
pub const SERVICES: [&str; 5] = [
    "Property buying & selling",
    "Rental management",
    "Legal & documentation assistance",
    "Property valuation",
    "Marketing & listing services",
];

/// How many listings a search reply shows.
pub const MAX_LISTED_RESULTS: usize = 3;

pub const EMPTY_MESSAGE_REPLY: &str = "Please type a message.";

const GREETING_REPLY: &str =
    "Hi there! Welcome to PropertyPlus. Ask me about properties, prices, or our services.";

const CONTACT_REPLY: &str = "You can reach us at support@propertyplus.live or +92-300-0000000.";

const NO_MATCHES_REPLY: &str =
    "I couldn't find matching properties. Try another city/type/price.";

const REFINE_HINT: &str = "You can refine by saying things like: \"apartments in Lahore under 1.2 crore with 3 beds\".";

const FALLBACK_REPLY: &str = "I'm here to help with properties, prices, or our services. Try: 'apartments in Lahore under 1.2 crore'.";

/// Turns an [`Intent`] into reply text, searching the store for searches.
#[derive(Debug, Clone)]
pub struct ReplyComposer {
    store: ListingStore,
}

impl ReplyComposer {
    pub fn new(store: ListingStore) -> Self {
        Self { store }
    }

    pub fn compose(&self, intent: &Intent) -> String {
        match intent {
            Intent::Greeting => GREETING_REPLY.to_string(),
            Intent::ServicesInquiry => format!(
                "We offer: {}. What are you looking for?",
                SERVICES.join(", ")
            ),
            Intent::ContactInquiry => CONTACT_REPLY.to_string(),
            Intent::SearchRequest(params) => {
                let results = self.store.search(&params.to_query());
                search_reply(&results)
            }
            Intent::Fallback => FALLBACK_REPLY.to_string(),
        }
    }
}

fn search_reply(results: &[&Listing]) -> String {
    if results.is_empty() {
        return NO_MATCHES_REPLY.to_string();
    }

    let top: Vec<String> = results
        .iter()
        .take(MAX_LISTED_RESULTS)
        .map(|l| listing_line(l))
        .collect();

    format!(
        "Here are {} match(es). Top results:\n{}\n\n{}",
        results.len(),
        top.join("\n"),
        REFINE_HINT
    )
}

/// One-line summary, e.g. `#4 apartment in Gulberg, Lahore — PKR 12,000,000 (3 beds, 3 baths)`.
pub fn listing_line(listing: &Listing) -> String {
    format!(
        "#{} {} in {}, {} — PKR {} ({} beds, {} baths)",
        listing.id,
        listing.property_type,
        listing.area,
        listing.city,
        group_thousands(listing.price),
        listing.beds,
        listing.baths
    )
}

/// Format with comma thousands separators: 12000000 -> "12,000,000".
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
