//! Rule-based chat responder.
//!
//! Messages flow through:
//! 1. `normalize()` — trim and lower-case; empty input short-circuits
//! 2. `IntentClassifier::classify()` — ordered first-match rule cascade
//! 3. `ReplyComposer::compose()` — canned text, or listing search results
//!
//! No state is kept between messages.

pub mod extract;
pub mod intent;
pub mod reply;

pub use extract::SearchParams;
pub use intent::{Intent, IntentClassifier, IntentKind, IntentRule, Trigger};
pub use reply::{EMPTY_MESSAGE_REPLY, ReplyComposer};

use crate::listings::ListingStore;

/// How a message was handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Blank input; the user is prompted to type something.
    EmptyMessage,
    Classified(IntentKind),
}

/// Reply text plus how it was reached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatReply {
    pub outcome: Outcome,
    pub text: String,
}

/// Trim and lower-case a message. Returns `None` when nothing is left.
pub fn normalize(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

/// Classifier and composer wired to one listing store.
#[derive(Debug, Clone)]
pub struct ChatEngine {
    classifier: IntentClassifier,
    composer: ReplyComposer,
}

impl ChatEngine {
    pub fn new(classifier: IntentClassifier, store: ListingStore) -> Self {
        Self {
            classifier,
            composer: ReplyComposer::new(store),
        }
    }

    /// Engine with the default rule set.
    pub fn with_store(store: ListingStore) -> Self {
        Self::new(IntentClassifier::default_rules(), store)
    }

    pub fn respond(&self, raw: &str) -> ChatReply {
        let Some(text) = normalize(raw) else {
            return ChatReply {
                outcome: Outcome::EmptyMessage,
                text: EMPTY_MESSAGE_REPLY.to_string(),
            };
        };

        let intent = self.classifier.classify(&text);
        ChatReply {
            outcome: Outcome::Classified(intent.kind()),
            text: self.composer.compose(&intent),
        }
    }
}
