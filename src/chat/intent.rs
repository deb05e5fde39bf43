//! Intent classification as an ordered rule cascade.
//!
//! Rules are evaluated top to bottom against normalized text and the first
//! match decides the intent:
//! 1. greeting words at the start of the text or after whitespace
//! 2. services questions
//! 3. contact questions
//! 4. property searches (search verbs, a known city, or a property type)
//!
//! Anything else falls back to a generic help reply.

use std::fmt;

use regex::Regex;
use tracing::debug;

use super::extract::{SearchParams, mentions_city_or_type};

/// Coarse purpose of a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntentKind {
    Greeting,
    ServicesInquiry,
    ContactInquiry,
    SearchRequest,
    Fallback,
}

impl fmt::Display for IntentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            IntentKind::Greeting => "greeting",
            IntentKind::ServicesInquiry => "services_inquiry",
            IntentKind::ContactInquiry => "contact_inquiry",
            IntentKind::SearchRequest => "search_request",
            IntentKind::Fallback => "fallback",
        };
        f.write_str(name)
    }
}

/// Classified message, carrying extracted parameters where relevant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    Greeting,
    ServicesInquiry,
    ContactInquiry,
    SearchRequest(SearchParams),
    Fallback,
}

impl Intent {
    pub fn kind(&self) -> IntentKind {
        match self {
            Intent::Greeting => IntentKind::Greeting,
            Intent::ServicesInquiry => IntentKind::ServicesInquiry,
            Intent::ContactInquiry => IntentKind::ContactInquiry,
            Intent::SearchRequest(_) => IntentKind::SearchRequest,
            Intent::Fallback => IntentKind::Fallback,
        }
    }
}

/// What makes a rule fire.
#[derive(Debug, Clone)]
pub enum Trigger {
    /// Regex match anywhere in the text.
    Pattern(Regex),
    /// Any of the given substrings is present.
    Contains(Vec<&'static str>),
    /// A recognized city or property type is mentioned as a whole word.
    CityOrType,
    /// Any of the nested triggers fires.
    AnyOf(Vec<Trigger>),
}

impl Trigger {
    fn fires(&self, text: &str) -> bool {
        match self {
            Trigger::Pattern(regex) => regex.is_match(text),
            Trigger::Contains(needles) => needles.iter().any(|n| text.contains(n)),
            Trigger::CityOrType => mentions_city_or_type(text),
            Trigger::AnyOf(triggers) => triggers.iter().any(|t| t.fires(text)),
        }
    }
}

/// A single rule in the cascade.
#[derive(Debug, Clone)]
pub struct IntentRule {
    pub kind: IntentKind,
    pub trigger: Trigger,
}

impl IntentRule {
    pub fn new(kind: IntentKind, trigger: Trigger) -> Self {
        Self { kind, trigger }
    }

    /// Build the intent this rule stands for. Search rules extract their
    /// parameters here, so extraction only runs once a search is decided.
    fn resolve(&self, text: &str) -> Intent {
        match self.kind {
            IntentKind::Greeting => Intent::Greeting,
            IntentKind::ServicesInquiry => Intent::ServicesInquiry,
            IntentKind::ContactInquiry => Intent::ContactInquiry,
            IntentKind::SearchRequest => Intent::SearchRequest(SearchParams::extract(text)),
            IntentKind::Fallback => Intent::Fallback,
        }
    }
}

/// First-match-wins classifier over an ordered rule list.
#[derive(Debug, Clone)]
pub struct IntentClassifier {
    rules: Vec<IntentRule>,
}

impl IntentClassifier {
    /// The standard PropertyPlus rule set.
    pub fn default_rules() -> Self {
        let rules = vec![
            IntentRule::new(
                IntentKind::Greeting,
                // No trailing boundary: "hiya" and "history" also count.
                Trigger::Pattern(
                    Regex::new(r"(?:^|\s)(?:hi|hello|hey|salam|assalam)").unwrap(),
                ),
            ),
            IntentRule::new(
                IntentKind::ServicesInquiry,
                Trigger::Contains(vec!["service", "what do you do"]),
            ),
            IntentRule::new(
                IntentKind::ContactInquiry,
                Trigger::Contains(vec!["contact", "phone", "email"]),
            ),
            IntentRule::new(
                IntentKind::SearchRequest,
                Trigger::AnyOf(vec![
                    Trigger::Contains(vec!["show", "find", "price"]),
                    Trigger::CityOrType,
                ]),
            ),
        ];

        Self { rules }
    }

    /// Classify normalized (trimmed, lower-cased, non-empty) text.
    pub fn classify(&self, text: &str) -> Intent {
        for rule in &self.rules {
            if rule.trigger.fires(text) {
                debug!(intent = %rule.kind, "Message matched intent rule");
                return rule.resolve(text);
            }
        }

        debug!("No intent rule matched, falling back");
        Intent::Fallback
    }
}

impl Default for IntentClassifier {
    fn default() -> Self {
        Self::default_rules()
    }
}
