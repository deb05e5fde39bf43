//! PropertyPlus bot — listing filter and rule-based chat responder.

pub mod api;
pub mod chat;
pub mod config;
pub mod error;
pub mod listings;
