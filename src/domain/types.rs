//! # Domain Types
//!
//! Common data structures and enums used across the application logic.

use serde::{Deserialize, Serialize};

/// Inbound text message as delivered by the chat gateway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatEvent {
    pub author_id: String,
    pub author_name: String,
    pub channel_id: String,
    pub text: String,
}

/// Search term derived from a free-text query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifyResult {
    pub keyword: String,
}

/// Human-readable recommendation text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub display_text: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SearchKind {
    #[default]
    Track,
}

impl SearchKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchKind::Track => "track",
        }
    }
}
