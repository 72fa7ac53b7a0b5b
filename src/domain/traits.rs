//! # Domain Traits
//!
//! Abstract interfaces for core system components (Chat, Recommendation Backend).
//! Allows for pluggable implementations in the Infrastructure layer.

use async_trait::async_trait;

use crate::domain::error::RemoteError;
use crate::domain::types::{ClassifyResult, SearchKind, SearchResult};

/// Abstract interface for a Chat Provider (e.g., Matrix, Console)
#[async_trait]
pub trait ChatProvider: Send + Sync {
    /// Send a message to the given channel
    async fn send_message(&self, channel_id: &str, content: &str) -> Result<(), String>;

    /// Send a typing indicator
    async fn typing(&self, channel_id: &str, active: bool) -> Result<(), String>;
}

/// Abstract interface for the recommendation backend
#[async_trait]
pub trait RecommendationBackend: Send + Sync {
    /// Turn a free-text query into a search keyword
    async fn classify(&self, query: &str) -> Result<ClassifyResult, RemoteError>;

    /// Search the catalog for `keyword`
    async fn search(&self, kind: SearchKind, keyword: &str) -> Result<SearchResult, RemoteError>;
}
