//! # Recommendation Orchestrator
//!
//! Turns the two backend calls (classify, then search) into one
//! "resolve a recommendation for a free-text query" operation.
//! A classification failure never reaches the search stage, and errors are returned unchanged.

use std::sync::Arc;

use crate::domain::error::RemoteError;
use crate::domain::traits::RecommendationBackend;
use crate::domain::types::SearchKind;

pub struct Recommender {
    backend: Arc<dyn RecommendationBackend>,
}

impl Recommender {
    pub fn new(backend: Arc<dyn RecommendationBackend>) -> Self {
        Self { backend }
    }

    pub async fn resolve(&self, query: &str) -> Result<String, RemoteError> {
        let classified = self.backend.classify(query).await.inspect_err(|e| {
            tracing::warn!("Classification failed for '{}': {}", query, e);
        })?;
        tracing::info!("Classified '{}' as '{}'", query, classified.keyword);

        let found = self
            .backend
            .search(SearchKind::Track, &classified.keyword)
            .await
            .inspect_err(|e| {
                tracing::warn!("Search failed for '{}': {}", classified.keyword, e);
            })?;

        Ok(found.display_text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeBackend;

    #[tokio::test]
    async fn test_resolve_chains_classify_into_search() {
        let backend = Arc::new(FakeBackend::ok("upbeat", "Song X"));
        let recommender = Recommender::new(backend.clone());

        let result = recommender.resolve("Let's hear something upbeat").await;

        assert_eq!(result, Ok("Song X".to_string()));
        assert_eq!(backend.classify_calls(), 1);
        assert_eq!(backend.search_calls(), 1);
        assert_eq!(backend.last_search_keyword().as_deref(), Some("upbeat"));
    }

    #[tokio::test]
    async fn test_classify_failure_short_circuits() {
        let errors = [
            RemoteError::Transport("connection refused".into()),
            RemoteError::HttpStatus(500),
            RemoteError::Decode("expected value".into()),
            RemoteError::BackendReported("model unavailable".into()),
            RemoteError::Empty,
        ];

        for err in errors {
            let backend = Arc::new(FakeBackend::classify_fails(err.clone()));
            let recommender = Recommender::new(backend.clone());

            assert_eq!(recommender.resolve("test").await, Err(err));
            assert_eq!(backend.search_calls(), 0);
        }
    }

    #[tokio::test]
    async fn test_search_failure_is_propagated() {
        let backend = Arc::new(FakeBackend::search_fails(
            "upbeat",
            RemoteError::HttpStatus(503),
        ));
        let recommender = Recommender::new(backend.clone());

        assert_eq!(
            recommender.resolve("test").await,
            Err(RemoteError::HttpStatus(503))
        );
        assert_eq!(backend.search_calls(), 1);
    }
}
