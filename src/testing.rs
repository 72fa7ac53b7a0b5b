//! In-memory doubles for the chat and backend traits, shared by unit tests.

use async_trait::async_trait;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use crate::domain::error::RemoteError;
use crate::domain::traits::{ChatProvider, RecommendationBackend};
use crate::domain::types::{ClassifyResult, SearchKind, SearchResult};

pub struct FakeBackend {
    classify: Result<ClassifyResult, RemoteError>,
    search: Result<SearchResult, RemoteError>,
    classify_calls: AtomicUsize,
    search_calls: AtomicUsize,
    last_search_keyword: Mutex<Option<String>>,
    delay: Duration,
}

impl FakeBackend {
    fn new(
        classify: Result<ClassifyResult, RemoteError>,
        search: Result<SearchResult, RemoteError>,
    ) -> Self {
        Self {
            classify,
            search,
            classify_calls: AtomicUsize::new(0),
            search_calls: AtomicUsize::new(0),
            last_search_keyword: Mutex::new(None),
            delay: Duration::ZERO,
        }
    }

    /// Classification sleeps for `delay` before answering.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn ok(keyword: &str, display_text: &str) -> Self {
        Self::new(
            Ok(ClassifyResult {
                keyword: keyword.to_string(),
            }),
            Ok(SearchResult {
                display_text: display_text.to_string(),
            }),
        )
    }

    pub fn classify_fails(err: RemoteError) -> Self {
        Self::new(
            Err(err),
            Ok(SearchResult {
                display_text: "unreachable".to_string(),
            }),
        )
    }

    pub fn search_fails(keyword: &str, err: RemoteError) -> Self {
        Self::new(
            Ok(ClassifyResult {
                keyword: keyword.to_string(),
            }),
            Err(err),
        )
    }

    pub fn classify_calls(&self) -> usize {
        self.classify_calls.load(Ordering::SeqCst)
    }

    pub fn search_calls(&self) -> usize {
        self.search_calls.load(Ordering::SeqCst)
    }

    pub fn last_search_keyword(&self) -> Option<String> {
        self.last_search_keyword.lock().unwrap().clone()
    }
}

#[async_trait]
impl RecommendationBackend for FakeBackend {
    async fn classify(&self, _query: &str) -> Result<ClassifyResult, RemoteError> {
        self.classify_calls.fetch_add(1, Ordering::SeqCst);
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        self.classify.clone()
    }

    async fn search(&self, _kind: SearchKind, keyword: &str) -> Result<SearchResult, RemoteError> {
        self.search_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_search_keyword.lock().unwrap() = Some(keyword.to_string());
        self.search.clone()
    }
}

/// Records every outgoing message as `(channel_id, content)`.
#[derive(Default)]
pub struct RecordingChat {
    sent: Mutex<Vec<(String, String)>>,
    typing_calls: AtomicUsize,
}

impl RecordingChat {
    pub fn messages(&self) -> Vec<(String, String)> {
        self.sent.lock().unwrap().clone()
    }

    pub fn last_message(&self) -> Option<String> {
        self.sent.lock().unwrap().last().map(|(_, content)| content.clone())
    }

    pub fn typing_calls(&self) -> usize {
        self.typing_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ChatProvider for RecordingChat {
    async fn send_message(&self, channel_id: &str, content: &str) -> Result<(), String> {
        self.sent
            .lock()
            .unwrap()
            .push((channel_id.to_string(), content.to_string()));
        Ok(())
    }

    async fn typing(&self, _channel_id: &str, _active: bool) -> Result<(), String> {
        self.typing_calls.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
