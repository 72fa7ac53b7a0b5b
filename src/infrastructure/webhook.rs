//! # Webhook Mirror
//!
//! Optional outbound webhook that receives a copy of each scheduled recommendation
//! as `{"content": "..."}`.

use anyhow::{Context, Result};
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;

#[derive(Debug, Serialize)]
struct WebhookPayload<'a> {
    content: &'a str,
}

pub struct WebhookNotifier {
    http: Client,
    url: String,
}

impl WebhookNotifier {
    pub fn new(url: String, timeout_secs: u64) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;
        Ok(Self { http, url })
    }

    pub async fn notify(&self, content: &str) -> Result<()> {
        self.http
            .post(&self.url)
            .json(&WebhookPayload { content })
            .send()
            .await
            .context("Webhook request failed")?
            .error_for_status()
            .context("Webhook rejected the message")?;
        Ok(())
    }
}
