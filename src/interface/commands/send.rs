//! # Send Command
//!
//! Handles `!send <text>`: resolves a recommendation for the text and replies with it,
//! or with the rendered error when the backend fails.

use crate::application::orchestrator::Recommender;
use crate::domain::traits::ChatProvider;
use anyhow::Result;

pub async fn handle_send(
    recommender: &Recommender,
    chat: &impl ChatProvider,
    channel_id: &str,
    query: &str,
) -> Result<()> {
    let _ = chat.typing(channel_id, true).await;
    let result = recommender.resolve(query).await;
    let _ = chat.typing(channel_id, false).await;

    let reply = match result {
        Ok(text) => text,
        Err(e) => {
            tracing::error!("Recommendation for '{}' failed: {}", query, e);
            e.user_message()
        }
    };

    chat.send_message(channel_id, &reply)
        .await
        .map_err(|e| anyhow::anyhow!(e))
}
