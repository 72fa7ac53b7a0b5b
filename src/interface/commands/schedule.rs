//! # Schedule Commands
//!
//! Handles `!setchannel`, `!setkeyword` and `!setinterval`.
//! These only mutate the shared schedule and confirm; none of them call the backend.

use crate::application::parsing::IntervalRequest;
use crate::application::scheduler::ScheduleSettings;
use crate::domain::traits::ChatProvider;
use crate::strings::messages;
use anyhow::Result;

pub async fn handle_set_channel(
    settings: &ScheduleSettings,
    chat: &impl ChatProvider,
    channel_id: &str,
) -> Result<()> {
    settings.set_destination(channel_id).await;
    tracing::info!("Scheduled recommendations will be posted to {}", channel_id);

    chat.send_message(channel_id, &messages::channel_set(channel_id))
        .await
        .map_err(|e| anyhow::anyhow!(e))
}

pub async fn handle_set_keyword(
    settings: &ScheduleSettings,
    chat: &impl ChatProvider,
    channel_id: &str,
    keyword: &str,
) -> Result<()> {
    settings.set_keyword(keyword).await;
    tracing::info!("Scheduled keyword set to '{}'", keyword);

    chat.send_message(channel_id, &messages::keyword_set(keyword))
        .await
        .map_err(|e| anyhow::anyhow!(e))
}

pub async fn handle_set_interval(
    settings: &ScheduleSettings,
    chat: &impl ChatProvider,
    channel_id: &str,
    request: &IntervalRequest,
) -> Result<()> {
    settings.set_interval(request.interval).await?;
    tracing::info!(
        "Scheduled interval set to {}",
        messages::describe_interval(request.interval)
    );

    chat.send_message(
        channel_id,
        &messages::interval_set(request.amount, &request.unit),
    )
    .await
    .map_err(|e| anyhow::anyhow!(e))
}
