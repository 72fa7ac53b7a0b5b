//! # Help Command
//!
//! Handles `!help` and `!hello`, plus the usage replies for malformed arguments.

use crate::application::parsing::UsageError;
use crate::domain::traits::ChatProvider;
use anyhow::Result;

pub async fn handle_help(chat: &impl ChatProvider, channel_id: &str) -> Result<()> {
    chat.send_message(channel_id, crate::strings::help::MAIN)
        .await
        .map_err(|e| anyhow::anyhow!(e))
}

pub async fn handle_hello(chat: &impl ChatProvider, channel_id: &str, name: &str) -> Result<()> {
    chat.send_message(channel_id, &crate::strings::messages::hello(name))
        .await
        .map_err(|e| anyhow::anyhow!(e))
}

pub async fn handle_usage(
    chat: &impl ChatProvider,
    channel_id: &str,
    usage: UsageError,
) -> Result<()> {
    chat.send_message(channel_id, usage.message())
        .await
        .map_err(|e| anyhow::anyhow!(e))
}
