//! # Command Router
//!
//! Routes incoming messages to the appropriate command handler (in `interface/commands`).
//! It parses the message once into a `Command` and dispatches it with the necessary context.

use anyhow::Result;
use std::sync::Arc;

use crate::application::orchestrator::Recommender;
use crate::application::parsing::{Command, parse_command};
use crate::application::scheduler::ScheduleSettings;
use crate::domain::traits::ChatProvider;
use crate::domain::types::ChatEvent;
use crate::interface::commands;

pub struct CommandRouter {
    settings: ScheduleSettings,
    recommender: Arc<Recommender>,
    bot_user_id: String,
}

impl CommandRouter {
    pub fn new(
        settings: ScheduleSettings,
        recommender: Arc<Recommender>,
        bot_user_id: impl Into<String>,
    ) -> Self {
        Self {
            settings,
            recommender,
            bot_user_id: bot_user_id.into(),
        }
    }

    pub async fn route<C>(&self, chat: &C, event: &ChatEvent) -> Result<()>
    where
        C: ChatProvider,
    {
        // Never react to our own messages.
        if event.author_id == self.bot_user_id {
            return Ok(());
        }

        let command = parse_command(&event.text);
        if command == Command::Unrecognized {
            return Ok(());
        }

        tracing::info!(
            "Router dispatching {:?} sender='{}' channel='{}'",
            command,
            event.author_id,
            event.channel_id
        );

        let channel = event.channel_id.as_str();
        match command {
            Command::SetChannel => {
                commands::schedule::handle_set_channel(&self.settings, chat, channel).await?;
            }
            Command::SetKeyword(keyword) => {
                commands::schedule::handle_set_keyword(&self.settings, chat, channel, &keyword)
                    .await?;
            }
            Command::SetInterval(request) => {
                commands::schedule::handle_set_interval(&self.settings, chat, channel, &request)
                    .await?;
            }
            Command::Send(query) => {
                commands::send::handle_send(&self.recommender, chat, channel, &query).await?;
            }
            Command::Hello => {
                commands::help::handle_hello(chat, channel, &event.author_name).await?;
            }
            Command::Help => {
                commands::help::handle_help(chat, channel).await?;
            }
            Command::Invalid(usage) => {
                commands::help::handle_usage(chat, channel, usage).await?;
            }
            Command::Unrecognized => {}
        }

        Ok(())
    }
}
