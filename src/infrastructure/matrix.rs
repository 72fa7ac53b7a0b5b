//! # Matrix Service Adapter
//!
//! Implements the `ChatProvider` trait for the Matrix protocol using the `matrix_sdk`.
//! Channels are Matrix rooms; the channel ID is the room ID string.

use crate::domain::traits::ChatProvider;
use crate::domain::types::ChatEvent;
use async_trait::async_trait;
use matrix_sdk::Client;
use matrix_sdk::room::Room;
use matrix_sdk::ruma::RoomId;
use matrix_sdk::ruma::events::room::message::{
    MessageType, OriginalSyncRoomMessageEvent, RoomMessageEventContent,
};

#[derive(Clone)]
pub struct MatrixService {
    client: Client,
}

impl MatrixService {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    fn room(&self, channel_id: &str) -> Result<Room, String> {
        let room_id = <&RoomId>::try_from(channel_id).map_err(|e| e.to_string())?;
        self.client
            .get_room(room_id)
            .ok_or_else(|| format!("Room {channel_id} is not known to this client"))
    }
}

/// Converts a text message event into a `ChatEvent`. Non-text messages yield `None`.
pub fn to_chat_event(ev: &OriginalSyncRoomMessageEvent, room: &Room) -> Option<ChatEvent> {
    let MessageType::Text(text_content) = &ev.content.msgtype else {
        return None;
    };

    Some(ChatEvent {
        author_id: ev.sender.to_string(),
        author_name: ev.sender.localpart().to_string(),
        channel_id: room.room_id().to_string(),
        text: text_content.body.clone(),
    })
}

#[async_trait]
impl ChatProvider for MatrixService {
    async fn send_message(&self, channel_id: &str, content: &str) -> Result<(), String> {
        tracing::info!("Bot sending message to {}: {}", channel_id, content);
        self.room(channel_id)?
            .send(RoomMessageEventContent::text_markdown(content))
            .await
            .map(|_| ())
            .map_err(|e| e.to_string())
    }

    async fn typing(&self, channel_id: &str, active: bool) -> Result<(), String> {
        self.room(channel_id)?
            .typing_notice(active)
            .await
            .map_err(|e| e.to_string())
    }
}
