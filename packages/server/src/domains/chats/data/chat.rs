//! GraphQL data types for chat summaries.

use serde::{Deserialize, Serialize};

use crate::common::UserId;
use crate::domains::chats::models::Chat;

/// GraphQL-friendly representation of a chat summary
#[derive(Debug, Clone, Serialize, Deserialize, juniper::GraphQLObject)]
#[graphql(description = "A conversation between two matched users")]
pub struct ChatData {
    /// Canonical pair key: the two participant UUIDs sorted and joined
    pub id: String,

    /// The other participant from the viewer's perspective
    pub counterpart_id: String,

    /// Denormalized text of the latest message, if any
    pub last_message: Option<String>,

    /// When the latest message was sent (ISO 8601)
    pub last_message_at: Option<String>,

    /// Whether the latest message is unread by the viewer
    pub unread: bool,
}

impl ChatData {
    /// Chats are rendered from one participant's point of view: the
    /// counterpart is resolved relative to the viewer and the unread flag
    /// is true when the last message came from the other side.
    pub fn for_viewer(chat: Chat, viewer: UserId) -> Self {
        let unread = chat
            .last_message_sender_id
            .map(|sender| sender != viewer)
            .unwrap_or(false);
        Self {
            id: chat.id.clone(),
            counterpart_id: chat.counterpart_of(viewer).to_string(),
            last_message: chat.last_message,
            last_message_at: chat.last_message_at.map(|dt| dt.to_rfc3339()),
            unread,
        }
    }
}
