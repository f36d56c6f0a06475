//! GraphQL data types for chat messages.

use serde::{Deserialize, Serialize};

use crate::common::PageInfo;
use crate::domains::chats::models::ChatMessage;

/// GraphQL-friendly representation of a chat message
#[derive(Debug, Clone, Serialize, Deserialize, juniper::GraphQLObject)]
#[graphql(description = "A message in a chat")]
pub struct MessageData {
    /// Unique identifier
    pub id: String,

    /// Chat this message belongs to
    pub chat_id: String,

    /// Author of the message
    pub sender_id: String,

    /// Message content
    pub text: String,

    /// When the message was sent (ISO 8601)
    pub created_at: String,
}

impl From<ChatMessage> for MessageData {
    fn from(m: ChatMessage) -> Self {
        Self {
            id: m.id.to_string(),
            chat_id: m.chat_id,
            sender_id: m.sender_id.to_string(),
            text: m.text,
            created_at: m.created_at.to_rfc3339(),
        }
    }
}

#[derive(Debug, Clone, juniper::GraphQLObject)]
#[graphql(description = "A message with its pagination cursor")]
pub struct MessageEdge {
    pub node: MessageData,
    pub cursor: String,
}

#[derive(Debug, Clone, juniper::GraphQLObject)]
#[graphql(description = "A paginated page of chat messages")]
pub struct MessageConnection {
    pub edges: Vec<MessageEdge>,
    pub page_info: PageInfo,
}
