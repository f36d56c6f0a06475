//! Chat domain events for the stream hub. Published to the `chat:<pair_key>`
//! topic so both participants can follow a conversation live.

use serde::Serialize;
use serde_json::Value;

use crate::common::{ChatMessageId, UserId};

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ChatEvent {
    #[serde(rename_all = "camelCase")]
    MessageSent {
        chat_id: String,
        message_id: ChatMessageId,
        sender_id: UserId,
        text: String,
    },

    #[serde(rename_all = "camelCase")]
    ChatRead { chat_id: String, reader_id: UserId },
}

impl ChatEvent {
    pub fn chat_topic(chat_id: &str) -> String {
        format!("chat:{}", chat_id)
    }

    pub fn topic(&self) -> String {
        match self {
            ChatEvent::MessageSent { chat_id, .. } | ChatEvent::ChatRead { chat_id, .. } => {
                Self::chat_topic(chat_id)
            }
        }
    }

    pub fn to_payload(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}
