//! Sending a message into a pair chat.

use thiserror::Error;
use tracing::info;

use crate::common::UserId;
use crate::domains::chats::events::ChatEvent;
use crate::domains::chats::models::{Chat, ChatMessage};
use crate::domains::interactions::models::pair_blocked;
use crate::kernel::ServerDeps;

#[derive(Debug, Error)]
pub enum ChatError {
    #[error("chat not found")]
    ChatNotFound,

    #[error("you are not a participant of this chat")]
    NotAParticipant,

    #[error("this conversation is unavailable")]
    ConversationBlocked,

    #[error("message text cannot be empty")]
    EmptyMessage,

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl From<sqlx::Error> for ChatError {
    fn from(err: sqlx::Error) -> Self {
        ChatError::Internal(err.into())
    }
}

/// Append a message and denormalize it onto the chat summary in one
/// transaction.
///
/// The block gate is evaluated at send time in both directions: a block in
/// either direction refuses delivery, regardless of which side blocked.
/// History already in the chat stays readable.
pub async fn send_message(
    sender: UserId,
    chat_id: &str,
    text: &str,
    deps: &ServerDeps,
) -> Result<ChatMessage, ChatError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(ChatError::EmptyMessage);
    }

    let mut tx = deps.db_pool.begin().await?;

    let chat = Chat::find_by_id(chat_id, &mut *tx)
        .await?
        .ok_or(ChatError::ChatNotFound)?;
    if !chat.is_participant(sender) {
        return Err(ChatError::NotAParticipant);
    }

    let counterpart = chat.counterpart_of(sender);
    if pair_blocked(sender, counterpart, &mut *tx).await? {
        return Err(ChatError::ConversationBlocked);
    }

    let message = ChatMessage::create(chat_id, sender, text, &mut *tx).await?;
    Chat::update_last_message(chat_id, text, sender, message.created_at, &mut *tx).await?;

    tx.commit().await?;

    info!(%chat_id, sender_id = %sender, "chat message sent");

    let event = ChatEvent::MessageSent {
        chat_id: chat_id.to_string(),
        message_id: message.id,
        sender_id: sender,
        text: message.text.clone(),
    };
    deps.stream_hub
        .publish(&event.topic(), event.to_payload())
        .await;

    Ok(message)
}
