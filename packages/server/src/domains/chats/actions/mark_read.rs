//! Clearing the unread marker when a participant opens a chat.

use crate::common::UserId;
use crate::domains::chats::actions::ChatError;
use crate::domains::chats::events::ChatEvent;
use crate::domains::chats::models::Chat;
use crate::kernel::ServerDeps;

/// Mark a chat read by `reader`. Clears the denormalized sender marker only
/// when the latest message came from the other side; a sender opening their
/// own chat leaves the counterpart's unread state alone. Idempotent.
pub async fn mark_chat_read(
    reader: UserId,
    chat_id: &str,
    deps: &ServerDeps,
) -> Result<bool, ChatError> {
    let chat = Chat::find_by_id(chat_id, &deps.db_pool)
        .await
        .map_err(ChatError::Internal)?
        .ok_or(ChatError::ChatNotFound)?;
    if !chat.is_participant(reader) {
        return Err(ChatError::NotAParticipant);
    }

    let cleared = Chat::clear_unread_marker(chat_id, reader, &deps.db_pool)
        .await
        .map_err(ChatError::Internal)?;

    if cleared {
        let event = ChatEvent::ChatRead {
            chat_id: chat_id.to_string(),
            reader_id: reader,
        };
        deps.stream_hub
            .publish(&event.topic(), event.to_payload())
            .await;
    }

    Ok(cleared)
}
