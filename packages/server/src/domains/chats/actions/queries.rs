//! Read-side actions for chats.

use crate::common::{build_page_info, trim_to_limit, Cursor, PaginationArgs, UserId};
use crate::domains::chats::actions::ChatError;
use crate::domains::chats::data::{ChatData, MessageConnection, MessageData, MessageEdge};
use crate::domains::chats::models::{Chat, ChatMessage};
use crate::kernel::ServerDeps;

/// The viewer's chat list, most recent activity first.
pub async fn list_chats(viewer: UserId, deps: &ServerDeps) -> Result<Vec<ChatData>, ChatError> {
    let chats = Chat::list_for_user(viewer, &deps.db_pool)
        .await
        .map_err(ChatError::Internal)?;
    Ok(chats
        .into_iter()
        .map(|chat| ChatData::for_viewer(chat, viewer))
        .collect())
}

/// A page of messages in a chat, oldest first. Message ids are time-ordered
/// UUIDs, so keyset pagination on the id doubles as chronological order.
pub async fn list_messages(
    viewer: UserId,
    chat_id: &str,
    args: PaginationArgs,
    deps: &ServerDeps,
) -> Result<MessageConnection, ChatError> {
    let chat = Chat::find_by_id(chat_id, &deps.db_pool)
        .await
        .map_err(ChatError::Internal)?
        .ok_or(ChatError::ChatNotFound)?;
    if !chat.is_participant(viewer) {
        return Err(ChatError::NotAParticipant);
    }

    let validated = args
        .validate()
        .map_err(|e| ChatError::Internal(anyhow::anyhow!(e)))?;

    let rows = ChatMessage::list_for_chat(
        chat_id,
        validated.cursor,
        validated.is_forward(),
        validated.fetch_limit(),
        &deps.db_pool,
    )
    .await
    .map_err(ChatError::Internal)?;

    let (mut messages, has_more) = trim_to_limit(rows, validated.limit);
    if !validated.is_forward() {
        messages.reverse();
    }

    let edges: Vec<MessageEdge> = messages
        .into_iter()
        .map(|m| MessageEdge {
            cursor: Cursor::encode_uuid(m.id.into_uuid()),
            node: MessageData::from(m),
        })
        .collect();

    let page_info = build_page_info(
        has_more,
        &validated,
        edges.first().map(|e| e.cursor.clone()),
        edges.last().map(|e| e.cursor.clone()),
    );

    Ok(MessageConnection { edges, page_info })
}
