//! GraphQL mutations for the chats domain.

use juniper::{FieldError, FieldResult};
use tracing::info;

use crate::domains::chats::actions;
use crate::domains::chats::data::MessageData;
use crate::server::graphql::context::GraphQLContext;

/// Send a message to a chat
pub async fn send_message(
    ctx: &GraphQLContext,
    chat_id: String,
    text: String,
) -> FieldResult<MessageData> {
    let sender = ctx.require_user()?;

    info!(%chat_id, sender_id = %sender, "Sending chat message");

    let message = actions::send_message(sender, &chat_id, &text, ctx.deps())
        .await
        .map_err(|e| FieldError::new(e.to_string(), juniper::Value::null()))?;

    Ok(MessageData::from(message))
}

/// Mark a chat as read by the current user
pub async fn mark_chat_read(ctx: &GraphQLContext, chat_id: String) -> FieldResult<bool> {
    let reader = ctx.require_user()?;

    let cleared = actions::mark_chat_read(reader, &chat_id, ctx.deps())
        .await
        .map_err(|e| FieldError::new(e.to_string(), juniper::Value::null()))?;

    Ok(cleared)
}
