//! GraphQL queries for the chats domain.

use juniper::{FieldError, FieldResult};

use crate::common::PaginationArgs;
use crate::domains::chats::actions;
use crate::domains::chats::data::{ChatData, MessageConnection};
use crate::server::graphql::context::GraphQLContext;

/// Get the current user's chats, most recent activity first
pub async fn my_chats(ctx: &GraphQLContext) -> FieldResult<Vec<ChatData>> {
    let viewer = ctx.require_user()?;

    let chats = actions::list_chats(viewer, ctx.deps())
        .await
        .map_err(|e| FieldError::new(e.to_string(), juniper::Value::null()))?;

    Ok(chats)
}

/// Get a page of messages in a chat
pub async fn chat_messages(
    ctx: &GraphQLContext,
    chat_id: String,
    first: Option<i32>,
    after: Option<String>,
    last: Option<i32>,
    before: Option<String>,
) -> FieldResult<MessageConnection> {
    let viewer = ctx.require_user()?;
    let args = PaginationArgs {
        first,
        after,
        last,
        before,
    };

    let connection = actions::list_messages(viewer, &chat_id, args, ctx.deps())
        .await
        .map_err(|e| FieldError::new(e.to_string(), juniper::Value::null()))?;

    Ok(connection)
}
