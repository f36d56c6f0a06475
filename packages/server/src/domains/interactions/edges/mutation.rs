//! GraphQL mutations for the interactions domain.

use juniper::{FieldError, FieldResult};
use tracing::info;

use crate::common::UserId;
use crate::domains::interactions::actions;
use crate::domains::interactions::data::InteractionResult;
use crate::server::graphql::context::GraphQLContext;

fn parse_user_id(s: &str) -> FieldResult<UserId> {
    UserId::parse(s)
        .map_err(|_| FieldError::new("invalid user id", juniper::Value::null()))
}

/// Like a profile. Returns whether a match formed and, if so, the chat id.
pub async fn like_profile(ctx: &GraphQLContext, user_id: String) -> FieldResult<InteractionResult> {
    let auth = ctx.require_auth_user()?;
    let target = parse_user_id(&user_id)?;

    info!(actor_id = %auth.user_id, target_id = %target, "Like intent");

    let outcome = actions::like_profile(auth.user_id, auth.is_admin, target, ctx.deps())
        .await
        .map_err(|e| FieldError::new(e.to_string(), juniper::Value::null()))?;

    Ok(InteractionResult::from(outcome))
}

/// Pass on a profile
pub async fn dislike_profile(
    ctx: &GraphQLContext,
    user_id: String,
) -> FieldResult<InteractionResult> {
    let auth = ctx.require_auth_user()?;
    let target = parse_user_id(&user_id)?;

    let outcome = actions::dislike_profile(auth.user_id, auth.is_admin, target, ctx.deps())
        .await
        .map_err(|e| FieldError::new(e.to_string(), juniper::Value::null()))?;

    Ok(InteractionResult::from(outcome))
}

/// Block a profile
pub async fn block_profile(
    ctx: &GraphQLContext,
    user_id: String,
) -> FieldResult<InteractionResult> {
    let auth = ctx.require_auth_user()?;
    let target = parse_user_id(&user_id)?;

    info!(actor_id = %auth.user_id, target_id = %target, "Block intent");

    let outcome = actions::block_profile(auth.user_id, auth.is_admin, target, ctx.deps())
        .await
        .map_err(|e| FieldError::new(e.to_string(), juniper::Value::null()))?;

    Ok(InteractionResult::from(outcome))
}

/// Remove a block the current user holds
pub async fn unblock_profile(
    ctx: &GraphQLContext,
    user_id: String,
) -> FieldResult<InteractionResult> {
    let auth = ctx.require_auth_user()?;
    let target = parse_user_id(&user_id)?;

    let outcome = actions::unblock_profile(auth.user_id, auth.is_admin, target, ctx.deps())
        .await
        .map_err(|e| FieldError::new(e.to_string(), juniper::Value::null()))?;

    Ok(InteractionResult::from(outcome))
}

/// Accept a pending match request
pub async fn accept_request(
    ctx: &GraphQLContext,
    user_id: String,
) -> FieldResult<InteractionResult> {
    let auth = ctx.require_auth_user()?;
    let requester = parse_user_id(&user_id)?;

    info!(actor_id = %auth.user_id, requester_id = %requester, "Accepting request");

    let outcome = actions::accept_request(auth.user_id, auth.is_admin, requester, ctx.deps())
        .await
        .map_err(|e| FieldError::new(e.to_string(), juniper::Value::null()))?;

    Ok(InteractionResult::from(outcome))
}

/// Decline a pending match request
pub async fn decline_request(
    ctx: &GraphQLContext,
    user_id: String,
) -> FieldResult<InteractionResult> {
    let auth = ctx.require_auth_user()?;
    let requester = parse_user_id(&user_id)?;

    let outcome = actions::decline_request(auth.user_id, auth.is_admin, requester, ctx.deps())
        .await
        .map_err(|e| FieldError::new(e.to_string(), juniper::Value::null()))?;

    Ok(InteractionResult::from(outcome))
}
