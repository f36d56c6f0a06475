//! Block and unblock intents.

use crate::common::UserId;
use crate::domains::interactions::actions::apply::{
    apply_intent, IntentOutcome, InteractionError,
};
use crate::domains::interactions::resolver::Intent;
use crate::kernel::ServerDeps;

/// Block `target`. Unilateral: the block gates message delivery in both
/// directions and removes the target from the actor's discovery feed, but
/// existing match and chat history stays readable.
pub async fn block_profile(
    actor: UserId,
    is_admin: bool,
    target: UserId,
    deps: &ServerDeps,
) -> Result<IntentOutcome, InteractionError> {
    apply_intent(actor, is_admin, target, Intent::Block, deps).await
}

/// Remove the actor's block on `target`. A no-op when no block exists.
pub async fn unblock_profile(
    actor: UserId,
    is_admin: bool,
    target: UserId,
    deps: &ServerDeps,
) -> Result<IntentOutcome, InteractionError> {
    apply_intent(actor, is_admin, target, Intent::Unblock, deps).await
}
