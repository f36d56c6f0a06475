//! Like and dislike intents.

use crate::common::UserId;
use crate::domains::interactions::actions::apply::{
    apply_intent, IntentOutcome, InteractionError,
};
use crate::domains::interactions::resolver::Intent;
use crate::kernel::ServerDeps;

/// Record that `actor` likes `target`. If the target already liked the
/// actor, the match is materialized in the same transaction and the outcome
/// carries the new chat id; otherwise the actor lands in the target's
/// requests set. Repeating a like converges with no further effect.
pub async fn like_profile(
    actor: UserId,
    is_admin: bool,
    target: UserId,
    deps: &ServerDeps,
) -> Result<IntentOutcome, InteractionError> {
    apply_intent(actor, is_admin, target, Intent::Like, deps).await
}

/// Record that `actor` passed on `target`. Removes any earlier like;
/// disliked profiles stop appearing in the actor's discovery feed.
pub async fn dislike_profile(
    actor: UserId,
    is_admin: bool,
    target: UserId,
    deps: &ServerDeps,
) -> Result<IntentOutcome, InteractionError> {
    apply_intent(actor, is_admin, target, Intent::Dislike, deps).await
}
