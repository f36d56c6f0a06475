//! Responding to incoming match requests.

use crate::common::UserId;
use crate::domains::interactions::actions::apply::{
    apply_intent, IntentOutcome, InteractionError,
};
use crate::domains::interactions::resolver::Intent;
use crate::kernel::ServerDeps;

/// Accept a pending request from `requester`. Writes the match on both
/// sides and materializes the chat in one transaction; fails with
/// `RequestNotFound` when no request is pending.
pub async fn accept_request(
    actor: UserId,
    is_admin: bool,
    requester: UserId,
    deps: &ServerDeps,
) -> Result<IntentOutcome, InteractionError> {
    apply_intent(actor, is_admin, requester, Intent::AcceptRequest, deps).await
}

/// Decline a pending request from `requester`. The requester moves into the
/// actor's disliked set so they do not resurface in discovery; the
/// requester is not notified.
pub async fn decline_request(
    actor: UserId,
    is_admin: bool,
    requester: UserId,
    deps: &ServerDeps,
) -> Result<IntentOutcome, InteractionError> {
    apply_intent(actor, is_admin, requester, Intent::DeclineRequest, deps).await
}
