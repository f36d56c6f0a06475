//! Shared transaction engine for ledger intents.
//!
//! Every write path (like, dislike, block, unblock, accept, decline) funnels
//! through [`apply_intent`]: authorize, verify the counterpart exists, take
//! the pair advisory lock inside a transaction, snapshot the pair, resolve
//! the transition, replay its edge ops, and materialize the chat summary
//! when the transition says so. Events publish only after commit.

use thiserror::Error;
use tracing::info;

use crate::common::{Actor, AuthError, Capability, UserId};
use crate::domains::chats::models::Chat;
use crate::domains::interactions::models::{
    add_edge, load_pair_state, pair_advisory_lock, remove_edge,
};
use crate::domains::interactions::resolver::{
    resolve, EdgeOp, Intent, Side, Transition, TransitionError,
};
use crate::kernel::ServerDeps;

#[derive(Debug, Error)]
pub enum InteractionError {
    #[error("user not found")]
    TargetNotFound,

    #[error(transparent)]
    Transition(#[from] TransitionError),

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl From<sqlx::Error> for InteractionError {
    fn from(err: sqlx::Error) -> Self {
        InteractionError::Internal(err.into())
    }
}

/// The committed outcome of an intent.
#[derive(Debug, Clone)]
pub struct IntentOutcome {
    /// Whether a match now exists between the pair
    pub matched: bool,
    /// The chat materialized by this transition, if any
    pub chat_id: Option<String>,
}

/// Which cross-account grant an intent needs, if any. Intents that only
/// touch the actor's own edges need no grant.
fn required_capability(intent: Intent, counterpart: UserId) -> Option<Capability> {
    match intent {
        Intent::Like => Some(Capability::AppendRequest { counterpart }),
        Intent::AcceptRequest => Some(Capability::AppendMatch { counterpart }),
        Intent::Dislike | Intent::Block | Intent::Unblock | Intent::DeclineRequest => None,
    }
}

pub async fn apply_intent(
    actor: UserId,
    is_admin: bool,
    counterpart: UserId,
    intent: Intent,
    deps: &ServerDeps,
) -> Result<IntentOutcome, InteractionError> {
    if let Some(capability) = required_capability(intent, counterpart) {
        Actor::new(actor, is_admin).can(capability).check(deps)?;
    }

    let target_exists: bool =
        sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM profiles WHERE id = $1)")
            .bind(counterpart)
            .fetch_one(&deps.db_pool)
            .await?;
    if !target_exists {
        return Err(InteractionError::TargetNotFound);
    }

    let mut tx = deps.db_pool.begin().await?;

    // Serializes against the concurrent mutual-like and accept paths for
    // this pair.
    pair_advisory_lock(actor, counterpart, &mut tx)
        .await
        .map_err(InteractionError::Internal)?;

    let state = load_pair_state(actor, counterpart, &mut *tx)
        .await
        .map_err(InteractionError::Internal)?;
    let transition = resolve(intent, actor, counterpart, &state)?;

    for op in &transition.ops {
        let (owner, other) = match op {
            EdgeOp::Add(Side::Actor, _) | EdgeOp::Remove(Side::Actor, _) => (actor, counterpart),
            EdgeOp::Add(Side::Counterpart, _) | EdgeOp::Remove(Side::Counterpart, _) => {
                (counterpart, actor)
            }
        };
        match op {
            EdgeOp::Add(_, kind) => {
                add_edge(owner, other, *kind, &mut *tx)
                    .await
                    .map_err(InteractionError::Internal)?;
            }
            EdgeOp::Remove(_, kind) => {
                remove_edge(owner, other, *kind, &mut *tx)
                    .await
                    .map_err(InteractionError::Internal)?;
            }
        }
    }

    let chat_id = if transition.materialize_chat {
        let chat = Chat::get_or_create_for_pair(actor, counterpart, &mut *tx)
            .await
            .map_err(InteractionError::Internal)?;
        Some(chat.id)
    } else {
        None
    };

    tx.commit().await?;

    let matched = transition.materialize_chat || state.actor.matched;
    if !transition.events.is_empty() {
        info!(
            actor_id = %actor,
            counterpart_id = %counterpart,
            ?intent,
            matched,
            "interaction applied"
        );
    }
    publish_events(&transition, deps).await;

    Ok(IntentOutcome { matched, chat_id })
}

async fn publish_events(transition: &Transition, deps: &ServerDeps) {
    for event in &transition.events {
        let payload = event.to_payload();
        for topic in event.topics() {
            deps.stream_hub.publish(&topic, payload.clone()).await;
        }
    }
}
