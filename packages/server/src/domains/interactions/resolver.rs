//! Match resolver - the pure state-transition rules for a counterpart pair.
//!
//! Every ledger mutation is decided here, over an in-memory snapshot of the
//! pair's edges, before anything touches the database. The actions layer
//! loads a [`PairState`] inside a transaction (holding the pair advisory
//! lock for pair-scoped intents), calls [`resolve`], and replays the
//! returned [`Transition`]. Keeping the rules pure makes the reconciliation
//! logic testable without a database.
//!
//! Canonical rules enforced here:
//! - `liked`, `disliked` and `blocked` are mutually exclusive per
//!   counterpart; a later choice removes the earlier edge.
//! - `matched` supersedes `liked`: when a match forms (mutual like or
//!   acceptance), the pair's `liked` and `request` edges are removed on both
//!   sides and `matched` is written on both sides.
//! - Blocking is unilateral and sticky: liking or disliking a counterpart
//!   you have blocked is refused until you unblock.

use thiserror::Error;

use crate::common::UserId;
use crate::domains::chats::pair_key;
use crate::domains::interactions::events::InteractionEvent;
use crate::domains::interactions::models::EdgeKind;

/// A directed interaction intent from the actor about the counterpart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Like,
    Dislike,
    Block,
    Unblock,
    AcceptRequest,
    DeclineRequest,
}

/// The edges one side owns toward the other.
#[derive(Debug, Clone, Copy, Default)]
pub struct SideState {
    pub liked: bool,
    pub disliked: bool,
    pub blocked: bool,
    /// The other side liked this side and awaits a response
    pub request: bool,
    pub matched: bool,
}

/// Snapshot of both sides of a pair, read under the pair lock.
#[derive(Debug, Clone, Copy, Default)]
pub struct PairState {
    /// Edges the actor owns toward the counterpart
    pub actor: SideState,
    /// Edges the counterpart owns toward the actor
    pub counterpart: SideState,
}

/// Which side of the pair an edge op applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Actor,
    Counterpart,
}

/// A single edge mutation to replay inside the transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeOp {
    Add(Side, EdgeKind),
    Remove(Side, EdgeKind),
}

/// The decided outcome of an intent: edge ops to replay, whether the chat
/// summary must be materialized, and the domain events to publish after
/// commit.
#[derive(Debug, Clone, Default)]
pub struct Transition {
    pub ops: Vec<EdgeOp>,
    pub materialize_chat: bool,
    pub events: Vec<InteractionEvent>,
}

/// Typed refusals. These reject the intent before any write happens; the
/// ledger is never left in an invalid state that needs operator attention.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransitionError {
    #[error("cannot interact with yourself")]
    SelfInteraction,

    #[error("you have blocked this user; unblock them first")]
    CounterpartBlocked,

    #[error("no pending request from this user")]
    RequestNotFound,
}

/// Decide the transition for `intent` by `actor` about `counterpart`.
pub fn resolve(
    intent: Intent,
    actor: UserId,
    counterpart: UserId,
    state: &PairState,
) -> Result<Transition, TransitionError> {
    if actor == counterpart {
        return Err(TransitionError::SelfInteraction);
    }

    match intent {
        Intent::Like => resolve_like(actor, counterpart, state),
        Intent::Dislike => resolve_dislike(state),
        Intent::Block => resolve_block(actor, counterpart, state),
        Intent::Unblock => resolve_unblock(actor, counterpart, state),
        Intent::AcceptRequest => resolve_accept(actor, counterpart, state),
        Intent::DeclineRequest => resolve_decline(actor, counterpart, state),
    }
}

fn resolve_like(
    actor: UserId,
    counterpart: UserId,
    state: &PairState,
) -> Result<Transition, TransitionError> {
    if state.actor.blocked {
        return Err(TransitionError::CounterpartBlocked);
    }

    // Already matched: repeat like converges to the same state
    if state.actor.matched {
        return Ok(Transition::default());
    }

    // Mutual: the counterpart's liked set already contains the actor
    if state.counterpart.liked {
        return Ok(materialize_match(actor, counterpart, state));
    }

    let mut ops = Vec::new();
    if !state.actor.liked {
        ops.push(EdgeOp::Add(Side::Actor, EdgeKind::Liked));
    }
    if state.actor.disliked {
        ops.push(EdgeOp::Remove(Side::Actor, EdgeKind::Disliked));
    }
    // Cross-account append: the actor enters the counterpart's requests set
    // so they are notified of incoming interest
    let mut events = Vec::new();
    if !state.counterpart.request {
        ops.push(EdgeOp::Add(Side::Counterpart, EdgeKind::Request));
        events.push(InteractionEvent::RequestReceived {
            from: actor,
            to: counterpart,
        });
    }

    Ok(Transition {
        ops,
        materialize_chat: false,
        events,
    })
}

fn resolve_dislike(state: &PairState) -> Result<Transition, TransitionError> {
    if state.actor.blocked {
        return Err(TransitionError::CounterpartBlocked);
    }

    let mut ops = Vec::new();
    if !state.actor.disliked {
        ops.push(EdgeOp::Add(Side::Actor, EdgeKind::Disliked));
    }
    if state.actor.liked {
        ops.push(EdgeOp::Remove(Side::Actor, EdgeKind::Liked));
    }

    Ok(Transition {
        ops,
        materialize_chat: false,
        events: Vec::new(),
    })
}

fn resolve_block(
    actor: UserId,
    counterpart: UserId,
    state: &PairState,
) -> Result<Transition, TransitionError> {
    // Blocking is reachable from any state and idempotent. It does not
    // remove match or chat state; it only gates future message delivery and
    // hides the profile from discovery.
    let mut ops = Vec::new();
    if !state.actor.blocked {
        ops.push(EdgeOp::Add(Side::Actor, EdgeKind::Blocked));
    }
    if state.actor.liked {
        ops.push(EdgeOp::Remove(Side::Actor, EdgeKind::Liked));
    }
    if state.actor.disliked {
        ops.push(EdgeOp::Remove(Side::Actor, EdgeKind::Disliked));
    }

    Ok(Transition {
        ops,
        materialize_chat: false,
        events: vec![InteractionEvent::Blocked {
            by: actor,
            target: counterpart,
        }],
    })
}

fn resolve_unblock(
    actor: UserId,
    counterpart: UserId,
    state: &PairState,
) -> Result<Transition, TransitionError> {
    if !state.actor.blocked {
        return Ok(Transition::default());
    }

    Ok(Transition {
        ops: vec![EdgeOp::Remove(Side::Actor, EdgeKind::Blocked)],
        materialize_chat: false,
        events: vec![InteractionEvent::Unblocked {
            by: actor,
            target: counterpart,
        }],
    })
}

fn resolve_accept(
    actor: UserId,
    counterpart: UserId,
    state: &PairState,
) -> Result<Transition, TransitionError> {
    if !state.actor.request {
        return Err(TransitionError::RequestNotFound);
    }
    if state.actor.blocked {
        return Err(TransitionError::CounterpartBlocked);
    }

    Ok(materialize_match(actor, counterpart, state))
}

fn resolve_decline(
    actor: UserId,
    counterpart: UserId,
    state: &PairState,
) -> Result<Transition, TransitionError> {
    if !state.actor.request {
        return Err(TransitionError::RequestNotFound);
    }

    let mut ops = vec![EdgeOp::Remove(Side::Actor, EdgeKind::Request)];
    // blocked supersedes disliked; the actor never owns both edges
    if !state.actor.blocked && !state.actor.disliked {
        ops.push(EdgeOp::Add(Side::Actor, EdgeKind::Disliked));
    }
    if state.actor.liked {
        ops.push(EdgeOp::Remove(Side::Actor, EdgeKind::Liked));
    }

    Ok(Transition {
        ops,
        materialize_chat: false,
        events: vec![InteractionEvent::RequestDeclined {
            by: actor,
            requester: counterpart,
        }],
    })
}

/// Converge both sides onto the matched state: `matched` edges on both
/// sides, pending `liked`/`request` edges between the pair cleaned up, chat
/// materialized.
fn materialize_match(actor: UserId, counterpart: UserId, state: &PairState) -> Transition {
    let mut ops = Vec::new();

    if !state.actor.matched {
        ops.push(EdgeOp::Add(Side::Actor, EdgeKind::Matched));
    }
    if !state.counterpart.matched {
        ops.push(EdgeOp::Add(Side::Counterpart, EdgeKind::Matched));
    }
    for (side, side_state) in [(Side::Actor, &state.actor), (Side::Counterpart, &state.counterpart)]
    {
        if side_state.liked {
            ops.push(EdgeOp::Remove(side, EdgeKind::Liked));
        }
        if side_state.request {
            ops.push(EdgeOp::Remove(side, EdgeKind::Request));
        }
        if side_state.disliked {
            ops.push(EdgeOp::Remove(side, EdgeKind::Disliked));
        }
    }

    Transition {
        ops,
        materialize_chat: true,
        events: vec![InteractionEvent::Matched {
            users: [actor, counterpart],
            chat_id: pair_key(actor, counterpart),
        }],
    }
}
