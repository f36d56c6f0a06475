use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use sqlx::{PgExecutor, Postgres, Transaction};

use crate::common::UserId;
use crate::domains::chats::pair_key;
use crate::domains::interactions::resolver::PairState;

/// Kind of a directed interaction edge.
///
/// An edge `(owner, counterpart, kind)` is one element of the owner's
/// interaction record: `liked`/`disliked`/`blocked` are the owner's own
/// choices about the counterpart; `request` means the counterpart liked the
/// owner and awaits a response; `matched` means mutual interest was
/// confirmed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum EdgeKind {
    Liked,
    Disliked,
    Blocked,
    Request,
    Matched,
}

impl EdgeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EdgeKind::Liked => "liked",
            EdgeKind::Disliked => "disliked",
            EdgeKind::Blocked => "blocked",
            EdgeKind::Request => "request",
            EdgeKind::Matched => "matched",
        }
    }
}

impl std::fmt::Display for EdgeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for EdgeKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "liked" => Ok(EdgeKind::Liked),
            "disliked" => Ok(EdgeKind::Disliked),
            "blocked" => Ok(EdgeKind::Blocked),
            "request" => Ok(EdgeKind::Request),
            "matched" => Ok(EdgeKind::Matched),
            _ => Err(anyhow::anyhow!("Invalid edge kind: {}", s)),
        }
    }
}

/// A single directed interaction edge row.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct InteractionEdge {
    pub owner_id: UserId,
    pub counterpart_id: UserId,
    pub kind: String,
    pub created_at: DateTime<Utc>,
}

/// A user's full interaction ledger, aggregated from their owned edges.
///
/// This is the read model for the per-user `UserInteractions` record: the
/// liked / disliked / blocked / requests / matches sets.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Ledger {
    pub liked: Vec<UserId>,
    pub disliked: Vec<UserId>,
    pub blocked: Vec<UserId>,
    pub requests: Vec<UserId>,
    pub matches: Vec<UserId>,
}

impl Ledger {
    /// Load a user's ledger.
    pub async fn load(owner: UserId, executor: impl PgExecutor<'_>) -> Result<Self> {
        let edges = sqlx::query_as::<_, InteractionEdge>(
            "SELECT * FROM interaction_edges WHERE owner_id = $1 ORDER BY created_at",
        )
        .bind(owner)
        .fetch_all(executor)
        .await?;

        let mut ledger = Ledger::default();
        for edge in edges {
            match edge.kind.parse::<EdgeKind>()? {
                EdgeKind::Liked => ledger.liked.push(edge.counterpart_id),
                EdgeKind::Disliked => ledger.disliked.push(edge.counterpart_id),
                EdgeKind::Blocked => ledger.blocked.push(edge.counterpart_id),
                EdgeKind::Request => ledger.requests.push(edge.counterpart_id),
                EdgeKind::Matched => ledger.matches.push(edge.counterpart_id),
            }
        }
        Ok(ledger)
    }
}

/// Load both sides of a pair's edges as a resolver snapshot. Must run
/// inside the transaction that holds the pair advisory lock, so the
/// snapshot cannot go stale before the transition is applied.
pub async fn load_pair_state(
    actor: UserId,
    counterpart: UserId,
    executor: impl PgExecutor<'_>,
) -> Result<PairState> {
    let edges = sqlx::query_as::<_, InteractionEdge>(
        r#"
        SELECT * FROM interaction_edges
        WHERE (owner_id = $1 AND counterpart_id = $2)
           OR (owner_id = $2 AND counterpart_id = $1)
        "#,
    )
    .bind(actor)
    .bind(counterpart)
    .fetch_all(executor)
    .await?;

    let mut state = PairState::default();
    for edge in edges {
        let side = if edge.owner_id == actor {
            &mut state.actor
        } else {
            &mut state.counterpart
        };
        match edge.kind.parse::<EdgeKind>()? {
            EdgeKind::Liked => side.liked = true,
            EdgeKind::Disliked => side.disliked = true,
            EdgeKind::Blocked => side.blocked = true,
            EdgeKind::Request => side.request = true,
            EdgeKind::Matched => side.matched = true,
        }
    }
    Ok(state)
}

/// Add an edge. Idempotent: adding an already-present edge is a no-op
/// observable as success. Returns whether a row was actually inserted.
pub async fn add_edge(
    owner: UserId,
    counterpart: UserId,
    kind: EdgeKind,
    executor: impl PgExecutor<'_>,
) -> Result<bool> {
    let result = sqlx::query(
        r#"
        INSERT INTO interaction_edges (owner_id, counterpart_id, kind)
        VALUES ($1, $2, $3)
        ON CONFLICT DO NOTHING
        "#,
    )
    .bind(owner)
    .bind(counterpart)
    .bind(kind.as_str())
    .execute(executor)
    .await?;
    Ok(result.rows_affected() > 0)
}

/// Remove an edge. Returns whether a row existed.
pub async fn remove_edge(
    owner: UserId,
    counterpart: UserId,
    kind: EdgeKind,
    executor: impl PgExecutor<'_>,
) -> Result<bool> {
    let result = sqlx::query(
        r#"
        DELETE FROM interaction_edges
        WHERE owner_id = $1 AND counterpart_id = $2 AND kind = $3
        "#,
    )
    .bind(owner)
    .bind(counterpart)
    .bind(kind.as_str())
    .execute(executor)
    .await?;
    Ok(result.rows_affected() > 0)
}

/// Check whether an edge exists.
pub async fn has_edge(
    owner: UserId,
    counterpart: UserId,
    kind: EdgeKind,
    executor: impl PgExecutor<'_>,
) -> Result<bool> {
    let exists: bool = sqlx::query_scalar(
        r#"
        SELECT EXISTS (
            SELECT 1 FROM interaction_edges
            WHERE owner_id = $1 AND counterpart_id = $2 AND kind = $3
        )
        "#,
    )
    .bind(owner)
    .bind(counterpart)
    .bind(kind.as_str())
    .fetch_one(executor)
    .await?;
    Ok(exists)
}

/// Whether either user blocks the other (gates message sends).
pub async fn pair_blocked(
    a: UserId,
    b: UserId,
    executor: impl PgExecutor<'_>,
) -> Result<bool> {
    let exists: bool = sqlx::query_scalar(
        r#"
        SELECT EXISTS (
            SELECT 1 FROM interaction_edges
            WHERE kind = 'blocked'
              AND ((owner_id = $1 AND counterpart_id = $2)
                OR (owner_id = $2 AND counterpart_id = $1))
        )
        "#,
    )
    .bind(a)
    .bind(b)
    .fetch_one(executor)
    .await?;
    Ok(exists)
}

/// Take a transaction-scoped advisory lock on the unordered pair.
///
/// Pair-scoped mutations (like with its mutual check, request acceptance)
/// must serialize: two users liking each other concurrently would otherwise
/// each read "no match yet" and both skip chat creation. The lock key is
/// derived from the canonical pair key, so both sides compute the same key
/// without coordination.
pub async fn pair_advisory_lock(
    a: UserId,
    b: UserId,
    tx: &mut Transaction<'_, Postgres>,
) -> Result<()> {
    sqlx::query("SELECT pg_advisory_xact_lock($1)")
        .bind(pair_lock_key(a, b))
        .execute(&mut **tx)
        .await?;
    Ok(())
}

/// Derive a stable i64 advisory-lock key from the canonical pair key.
pub fn pair_lock_key(a: UserId, b: UserId) -> i64 {
    let digest = Sha256::digest(pair_key(a, b).as_bytes());
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&digest[..8]);
    i64::from_be_bytes(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_kind_round_trip() {
        for kind in [
            EdgeKind::Liked,
            EdgeKind::Disliked,
            EdgeKind::Blocked,
            EdgeKind::Request,
            EdgeKind::Matched,
        ] {
            assert_eq!(kind.as_str().parse::<EdgeKind>().unwrap(), kind);
        }
        assert!("unknown".parse::<EdgeKind>().is_err());
    }

    #[test]
    fn test_pair_lock_key_is_order_independent() {
        let a = UserId::new();
        let b = UserId::new();
        assert_eq!(pair_lock_key(a, b), pair_lock_key(b, a));
        assert_ne!(pair_lock_key(a, b), pair_lock_key(a, UserId::new()));
    }
}
