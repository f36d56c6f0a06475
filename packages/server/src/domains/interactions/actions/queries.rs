//! Read-side actions for the interaction ledger.

use anyhow::Result;
use sqlx::PgPool;

use crate::common::UserId;
use crate::domains::interactions::models::{EdgeKind, Ledger};
use crate::domains::profiles::models::Profile;
use crate::kernel::ServerDeps;

/// The viewer's full ledger: liked / disliked / blocked / requests /
/// matches id sets.
pub async fn my_ledger(viewer: UserId, deps: &ServerDeps) -> Result<Ledger> {
    Ledger::load(viewer, &deps.db_pool).await
}

/// Profiles of users whose like awaits the viewer's response, newest first.
pub async fn list_requests(viewer: UserId, deps: &ServerDeps) -> Result<Vec<Profile>> {
    profiles_for_edges(viewer, EdgeKind::Request, &deps.db_pool).await
}

/// Profiles the viewer has matched with, newest match first.
pub async fn list_matches(viewer: UserId, deps: &ServerDeps) -> Result<Vec<Profile>> {
    profiles_for_edges(viewer, EdgeKind::Matched, &deps.db_pool).await
}

async fn profiles_for_edges(
    viewer: UserId,
    kind: EdgeKind,
    pool: &PgPool,
) -> Result<Vec<Profile>> {
    let profiles = sqlx::query_as::<_, Profile>(
        r#"
        SELECT p.* FROM profiles p
        JOIN interaction_edges e
          ON e.counterpart_id = p.id
        WHERE e.owner_id = $1 AND e.kind = $2
        ORDER BY e.created_at DESC
        "#,
    )
    .bind(viewer)
    .bind(kind.as_str())
    .fetch_all(pool)
    .await?;
    Ok(profiles)
}
