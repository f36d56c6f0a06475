use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

use crate::common::{UserId, ValidatedPaginationArgs};

/// Profile - user profile document, read-mostly from this service's
/// perspective. The identity provider creates profiles at signup; the only
/// field the core ever writes is the suspension flag.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Profile {
    pub id: UserId,
    pub username: String,
    pub bio: Option<String>,
    pub birth_year: Option<i32>,
    pub photo_url: Option<String>,
    pub is_suspended: bool,
    pub created_at: DateTime<Utc>,
}

impl Profile {
    /// Find profile by id
    pub async fn find_by_id(id: UserId, pool: &PgPool) -> Result<Option<Self>> {
        let profile = sqlx::query_as::<_, Profile>("SELECT * FROM profiles WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(profile)
    }

    /// Create a new profile
    pub async fn create(
        id: UserId,
        username: String,
        bio: Option<String>,
        birth_year: Option<i32>,
        photo_url: Option<String>,
        pool: &PgPool,
    ) -> Result<Self> {
        let profile = sqlx::query_as::<_, Profile>(
            r#"
            INSERT INTO profiles (id, username, bio, birth_year, photo_url)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(username)
        .bind(bio)
        .bind(birth_year)
        .bind(photo_url)
        .fetch_one(pool)
        .await?;
        Ok(profile)
    }

    /// Set the suspension flag
    pub async fn set_suspended(id: UserId, suspended: bool, pool: &PgPool) -> Result<Self> {
        let profile = sqlx::query_as::<_, Profile>(
            r#"
            UPDATE profiles
            SET is_suspended = $2
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(suspended)
        .fetch_one(pool)
        .await?;
        Ok(profile)
    }

    /// Discovery feed candidates for a viewer.
    ///
    /// Excludes the viewer themselves, suspended profiles, and every
    /// counterpart the viewer holds a liked / disliked / blocked / matched
    /// edge toward. Incoming requests do NOT exclude a profile - someone who
    /// liked you can still show up in your feed. Ordering is id (creation)
    /// order; there is no ranking.
    ///
    /// Fetches `limit + 1` rows so the caller can detect whether more exist.
    pub async fn find_discovery_candidates(
        viewer: UserId,
        args: &ValidatedPaginationArgs,
        pool: &PgPool,
    ) -> Result<Vec<Self>> {
        let query = if args.is_forward() {
            r#"
            SELECT * FROM profiles
            WHERE id <> $1
              AND is_suspended = FALSE
              AND ($2::uuid IS NULL OR id > $2)
              AND NOT EXISTS (
                  SELECT 1 FROM interaction_edges e
                  WHERE e.owner_id = $1
                    AND e.counterpart_id = profiles.id
                    AND e.kind IN ('liked', 'disliked', 'blocked', 'matched')
              )
            ORDER BY id ASC
            LIMIT $3
            "#
        } else {
            r#"
            SELECT * FROM profiles
            WHERE id <> $1
              AND is_suspended = FALSE
              AND ($2::uuid IS NULL OR id < $2)
              AND NOT EXISTS (
                  SELECT 1 FROM interaction_edges e
                  WHERE e.owner_id = $1
                    AND e.counterpart_id = profiles.id
                    AND e.kind IN ('liked', 'disliked', 'blocked', 'matched')
              )
            ORDER BY id DESC
            LIMIT $3
            "#
        };

        // Rows come back in query order (descending for backward pages);
        // the action layer trims the extra row and restores ascending order.
        let profiles = sqlx::query_as::<_, Profile>(query)
            .bind(viewer)
            .bind(args.cursor)
            .bind(args.fetch_limit())
            .fetch_all(pool)
            .await?;

        Ok(profiles)
    }
}
