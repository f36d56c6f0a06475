use anyhow::Result;
use chrono::{DateTime, Utc};
use sqlx::PgExecutor;

use crate::common::{ReportId, UserId};

/// A user report. Append-only; moderation happens out of band.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Report {
    pub id: ReportId,
    pub reporter_id: UserId,
    pub reported_user_id: UserId,
    pub reported_username: String,
    pub reason: String,
    pub created_at: DateTime<Utc>,
}

impl Report {
    pub async fn create(
        reporter: UserId,
        reported_user: UserId,
        reported_username: &str,
        reason: &str,
        executor: impl PgExecutor<'_>,
    ) -> Result<Self> {
        let report = sqlx::query_as::<_, Report>(
            r#"
            INSERT INTO reports (id, reporter_id, reported_user_id, reported_username, reason)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(ReportId::new())
        .bind(reporter)
        .bind(reported_user)
        .bind(reported_username)
        .bind(reason)
        .fetch_one(executor)
        .await?;
        Ok(report)
    }

    /// Recent reports, newest first. Admin-only read path.
    pub async fn list_recent(limit: i64, executor: impl PgExecutor<'_>) -> Result<Vec<Self>> {
        let reports = sqlx::query_as::<_, Report>(
            "SELECT * FROM reports ORDER BY created_at DESC LIMIT $1",
        )
        .bind(limit)
        .fetch_all(executor)
        .await?;
        Ok(reports)
    }
}
