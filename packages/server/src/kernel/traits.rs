// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no business logic.
// Business logic (like "accept a request") lives in domain actions that use
// these traits.
//
// Naming convention: Base* for trait names (e.g., BaseNotifier)

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::common::{ReportId, UserId};

// =============================================================================
// Notifier Trait (report hand-off)
// =============================================================================

/// Payload handed to the notifier when a report is created.
///
/// The contract is fire-and-forget: the notifier eventually delivers an
/// email/webhook call; no acknowledgment is required and delivery failures
/// must never fail the report submission.
#[derive(Debug, Clone)]
pub struct ReportNotification {
    pub report_id: ReportId,
    pub reporter_id: UserId,
    pub reported_user_id: UserId,
    pub reason: String,
    pub created_at: DateTime<Utc>,
}

#[async_trait]
pub trait BaseNotifier: Send + Sync {
    /// Deliver a report notification to the moderation channel.
    async fn notify_report(&self, notification: &ReportNotification) -> Result<()>;
}
