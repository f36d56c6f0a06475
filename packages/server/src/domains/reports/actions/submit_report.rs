//! Submitting a user report.

use thiserror::Error;
use tracing::{info, warn};

use crate::common::UserId;
use crate::domains::profiles::models::Profile;
use crate::domains::reports::models::Report;
use crate::kernel::{ReportNotification, ServerDeps};

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("reported user not found")]
    TargetNotFound,

    #[error("cannot report yourself")]
    SelfReport,

    #[error("a reason is required")]
    EmptyReason,

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

/// Persist a report, then notify the moderation channel.
///
/// The notification is fire-and-forget: the report row is the source of
/// truth, so a notifier failure is logged and the submission still
/// succeeds.
pub async fn submit_report(
    reporter: UserId,
    reported_user: UserId,
    reason: &str,
    deps: &ServerDeps,
) -> Result<Report, ReportError> {
    if reporter == reported_user {
        return Err(ReportError::SelfReport);
    }
    let reason = reason.trim();
    if reason.is_empty() {
        return Err(ReportError::EmptyReason);
    }

    let target = Profile::find_by_id(reported_user, &deps.db_pool)
        .await
        .map_err(ReportError::Internal)?
        .ok_or(ReportError::TargetNotFound)?;

    let report = Report::create(
        reporter,
        reported_user,
        &target.username,
        reason,
        &deps.db_pool,
    )
    .await
    .map_err(ReportError::Internal)?;

    info!(report_id = %report.id, reported_user_id = %reported_user, "report submitted");

    let notification = ReportNotification {
        report_id: report.id,
        reporter_id: reporter,
        reported_user_id: reported_user,
        reason: report.reason.clone(),
        created_at: report.created_at,
    };
    if let Err(err) = deps.notifier.notify_report(&notification).await {
        warn!(report_id = %report.id, error = %err, "report notification failed");
    }

    Ok(report)
}
