//! Admin read path for reports.

use anyhow::Result;

use crate::common::{Actor, Capability, UserId};
use crate::domains::reports::models::Report;
use crate::kernel::ServerDeps;

/// Recent reports, newest first. Requires the admin report capability.
pub async fn list_reports(
    viewer: UserId,
    is_admin: bool,
    limit: i64,
    deps: &ServerDeps,
) -> Result<Vec<Report>> {
    Actor::new(viewer, is_admin)
        .can(Capability::ManageReports)
        .check(deps)?;

    Report::list_recent(limit.clamp(1, 200), &deps.db_pool).await
}
