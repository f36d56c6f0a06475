//! GraphQL queries for the reports domain.

use juniper::{FieldError, FieldResult};

use crate::domains::reports::actions;
use crate::domains::reports::data::ReportData;
use crate::server::graphql::context::GraphQLContext;

/// Recent reports (admin only)
pub async fn recent_reports(
    ctx: &GraphQLContext,
    limit: Option<i32>,
) -> FieldResult<Vec<ReportData>> {
    let auth = ctx.require_auth_user()?;

    let reports = actions::list_reports(
        auth.user_id,
        auth.is_admin,
        limit.unwrap_or(50) as i64,
        ctx.deps(),
    )
    .await
    .map_err(|e| FieldError::new(e.to_string(), juniper::Value::null()))?;

    Ok(reports.into_iter().map(ReportData::from).collect())
}
