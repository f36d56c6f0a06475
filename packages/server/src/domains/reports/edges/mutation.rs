//! GraphQL mutations for the reports domain.

use juniper::{FieldError, FieldResult};

use crate::common::UserId;
use crate::domains::reports::actions;
use crate::domains::reports::data::ReportData;
use crate::server::graphql::context::GraphQLContext;

/// Report a user for moderation review
pub async fn submit_report(
    ctx: &GraphQLContext,
    user_id: String,
    reason: String,
) -> FieldResult<ReportData> {
    let reporter = ctx.require_user()?;
    let reported = UserId::parse(&user_id)
        .map_err(|_| FieldError::new("invalid user id", juniper::Value::null()))?;

    let report = actions::submit_report(reporter, reported, &reason, ctx.deps())
        .await
        .map_err(|e| FieldError::new(e.to_string(), juniper::Value::null()))?;

    Ok(ReportData::from(report))
}
