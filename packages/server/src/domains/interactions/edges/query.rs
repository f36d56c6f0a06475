//! GraphQL queries for the interactions domain.

use juniper::{FieldError, FieldResult};

use crate::domains::interactions::actions;
use crate::domains::interactions::data::LedgerData;
use crate::domains::profiles::data::ProfileData;
use crate::server::graphql::context::GraphQLContext;

/// The current user's interaction ledger
pub async fn my_ledger(ctx: &GraphQLContext) -> FieldResult<LedgerData> {
    let viewer = ctx.require_user()?;

    let ledger = actions::my_ledger(viewer, ctx.deps())
        .await
        .map_err(|e| FieldError::new(e.to_string(), juniper::Value::null()))?;

    Ok(LedgerData::from(ledger))
}

/// Profiles awaiting the current user's response, newest first
pub async fn my_requests(ctx: &GraphQLContext) -> FieldResult<Vec<ProfileData>> {
    let viewer = ctx.require_user()?;

    let profiles = actions::list_requests(viewer, ctx.deps())
        .await
        .map_err(|e| FieldError::new(e.to_string(), juniper::Value::null()))?;

    Ok(profiles.into_iter().map(ProfileData::from).collect())
}

/// Profiles the current user has matched with, newest first
pub async fn my_matches(ctx: &GraphQLContext) -> FieldResult<Vec<ProfileData>> {
    let viewer = ctx.require_user()?;

    let profiles = actions::list_matches(viewer, ctx.deps())
        .await
        .map_err(|e| FieldError::new(e.to_string(), juniper::Value::null()))?;

    Ok(profiles.into_iter().map(ProfileData::from).collect())
}
