//! GraphQL queries for the profiles domain.

use juniper::FieldResult;

use crate::common::{PaginationArgs, UserId};
use crate::domains::profiles::actions;
use crate::domains::profiles::data::{ProfileConnection, ProfileData};
use crate::domains::profiles::models::Profile;
use crate::server::graphql::context::GraphQLContext;

/// Get a profile by id
pub async fn get_profile(ctx: &GraphQLContext, id: String) -> FieldResult<Option<ProfileData>> {
    let user_id = UserId::parse(&id)?;

    let profile = Profile::find_by_id(user_id, &ctx.db_pool).await?;
    Ok(profile.map(ProfileData::from))
}

/// Get the discovery feed for the authenticated viewer
pub async fn discovery_candidates(
    ctx: &GraphQLContext,
    first: Option<i32>,
    after: Option<String>,
    last: Option<i32>,
    before: Option<String>,
) -> FieldResult<ProfileConnection> {
    let viewer = ctx.require_user()?;

    let args = PaginationArgs {
        first,
        after,
        last,
        before,
    }
    .validate()?;

    let connection = actions::discovery_candidates(viewer, &args, ctx.deps()).await?;
    Ok(connection)
}
