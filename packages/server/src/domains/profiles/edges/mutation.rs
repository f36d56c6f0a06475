//! GraphQL mutations for the profiles domain.

use juniper::FieldResult;
use tracing::info;

use crate::common::UserId;
use crate::domains::profiles::actions;
use crate::domains::profiles::data::ProfileData;
use crate::server::graphql::context::GraphQLContext;

/// Suspend or reinstate a profile (admin)
pub async fn set_profile_suspended(
    ctx: &GraphQLContext,
    user_id: String,
    suspended: bool,
) -> FieldResult<ProfileData> {
    let admin = ctx.require_auth_user()?;
    let target = UserId::parse(&user_id)?;

    info!(admin_id = %admin.user_id, %target, suspended, "set_profile_suspended mutation");

    let profile = actions::set_profile_suspended(
        admin.user_id,
        admin.is_admin,
        target,
        suspended,
        ctx.deps(),
    )
    .await?;

    Ok(ProfileData::from(profile))
}
