//! Suspend/reinstate a profile (admin)

use anyhow::Result;
use tracing::info;

use crate::common::{Actor, Capability, UserId};
use crate::domains::profiles::models::Profile;
use crate::kernel::ServerDeps;

/// Set the suspension flag on a profile.
///
/// Suspended profiles disappear from discovery; existing chats and matches
/// are untouched.
pub async fn set_profile_suspended(
    admin_id: UserId,
    is_admin: bool,
    target: UserId,
    suspended: bool,
    deps: &ServerDeps,
) -> Result<Profile> {
    Actor::new(admin_id, is_admin)
        .can(Capability::SuspendProfiles)
        .check(deps)?;

    info!(%admin_id, %target, suspended, "Setting profile suspension flag");

    let profile = Profile::set_suspended(target, suspended, &deps.db_pool).await?;
    Ok(profile)
}
