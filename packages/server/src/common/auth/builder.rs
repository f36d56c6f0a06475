use super::{AuthError, Capability};
use crate::common::entity_ids::UserId;

/// Entry point for authorization checks
///
/// Usage:
/// ```ignore
/// Actor::new(actor_id, is_admin)
///     .can(Capability::AppendRequest { counterpart: target_id })
///     .check(&deps)?;
/// ```
pub struct Actor {
    actor_id: UserId,
    is_admin: bool,
}

impl Actor {
    /// Create a new actor for authorization checks
    ///
    /// # Arguments
    /// * `actor_id` - The user id of the actor
    /// * `is_admin` - Admin flag from the verified JWT
    pub fn new(actor_id: UserId, is_admin: bool) -> Self {
        Self { actor_id, is_admin }
    }

    /// Specify what capability the actor needs
    pub fn can(self, capability: Capability) -> CapabilityBuilder {
        CapabilityBuilder {
            actor_id: self.actor_id,
            is_admin: self.is_admin,
            capability,
        }
    }
}

/// Builder after specifying capability
pub struct CapabilityBuilder {
    actor_id: UserId,
    is_admin: bool,
    capability: Capability,
}

impl CapabilityBuilder {
    /// Perform the authorization check
    pub fn check<D>(self, deps: &D) -> Result<(), AuthError>
    where
        D: HasAuthContext,
    {
        check_permission(self.actor_id, self.is_admin, self.capability, deps)
    }
}

/// Trait for dependencies that can perform auth checks
pub trait HasAuthContext: Send + Sync {
    fn admin_identifiers(&self) -> &[String];
}

/// Core permission check function
///
/// Admin capabilities are granted by the `is_admin` JWT claim or by the
/// server's own ADMIN_IDENTIFIERS list, so operator-configured admins work
/// even when the identity provider mints tokens without the claim.
/// Field-scoped append grants are available to any authenticated user, but
/// only toward a counterpart other than themselves.
fn check_permission<D>(
    actor_id: UserId,
    is_admin: bool,
    capability: Capability,
    deps: &D,
) -> Result<(), AuthError>
where
    D: HasAuthContext,
{
    match capability {
        Capability::AppendRequest { counterpart } | Capability::AppendMatch { counterpart } => {
            if counterpart == actor_id {
                return Err(AuthError::PermissionDenied(
                    "cannot append to your own record on behalf of yourself".to_string(),
                ));
            }
            Ok(())
        }
        Capability::SuspendProfiles | Capability::ManageReports => {
            let listed = deps
                .admin_identifiers()
                .iter()
                .any(|id| id == &actor_id.to_string());
            if !is_admin && !listed {
                return Err(AuthError::AdminRequired);
            }
            Ok(())
        }
    }
}
