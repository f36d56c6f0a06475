/// Authorization module
///
/// Provides a fluent API for authorization checks in domain actions:
///
/// ```ignore
/// use crate::common::auth::{Actor, Capability};
///
/// Actor::new(actor_id, is_admin)
///     .can(Capability::AppendRequest { counterpart: target_id })
///     .check(&deps)?;
/// ```
///
/// This keeps the access-control boundary enforced by code at the action
/// layer, not by database rules alone.

mod builder;
mod capability;
mod errors;

pub use builder::{Actor, CapabilityBuilder, HasAuthContext};
pub use capability::Capability;
pub use errors::AuthError;
