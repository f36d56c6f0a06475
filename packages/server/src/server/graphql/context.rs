use std::sync::Arc;

use sqlx::PgPool;

use crate::common::{AuthError, UserId};
use crate::domains::auth::JwtService;
use crate::kernel::ServerDeps;
use crate::server::middleware::AuthUser;

/// GraphQL request context
///
/// Shared resources plus the per-request authenticated user (if any).
#[derive(Clone)]
pub struct GraphQLContext {
    pub db_pool: PgPool,
    pub server_deps: Arc<ServerDeps>,
    pub auth_user: Option<AuthUser>,
    pub jwt_service: Arc<JwtService>,
}

impl juniper::Context for GraphQLContext {}

impl GraphQLContext {
    pub fn new(
        db_pool: PgPool,
        server_deps: Arc<ServerDeps>,
        auth_user: Option<AuthUser>,
        jwt_service: Arc<JwtService>,
    ) -> Self {
        Self {
            db_pool,
            server_deps,
            auth_user,
            jwt_service,
        }
    }

    pub fn deps(&self) -> &ServerDeps {
        &self.server_deps
    }

    /// The authenticated user's id, or an authentication error.
    pub fn require_user(&self) -> Result<UserId, AuthError> {
        self.auth_user
            .as_ref()
            .map(|u| u.user_id)
            .ok_or(AuthError::AuthenticationRequired)
    }

    /// The full authenticated user (id + admin flag).
    pub fn require_auth_user(&self) -> Result<&AuthUser, AuthError> {
        self.auth_user
            .as_ref()
            .ok_or(AuthError::AuthenticationRequired)
    }
}
