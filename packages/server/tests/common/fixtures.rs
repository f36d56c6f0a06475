//! Test fixtures for creating test data.

use anyhow::Result;
use sqlx::PgPool;

use server_core::common::UserId;
use server_core::domains::profiles::models::Profile;

/// Create a test profile and return its id.
pub async fn create_test_profile(pool: &PgPool, username: &str) -> Result<UserId> {
    let profile = Profile::create(
        UserId::new(),
        username.to_string(),
        Some(format!("{} says hi", username)),
        Some(1995),
        None,
        pool,
    )
    .await?;
    Ok(profile.id)
}

/// Create a suspended test profile and return its id.
pub async fn create_suspended_profile(pool: &PgPool, username: &str) -> Result<UserId> {
    let id = create_test_profile(pool, username).await?;
    Profile::set_suspended(id, true, pool).await?;
    Ok(id)
}
