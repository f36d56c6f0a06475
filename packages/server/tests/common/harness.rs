//! Test harness with testcontainers for integration testing.
//!
//! A single Postgres container is started once and shared by every test;
//! each test then gets its own database on that container, so global
//! queries (the discovery feed, report listings) see only the test's own
//! rows.

use anyhow::{Context, Result};
use sqlx::PgPool;
use std::sync::Arc;
use test_context::AsyncTestContext;
use testcontainers::runners::AsyncRunner;
use testcontainers::{ContainerAsync, ImageExt};
use testcontainers_modules::postgres::Postgres;
use tokio::sync::OnceCell;

use server_core::kernel::test_dependencies::MockNotifier;
use server_core::kernel::{BaseNotifier, ServerDeps};

use super::GraphQLClient;

/// Shared test infrastructure that persists across all tests.
struct SharedTestInfra {
    /// Connection URL prefix without a database name
    base_url: String,
    // Keep the container alive for the entire test run
    _postgres: ContainerAsync<Postgres>,
}

static SHARED_INFRA: OnceCell<SharedTestInfra> = OnceCell::const_new();

impl SharedTestInfra {
    async fn init() -> Result<Self> {
        // Respect RUST_LOG in test output; try_init to avoid double-init panics
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();

        let postgres = Postgres::default()
            .with_tag("16")
            .with_cmd(["-c", "max_connections=200"])
            .start()
            .await
            .context("Failed to start Postgres container")?;

        let pg_host = postgres.get_host().await?;
        let pg_port = postgres.get_host_port_ipv4(5432).await?;
        let base_url = format!("postgresql://postgres:postgres@{}:{}", pg_host, pg_port);

        Ok(Self {
            base_url,
            _postgres: postgres,
        })
    }

    pub(super) async fn get() -> &'static Self {
        SHARED_INFRA
            .get_or_init(|| async {
                Self::init()
                    .await
                    .expect("Failed to initialize shared test infrastructure")
            })
            .await
    }

    /// Create a fresh database on the shared container and migrate it.
    async fn create_database(&self) -> Result<PgPool> {
        let db_name = format!("test_{}", uuid::Uuid::new_v4().simple());

        let admin_pool = PgPool::connect(&format!("{}/postgres", self.base_url))
            .await
            .context("Failed to connect to admin database")?;
        sqlx::query(&format!(r#"CREATE DATABASE "{}""#, db_name))
            .execute(&admin_pool)
            .await
            .context("Failed to create test database")?;
        admin_pool.close().await;

        let db_pool = PgPool::connect(&format!("{}/{}", self.base_url, db_name))
            .await
            .context("Failed to connect to test database")?;

        sqlx::migrate!("./migrations")
            .run(&db_pool)
            .await
            .context("Failed to run migrations")?;

        Ok(db_pool)
    }
}

/// Test harness that manages test infrastructure.
///
/// Each test gets a fresh database plus deps wired with a mock notifier.
///
/// # Example using test-context
///
/// ```ignore
/// use test_context::test_context;
///
/// #[test_context(TestHarness)]
/// #[tokio::test]
/// async fn my_test(ctx: &mut TestHarness) {
///     let client = ctx.graphql();
///     // ... test code
/// }
/// ```
pub struct TestHarness {
    /// Database pool - use this for test fixtures.
    pub db_pool: PgPool,
    /// Shared deps wired with the mock notifier.
    pub deps: Arc<ServerDeps>,
    /// The mock notifier behind `deps.notifier`, for assertions.
    pub notifier: Arc<MockNotifier>,
}

impl AsyncTestContext for TestHarness {
    async fn setup() -> Self {
        Self::new().await.expect("Failed to create test harness")
    }

    async fn teardown(self) {
        // Database pool is automatically dropped
    }
}

impl TestHarness {
    pub async fn new() -> Result<Self> {
        let infra = SharedTestInfra::get().await;
        let db_pool = infra.create_database().await?;

        let notifier = Arc::new(MockNotifier::new());
        let deps = Arc::new(ServerDeps::new(
            db_pool.clone(),
            notifier.clone() as Arc<dyn BaseNotifier>,
            vec![],
        ));

        Ok(Self {
            db_pool,
            deps,
            notifier,
        })
    }

    /// Get an unauthenticated GraphQL client for this harness.
    pub fn graphql(&self) -> GraphQLClient {
        GraphQLClient::new(self.db_pool.clone(), self.deps.clone())
    }

    /// Get a GraphQL client authenticated as the given user.
    pub fn graphql_as(&self, user_id: uuid::Uuid, is_admin: bool) -> GraphQLClient {
        GraphQLClient::with_auth_user(self.db_pool.clone(), self.deps.clone(), user_id, is_admin)
    }
}
