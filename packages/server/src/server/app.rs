//! Application setup and server configuration.

use std::sync::Arc;

use axum::{
    extract::{Extension, Request},
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        HeaderValue, Method,
    },
    middleware::{self, Next},
    response::Response,
    routing::{get, post},
    Router,
};
use sqlx::PgPool;
use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::domains::auth::JwtService;
use crate::kernel::{BaseNotifier, ServerDeps, WebhookNotifier};
use crate::server::graphql::{create_schema, GraphQLContext};
use crate::server::middleware::{jwt_auth_middleware, AuthUser};
use crate::server::routes::{
    graphql_batch_handler, graphql_handler, health_handler, stream_handler,
};

/// Shared application state
#[derive(Clone)]
pub struct AxumAppState {
    pub db_pool: PgPool,
    pub server_deps: Arc<ServerDeps>,
    pub jwt_service: Arc<JwtService>,
}

/// Middleware to create GraphQLContext per-request
async fn create_graphql_context(
    Extension(state): Extension<AxumAppState>,
    mut request: Request,
    next: Next,
) -> Response {
    // Auth user populated by jwt_auth_middleware, if the token verified
    let auth_user = request.extensions().get::<AuthUser>().cloned();

    let context = GraphQLContext::new(
        state.db_pool.clone(),
        state.server_deps.clone(),
        auth_user,
        state.jwt_service.clone(),
    );

    request.extensions_mut().insert(context);

    next.run(request).await
}

/// Build the Axum application router.
///
/// Returns the router plus the shared deps, which callers (tests, tooling)
/// may need outside the request path.
pub fn build_app(
    pool: PgPool,
    jwt_secret: String,
    jwt_issuer: String,
    allowed_origins: Vec<String>,
    admin_identifiers: Vec<String>,
    report_webhook_url: Option<String>,
) -> (Router, Arc<ServerDeps>) {
    let schema = Arc::new(create_schema());

    let notifier: Arc<dyn BaseNotifier> = Arc::new(WebhookNotifier::new(report_webhook_url));
    let server_deps = Arc::new(ServerDeps::new(pool.clone(), notifier, admin_identifiers));

    let jwt_service = Arc::new(JwtService::new(&jwt_secret, jwt_issuer));

    let app_state = AxumAppState {
        db_pool: pool,
        server_deps: server_deps.clone(),
        jwt_service: jwt_service.clone(),
    };

    // CORS: restricted to ALLOWED_ORIGINS when configured, open otherwise
    // (development)
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE]);
    let cors = if allowed_origins.is_empty() {
        cors.allow_origin(tower_http::cors::Any)
    } else {
        let origins: Vec<HeaderValue> = allowed_origins
            .iter()
            .filter_map(|origin| match origin.parse() {
                Ok(value) => Some(value),
                Err(_) => {
                    tracing::warn!(%origin, "Ignoring unparseable allowed origin");
                    None
                }
            })
            .collect();
        cors.allow_origin(AllowOrigin::list(origins))
    };

    let jwt_service_for_middleware = jwt_service.clone();

    // Rate limiting: 10 req/sec per IP with bursts of 20
    let rate_limit_config = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(10)
            .burst_size(20)
            .use_headers()
            .finish()
            .expect("rate limiter configuration is static"),
    );
    let rate_limit_layer = GovernorLayer {
        config: rate_limit_config,
    };

    let mut router = Router::new()
        .route("/graphql", post(graphql_handler))
        .route("/graphql/batch", post(graphql_batch_handler));

    // GraphQL playground only in debug builds (development)
    #[cfg(debug_assertions)]
    {
        router = router.route(
            "/graphql",
            get(crate::server::routes::graphql_playground),
        );
    }

    let app = router
        .route("/api/streams/:topic", get(stream_handler))
        // Health check (no rate limit)
        .route("/health", get(health_handler))
        // Middleware layers (applied in reverse order - last added runs first)
        .layer(middleware::from_fn(create_graphql_context))
        .layer(middleware::from_fn(move |req, next| {
            jwt_auth_middleware(jwt_service_for_middleware.clone(), req, next)
        }))
        .layer(rate_limit_layer)
        .layer(Extension(app_state))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(schema);

    (app, server_deps)
}
