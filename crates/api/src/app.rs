use axum::{
    middleware,
    routing::{delete, get, patch, post, put},
    Router,
};
use sqlx::PgPool;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::Config;
use crate::middleware::{
    metrics_handler, metrics_middleware, require_admin, security_headers_middleware, trace_id,
};
use crate::routes::{
    admin_groups, admin_intercessions, admin_prayers, health, intercessions, prayers, stats,
    unsubscribe, verse,
};
use crate::services::EmailService;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: Arc<Config>,
    pub email: EmailService,
}

pub fn create_app(config: Config, pool: PgPool) -> Router {
    let config = Arc::new(config);

    let email = EmailService::new(
        config.email.clone(),
        config.security.unsubscribe_secret.clone(),
    );

    let state = AppState {
        pool,
        config: config.clone(),
        email,
    };

    // Build CORS layer based on configuration
    let cors = if config.security.cors_origins.is_empty() {
        // Default: allow any origin (for development)
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        // Production: only allow specified origins
        use tower_http::cors::AllowOrigin;
        let origins: Vec<_> = config
            .security
            .cors_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    };

    // Public routes (no authentication required)
    let public_routes = Router::new()
        .route("/api/prayers", post(prayers::submit_prayer))
        .route("/api/prayers", get(prayers::list_prayers))
        .route("/api/intercessions", get(intercessions::list_published))
        .route("/api/verse", get(verse::get_verse))
        .route("/api/unsubscribe", get(unsubscribe::check_status))
        .route("/api/unsubscribe", post(unsubscribe::unsubscribe))
        .route("/api/health", get(health::health_check))
        .route("/api/health/ready", get(health::ready))
        .route("/api/health/live", get(health::live))
        .route("/metrics", get(metrics_handler));

    // Admin routes (require the configured bearer token)
    let admin_routes = Router::new()
        .route("/api/admin/prayers", get(admin_prayers::list_prayers))
        .route("/api/admin/prayers/:id", patch(admin_prayers::respond))
        .route("/api/admin/prayers/:id", delete(admin_prayers::delete))
        .route(
            "/api/admin/intercessions",
            get(admin_intercessions::list_all).post(admin_intercessions::create),
        )
        .route(
            "/api/admin/intercessions/:id",
            get(admin_intercessions::get),
        )
        .route(
            "/api/admin/intercessions/:id",
            put(admin_intercessions::update),
        )
        .route(
            "/api/admin/intercessions/:id",
            patch(admin_intercessions::set_published),
        )
        .route(
            "/api/admin/intercessions/:id",
            delete(admin_intercessions::delete),
        )
        .route(
            "/api/admin/qr-groups",
            get(admin_groups::list_groups).post(admin_groups::create_group),
        )
        .route("/api/admin/qr-groups/:id", patch(admin_groups::update_group))
        .route(
            "/api/admin/qr-groups/:id",
            delete(admin_groups::delete_group),
        )
        .route("/api/admin/stats", get(stats::get_stats))
        .route("/api/admin/verse", post(verse::update_verse))
        .route(
            "/api/admin/unsubscribes/check",
            get(unsubscribe::check_status_admin),
        )
        // Admin auth runs first (outermost layer = runs first)
        .route_layer(middleware::from_fn_with_state(state.clone(), require_admin));

    // Merge all routes
    Router::new()
        .merge(public_routes)
        .merge(admin_routes)
        // Global middleware (order matters: bottom layers run first)
        .layer(middleware::from_fn(security_headers_middleware)) // Security headers
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(middleware::from_fn(metrics_middleware)) // Prometheus metrics
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(trace_id)) // Request ID and logging
        .layer(cors)
        .with_state(state)
}
