use super::{handlers, state::AppState};
use axum::extract::DefaultBodyLimit;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

/// Creates the Axum router with all the application routes.
pub fn create_router(app_state: AppState) -> Router {
    let upload_limit = app_state.config.max_upload_bytes();

    let branding_routes = Router::new()
        .route(
            "/create-from-interview",
            post(handlers::create_from_interview_handler)
                .layer(DefaultBodyLimit::max(upload_limit)),
        )
        .route("/health", get(handlers::health_handler))
        .route(
            "/supported-formats",
            get(handlers::supported_formats_handler),
        );

    Router::new()
        .route("/", get(handlers::root))
        .nest("/api/v1/branding", branding_routes)
        .with_state(app_state)
        .layer(TraceLayer::new_for_http())
}
