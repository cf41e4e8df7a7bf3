//! Router configuration for Web API.

use axum::{
    routing::{delete, get, post},
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use super::handlers::{
    create_board, create_post, delete_board, get_post, get_user, list_admin_boards,
    list_admin_posts, list_board_posts, list_users, toggle_like, update_user, AppState,
};
use super::middleware::create_cors_layer;

/// Create the main API router.
pub fn create_router(app_state: Arc<AppState>, cors_origins: &[String]) -> Router {
    // Public board routes
    let board_routes = Router::new()
        .route("/:url/posts", get(list_board_posts).post(create_post));

    let post_routes = Router::new()
        .route("/:id", get(get_post))
        .route("/:id/like", post(toggle_like));

    // Admin routes
    let admin_routes = Router::new()
        .route("/boards", get(list_admin_boards).post(create_board))
        .route("/boards/:id", delete(delete_board))
        .route("/posts", get(list_admin_posts))
        .route("/users", get(list_users))
        .route("/users/:id", get(get_user).patch(update_user));

    let api_routes = Router::new()
        .nest("/boards", board_routes)
        .nest("/posts", post_routes)
        .nest("/admin", admin_routes);

    Router::new()
        .nest("/api", api_routes)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(create_cors_layer(cors_origins)),
        )
        .with_state(app_state)
}

/// Create a health check router.
pub fn create_health_router() -> Router {
    Router::new().route("/health", get(health_check))
}

/// Health check handler.
async fn health_check() -> &'static str {
    "OK"
}

/// API router plus health check.
pub fn create_app(app_state: Arc<AppState>, cors_origins: &[String]) -> Router {
    create_router(app_state, cors_origins).merge(create_health_router())
}
