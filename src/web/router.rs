//! Router configuration for the Web API.

use axum::{
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::datetime;
use crate::web::dto::HealthResponse;
use crate::web::handlers::{
    create_comment, create_post, get_post, list_board_posts, list_boards, list_comments, AppState,
};
use crate::web::middleware::create_cors_layer;

/// Create the main API router.
pub fn create_router(app_state: Arc<AppState>, cors_origins: &[String]) -> Router {
    let board_routes = Router::new()
        .route("/boards", get(list_boards))
        .route("/boards/:slug/posts", get(list_board_posts));

    let post_routes = Router::new()
        .route("/posts", post(create_post))
        .route("/posts/:id", get(get_post))
        .route("/posts/:id/comments", get(list_comments).post(create_comment));

    let api_routes = Router::new().merge(board_routes).merge(post_routes);

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
    Router::new().route("/healthz", get(healthz))
}

/// Health check handler.
async fn healthz() -> Json<HealthResponse> {
    Json(HealthResponse {
        ok: true,
        time: datetime::now_rfc3339(),
    })
}
