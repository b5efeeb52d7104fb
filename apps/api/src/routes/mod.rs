pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::gaps::handlers as gap_handlers;
use crate::matching::handlers as match_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/rank", post(match_handlers::handle_rank))
        .route(
            "/api/v1/analyze-gaps",
            post(gap_handlers::handle_analyze_gaps),
        )
        .with_state(state)
}
