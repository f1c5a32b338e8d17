use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/health", get(handlers::health))
        .route("/api/calculators/:slug", post(handlers::submit))
        .route(
            "/:slug",
            get(handlers::calculator_page).post(handlers::submit_form),
        )
        .with_state(state)
}
