//! Axum router — maps all URL paths to handlers.

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

use crate::handlers::{
    history::{clear_history, delete_history_item, history_page, history_session_page},
    result_card::{save_result_item, toggle_result_item},
    system::{app_css, health},
    verify::{home_page, home_submit, results_page},
};
use crate::state::{AppState, SharedState};

/// Build and return the full Axum router.
pub fn build_router(state: AppState) -> Router {
    let shared: SharedState = Arc::new(state);

    Router::new()
        // Verify
        .route("/",                                    get(home_page).post(home_submit))
        .route("/results/{session}",                   get(results_page))
        .route("/results/{session}/items/{idx}/toggle", post(toggle_result_item))
        .route("/results/{session}/items/{idx}/save",   post(save_result_item))

        // History
        .route("/history",                             get(history_page))
        .route("/history/{session}",                   get(history_session_page))
        .route("/history/{session}/items/{id}/delete", post(delete_history_item))
        .route("/history/{session}/clear",             post(clear_history))

        .route("/health",                              get(health))
        .route("/static/css/app.css",                  get(app_css))

        // Middleware
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(shared)
}
