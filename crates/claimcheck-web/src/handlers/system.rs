//! Health probe and embedded static assets.

use axum::{
    extract::State,
    http::header,
    response::IntoResponse,
    Json,
};
use serde::Serialize;
use tracing::warn;

use crate::state::SharedState;
use crate::templates::APP_CSS;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub backend: &'static str,
}

/// GET /health
pub async fn health(State(state): State<SharedState>) -> Json<HealthResponse> {
    let backend = match state.backend.health().await {
        Ok(()) => "ok",
        Err(e) => {
            warn!(error = %e, "Backend health probe failed");
            "unreachable"
        }
    };
    Json(HealthResponse { status: "ok", backend })
}

/// GET /static/css/app.css
pub async fn app_css() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/css; charset=utf-8")], APP_CSS)
}
