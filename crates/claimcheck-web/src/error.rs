use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use thiserror::Error;
use uuid::Uuid;

/// Failures of the web layer itself. Backend failures never reach here;
/// each page turns them into its own UI state.
#[derive(Debug, Error)]
pub enum WebError {
    #[error("page session {0} not found")]
    SessionNotFound(Uuid),

    #[error("item {0} not found")]
    ItemNotFound(usize),

    #[error("template error: {0}")]
    Template(#[from] minijinja::Error),
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        match &self {
            WebError::SessionNotFound(_) | WebError::ItemNotFound(_) => {
                tracing::debug!(error = %self, "Stale page action");
                (
                    StatusCode::NOT_FOUND,
                    Html(
                        r#"<!DOCTYPE html>
<html lang="en"><head><meta charset="UTF-8"><title>Page expired — AI Verifier</title></head>
<body><p>This page has expired. <a href="/">Verify a new claim</a> or open your <a href="/history">history</a>.</p></body>
</html>"#,
                    ),
                )
                    .into_response()
            }
            WebError::Template(err) => {
                tracing::error!(error = %err, "Template rendering failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "An internal error occurred").into_response()
            }
        }
    }
}

pub type WebResult<T> = Result<T, WebError>;
