//! History page — saved summaries, with delete and clear.

use axum::{
    extract::{Path, State},
    response::{Html, Redirect},
};
use serde::Serialize;
use tracing::{debug, error, info};
use uuid::Uuid;

use claimcheck_client::VerifierBackend;
use claimcheck_common::{HistoryRecord, Result};

use crate::error::{WebError, WebResult};
use crate::state::SharedState;
use crate::templates::{external_href, Templates};

/// Local state of a mounted History page. The page is only rendered once
/// the initial fetch has resolved.
#[derive(Debug, Default)]
pub struct HistoryView {
    items: Vec<HistoryRecord>,
}

impl HistoryView {
    pub fn items(&self) -> &[HistoryRecord] {
        &self.items
    }

    /// Fetch the full list and replace local state wholesale. Failures are
    /// only logged; the list is then empty.
    pub async fn load(&mut self, backend: &dyn VerifierBackend) {
        match backend.list_history().await {
            Ok(items) => {
                debug!(n = items.len(), "History loaded");
                self.items = items;
            }
            Err(e) => error!(error = %e, "Failed to load history"),
        }
    }

    /// Apply the outcome of `DELETE /history/{id}`. Any HTTP response counts
    /// as done; a transport failure leaves the list alone.
    pub fn apply_delete(&mut self, id: i64, outcome: Result<u16>) -> bool {
        match outcome {
            Ok(status) => {
                if !(200..300).contains(&status) {
                    debug!(id, status, "Delete answered with non-success status");
                }
                let before = self.items.len();
                self.items.retain(|item| item.id != id);
                before != self.items.len()
            }
            Err(e) => {
                error!(id, error = %e, "Failed to delete history item");
                false
            }
        }
    }

    /// Apply the outcome of `DELETE /history`.
    pub fn apply_clear(&mut self, outcome: Result<u16>) {
        match outcome {
            Ok(status) => {
                info!(status, removed = self.items.len(), "History cleared");
                self.items.clear();
            }
            Err(e) => error!(error = %e, "Failed to clear history"),
        }
    }
}

#[derive(Serialize)]
struct HistoryRow<'a> {
    id: i64,
    claim: &'a str,
    publisher: &'a str,
    title: &'a str,
    rating: &'a str,
    summary: &'a str,
    href: Option<String>,
    created: Option<String>,
}

#[derive(Serialize)]
struct HistoryContext<'a> {
    active: &'static str,
    session: Uuid,
    items: Vec<HistoryRow<'a>>,
}

fn render_history(templates: &Templates, session: Uuid, view: &HistoryView) -> WebResult<Html<String>> {
    let items = view
        .items
        .iter()
        .map(|r| HistoryRow {
            id: r.id,
            claim: &r.claim,
            publisher: &r.publisher,
            title: &r.title,
            rating: &r.rating,
            summary: &r.summary,
            href: external_href(&r.url),
            created: r.created_at_utc().map(|t| t.format("%Y-%m-%d %H:%M UTC").to_string()),
        })
        .collect();

    templates.render(
        "history.html",
        HistoryContext { active: "history", session, items },
    )
}

/// GET /history — mounts a fresh page and loads the list.
pub async fn history_page(State(state): State<SharedState>) -> WebResult<Html<String>> {
    let mut view = HistoryView::default();
    view.load(state.backend.as_ref()).await;

    let (session, page) = state.history.insert(view).await;
    let view = page.lock().await;
    render_history(&state.templates, session, &view)
}

/// GET /history/{session}
pub async fn history_session_page(
    State(state): State<SharedState>,
    Path(session): Path<Uuid>,
) -> WebResult<Html<String>> {
    let page = state.history.get(&session).await.ok_or(WebError::SessionNotFound(session))?;
    let view = page.lock().await;
    render_history(&state.templates, session, &view)
}

/// POST /history/{session}/items/{id}/delete
pub async fn delete_history_item(
    State(state): State<SharedState>,
    Path((session, id)): Path<(Uuid, i64)>,
) -> WebResult<Redirect> {
    let page = state.history.get(&session).await.ok_or(WebError::SessionNotFound(session))?;
    let outcome = state.backend.delete_history(id).await;
    page.lock().await.apply_delete(id, outcome);
    Ok(Redirect::to(&format!("/history/{session}")))
}

/// POST /history/{session}/clear
pub async fn clear_history(
    State(state): State<SharedState>,
    Path(session): Path<Uuid>,
) -> WebResult<Redirect> {
    let page = state.history.get(&session).await.ok_or(WebError::SessionNotFound(session))?;
    let outcome = state.backend.clear_history().await;
    page.lock().await.apply_clear(outcome);
    Ok(Redirect::to(&format!("/history/{session}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use claimcheck_common::VerifierError;

    fn record(id: i64) -> HistoryRecord {
        HistoryRecord {
            id,
            claim: format!("claim {id}"),
            publisher: "p".into(),
            title: "t".into(),
            url: "https://example.org".into(),
            rating: "False".into(),
            summary: String::new(),
            created_at: 1_700_000_000.0,
        }
    }

    fn loaded(ids: &[i64]) -> HistoryView {
        HistoryView { items: ids.iter().copied().map(record).collect() }
    }

    fn ids(view: &HistoryView) -> Vec<i64> {
        view.items().iter().map(|r| r.id).collect()
    }

    #[test]
    fn test_delete_removes_only_matching_id() {
        let mut view = loaded(&[3, 2, 1]);
        assert!(view.apply_delete(2, Ok(200)));
        assert_eq!(ids(&view), vec![3, 1]);
    }

    #[test]
    fn test_delete_error_status_still_removes() {
        let mut view = loaded(&[3, 2, 1]);
        assert!(view.apply_delete(1, Ok(404)));
        assert_eq!(ids(&view), vec![3, 2]);
    }

    #[test]
    fn test_delete_transport_failure_keeps_list() {
        let mut view = loaded(&[3, 2, 1]);
        let err = VerifierError::Config("offline".into());
        assert!(!view.apply_delete(2, Err(err)));
        assert_eq!(ids(&view), vec![3, 2, 1]);
    }

    #[test]
    fn test_delete_unknown_id_is_noop() {
        let mut view = loaded(&[1]);
        assert!(!view.apply_delete(9, Ok(200)));
        assert_eq!(ids(&view), vec![1]);
    }

    #[test]
    fn test_clear() {
        let mut view = loaded(&[1, 2]);
        view.apply_clear(Ok(200));
        assert!(view.items().is_empty());
    }
}
