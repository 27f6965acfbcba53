//! ResultCard — one card per fact-check summary, with per-item
//! expand/collapse and "save to history" actions.

use axum::{
    extract::{Path, State},
    response::Redirect,
};
use serde::Serialize;
use tokio::sync::Mutex;
use tracing::{debug, error, info};
use uuid::Uuid;

use claimcheck_client::VerifierBackend;
use claimcheck_common::{NewHistoryRecord, VerificationResult};

use crate::error::{WebError, WebResult};
use crate::state::SharedState;
use crate::templates::external_href;

pub const SAVE_FAILED_ALERT: &str = "Failed to save to history.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SaveStatus {
    #[default]
    Unsaved,
    Saving,
    Saved,
}

#[derive(Debug, Clone, Copy, Default)]
struct ItemState {
    expanded: bool,
    save: SaveStatus,
}

/// Display state over one verification result. The result itself is never
/// modified; only the per-item flags change.
#[derive(Debug, Clone)]
pub struct ResultCard {
    result: VerificationResult,
    items: Vec<ItemState>,
}

impl ResultCard {
    pub fn new(result: VerificationResult) -> Self {
        let items = vec![ItemState::default(); result.summaries.len()];
        Self { result, items }
    }

    pub fn claim(&self) -> &str {
        &self.result.claim
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_expanded(&self, idx: usize) -> Option<bool> {
        self.items.get(idx).map(|s| s.expanded)
    }

    pub fn save_status(&self, idx: usize) -> Option<SaveStatus> {
        self.items.get(idx).map(|s| s.save)
    }

    /// Flip the summary panel of one item. Returns the new expanded flag.
    pub fn toggle(&mut self, idx: usize) -> Option<bool> {
        let item = self.items.get_mut(idx)?;
        item.expanded = !item.expanded;
        Some(item.expanded)
    }

    /// Move an unsaved item to `Saving` and hand back the payload to send.
    /// `None` when the item is already saving or saved (or does not exist).
    pub fn begin_save(&mut self, idx: usize) -> Option<NewHistoryRecord> {
        let item = self.items.get_mut(idx)?;
        if item.save != SaveStatus::Unsaved {
            return None;
        }
        item.save = SaveStatus::Saving;
        Some(NewHistoryRecord::from_item(&self.result.claim, &self.result.summaries[idx]))
    }

    /// `Saving -> Saved` on success, `Saving -> Unsaved` on failure.
    pub fn finish_save(&mut self, idx: usize, saved: bool) {
        if let Some(item) = self.items.get_mut(idx) {
            if item.save == SaveStatus::Saving {
                item.save = if saved { SaveStatus::Saved } else { SaveStatus::Unsaved };
            }
        }
    }

    pub fn view(&self, session: Uuid) -> CardView {
        let items = self
            .result
            .summaries
            .iter()
            .zip(&self.items)
            .enumerate()
            .map(|(idx, (item, state))| CardItemView {
                idx,
                publisher: item.publisher.clone(),
                title: item.title.clone(),
                rating: item.rating.clone(),
                href: external_href(&item.url),
                summary: item.summary_text().map(String::from),
                expanded: state.expanded,
                save: state.save,
            })
            .collect();

        CardView { session, claim: self.result.claim.clone(), items }
    }
}

#[derive(Debug, Serialize)]
pub struct CardView {
    pub session: Uuid,
    pub claim: String,
    pub items: Vec<CardItemView>,
}

#[derive(Debug, Serialize)]
pub struct CardItemView {
    pub idx: usize,
    pub publisher: String,
    pub title: String,
    pub rating: String,
    pub href: Option<String>,
    pub summary: Option<String>,
    pub expanded: bool,
    pub save: SaveStatus,
}

/// A mounted Home page holding a result.
#[derive(Debug)]
pub struct ResultSession {
    /// Text as typed into the claim box.
    pub query: String,
    pub card: ResultCard,
    /// Blocking alert to raise on the next render, then cleared.
    pub alert: Option<String>,
}

impl ResultSession {
    pub fn new(query: String, result: VerificationResult) -> Self {
        Self { query, card: ResultCard::new(result), alert: None }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved,
    Failed,
    /// Already saving or saved; no request was made.
    Skipped,
}

/// Save one item of a mounted page to history.
///
/// The page lock is released while the request is in flight, so a second
/// save on the same item observes `Saving` and is skipped.
pub async fn save_item(
    page: &Mutex<ResultSession>,
    idx: usize,
    backend: &dyn VerifierBackend,
) -> WebResult<SaveOutcome> {
    let payload = {
        let mut page = page.lock().await;
        if idx >= page.card.len() {
            return Err(WebError::ItemNotFound(idx));
        }
        page.card.begin_save(idx)
    };

    let Some(payload) = payload else {
        debug!(idx, "Save skipped, item already saving or saved");
        return Ok(SaveOutcome::Skipped);
    };

    let outcome = backend.save_history(&payload).await;

    let mut page = page.lock().await;
    match outcome {
        Ok(ack) => {
            info!(idx, id = ?ack.id, "Saved to history");
            page.card.finish_save(idx, true);
            Ok(SaveOutcome::Saved)
        }
        Err(e) => {
            error!(idx, error = %e, "Failed to save");
            page.card.finish_save(idx, false);
            page.alert = Some(SAVE_FAILED_ALERT.to_string());
            Ok(SaveOutcome::Failed)
        }
    }
}

fn item_anchor(session: Uuid, idx: usize) -> Redirect {
    Redirect::to(&format!("/results/{session}#item-{idx}"))
}

/// POST /results/{session}/items/{idx}/toggle
pub async fn toggle_result_item(
    State(state): State<SharedState>,
    Path((session, idx)): Path<(Uuid, usize)>,
) -> WebResult<Redirect> {
    let page = state.results.get(&session).await.ok_or(WebError::SessionNotFound(session))?;
    page.lock().await.card.toggle(idx).ok_or(WebError::ItemNotFound(idx))?;
    Ok(item_anchor(session, idx))
}

/// POST /results/{session}/items/{idx}/save
pub async fn save_result_item(
    State(state): State<SharedState>,
    Path((session, idx)): Path<(Uuid, usize)>,
) -> WebResult<Redirect> {
    let page = state.results.get(&session).await.ok_or(WebError::SessionNotFound(session))?;
    save_item(&page, idx, state.backend.as_ref()).await?;
    Ok(item_anchor(session, idx))
}
