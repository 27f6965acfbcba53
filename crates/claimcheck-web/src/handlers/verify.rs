//! Home page — claim submission, verify → analyze, result display.

use axum::{
    extract::{Path, State},
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use serde::{Deserialize, Serialize};
use tracing::{error, info, instrument};
use uuid::Uuid;

use claimcheck_client::VerifierBackend;
use claimcheck_common::{Claim, Result, VerificationResult};

use crate::error::{WebError, WebResult};
use crate::handlers::result_card::{CardView, ResultSession};
use crate::state::SharedState;
use crate::templates::Templates;

#[derive(Debug, Clone, PartialEq)]
pub enum VerifyState {
    Idle,
    Loading,
    Failed(String),
    Ready(VerificationResult),
}

impl VerifyState {
    fn status(&self) -> &'static str {
        match self {
            VerifyState::Idle => "idle",
            VerifyState::Loading => "loading",
            VerifyState::Failed(_) => "error",
            VerifyState::Ready(_) => "ready",
        }
    }
}

/// The submission workflow of the Home page.
#[derive(Debug)]
pub struct VerifyPage {
    pub query: String,
    pub state: VerifyState,
}

impl Default for VerifyPage {
    fn default() -> Self {
        Self { query: String::new(), state: VerifyState::Idle }
    }
}

impl VerifyPage {
    /// Accept the typed text. Blank text leaves the page untouched and
    /// returns `None`; otherwise the page enters `Loading`.
    pub fn begin(&mut self, query: String) -> Option<Claim> {
        self.query = query;
        let claim = Claim::parse(self.query.clone())?;
        self.state = VerifyState::Loading;
        Some(claim)
    }

    pub fn complete(&mut self, outcome: Result<VerificationResult>) {
        self.state = match outcome {
            Ok(result) => VerifyState::Ready(result),
            Err(e) => {
                error!(error = %e, "Verification failed");
                VerifyState::Failed(e.user_message())
            }
        };
    }

    pub async fn submit(&mut self, backend: &dyn VerifierBackend, query: String) {
        if let Some(claim) = self.begin(query) {
            let outcome = verify_and_analyze(backend, &claim).await;
            self.complete(outcome);
        }
    }
}

/// `/verify` then `/analyze`. A failed verify never reaches analyze.
#[instrument(skip(backend, claim))]
pub async fn verify_and_analyze(
    backend: &dyn VerifierBackend,
    claim: &Claim,
) -> Result<VerificationResult> {
    let verified = backend.verify(claim).await?;
    let result = backend.analyze(&verified).await?;
    info!(n = result.summaries.len(), "Claim analyzed");
    Ok(result)
}

#[derive(Deserialize)]
pub struct VerifyForm {
    #[serde(default)]
    pub query: String,
}

#[derive(Serialize)]
struct HomeContext<'a> {
    active: &'static str,
    query: &'a str,
    status: &'static str,
    error: Option<&'a str>,
    card: Option<CardView>,
    alert: Option<String>,
}

fn render_home(templates: &Templates, ctx: HomeContext<'_>) -> WebResult<Html<String>> {
    templates.render("home.html", ctx)
}

impl<'a> HomeContext<'a> {
    fn from_page(query: &'a str, state: &'a VerifyState) -> Self {
        let error = match state {
            VerifyState::Failed(message) => Some(message.as_str()),
            _ => None,
        };
        Self { active: "verify", query, status: state.status(), error, card: None, alert: None }
    }
}

/// GET /
pub async fn home_page(State(state): State<SharedState>) -> WebResult<Html<String>> {
    let page = VerifyPage::default();
    render_home(&state.templates, HomeContext::from_page(&page.query, &page.state))
}

/// POST /
pub async fn home_submit(
    State(state): State<SharedState>,
    Form(form): Form<VerifyForm>,
) -> WebResult<Response> {
    let mut page = VerifyPage::default();
    page.submit(state.backend.as_ref(), form.query).await;

    match std::mem::replace(&mut page.state, VerifyState::Idle) {
        VerifyState::Ready(result) => {
            let (session, _) = state.results.insert(ResultSession::new(page.query, result)).await;
            Ok(Redirect::to(&format!("/results/{session}")).into_response())
        }
        other => {
            Ok(render_home(&state.templates, HomeContext::from_page(&page.query, &other))?.into_response())
        }
    }
}

/// GET /results/{session}
pub async fn results_page(
    State(state): State<SharedState>,
    Path(session): Path<Uuid>,
) -> WebResult<Html<String>> {
    let page = state.results.get(&session).await.ok_or(WebError::SessionNotFound(session))?;
    let mut page = page.lock().await;
    let alert = page.alert.take();
    let card = page.card.view(session);
    let ctx = HomeContext {
        active: "verify",
        query: &page.query,
        status: "ready",
        error: None,
        card: Some(card),
        alert,
    };
    render_home(&state.templates, ctx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use claimcheck_common::VerifierError;

    #[test]
    fn test_blank_query_stays_idle() {
        let mut page = VerifyPage::default();
        assert!(page.begin("   ".into()).is_none());
        assert_eq!(page.state, VerifyState::Idle);
        assert_eq!(page.query, "   ");
    }

    #[test]
    fn test_begin_enters_loading() {
        let mut page = VerifyPage::default();
        let claim = page.begin("Vaccines cause autism".into()).unwrap();
        assert_eq!(claim.as_str(), "Vaccines cause autism");
        assert_eq!(page.state, VerifyState::Loading);
    }

    #[test]
    fn test_resubmit_clears_previous_error() {
        let mut page = VerifyPage::default();
        page.begin("a".into());
        page.complete(Err(VerifierError::Status { status: 500, body: "boom".into() }));
        assert_eq!(page.state, VerifyState::Failed("boom".into()));

        page.begin("b".into());
        assert_eq!(page.state, VerifyState::Loading);
    }

    #[test]
    fn test_complete_success() {
        let mut page = VerifyPage::default();
        page.begin("x".into());
        let result = VerificationResult { claim: "x".into(), summaries: vec![] };
        page.complete(Ok(result.clone()));
        assert_eq!(page.state, VerifyState::Ready(result));
    }
}
