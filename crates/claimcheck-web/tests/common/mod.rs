//! Shared helpers for router integration tests: an in-memory backend and
//! request/response shortcuts.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use claimcheck_client::VerifierBackend;
use claimcheck_common::{
    Claim, HistoryRecord, NewHistoryRecord, Result, SavedRecord, SummaryItem,
    VerificationResult, VerifierError, VerifyResponse,
};
use claimcheck_web::router::build_router;
use claimcheck_web::state::AppState;

/// Backend double that records every call it receives.
#[derive(Default)]
pub struct FakeBackend {
    pub calls: Mutex<Vec<String>>,
    pub summaries: Vec<SummaryItem>,
    /// When set, `/verify` answers with this status and body.
    pub verify_error: Option<(u16, String)>,
    /// When set, `/analyze` answers with this status and body.
    pub analyze_error: Option<(u16, String)>,
    pub fail_save: bool,
    pub fail_list: bool,
    pub history: Mutex<Vec<HistoryRecord>>,
}

impl FakeBackend {
    pub fn with_summaries(n: usize) -> Self {
        Self { summaries: summaries(n), ..Default::default() }
    }

    pub fn with_history(ids: &[i64]) -> Self {
        Self {
            history: Mutex::new(ids.iter().copied().map(history_record).collect()),
            ..Default::default()
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: impl Into<String>) {
        self.calls.lock().unwrap().push(call.into());
    }
}

#[async_trait]
impl VerifierBackend for FakeBackend {
    async fn verify(&self, claim: &Claim) -> Result<VerifyResponse> {
        self.record("verify");
        if let Some((status, body)) = &self.verify_error {
            return Err(VerifierError::Status { status: *status, body: body.clone() });
        }
        Ok(VerifyResponse { claim: claim.to_string(), sources: serde_json::json!([]) })
    }

    async fn analyze(&self, verified: &VerifyResponse) -> Result<VerificationResult> {
        self.record("analyze");
        if let Some((status, body)) = &self.analyze_error {
            return Err(VerifierError::Status { status: *status, body: body.clone() });
        }
        Ok(VerificationResult { claim: verified.claim.clone(), summaries: self.summaries.clone() })
    }

    async fn save_history(&self, record: &NewHistoryRecord) -> Result<SavedRecord> {
        self.record(format!("save:{}", record.publisher));
        if self.fail_save {
            return Err(VerifierError::Status { status: 500, body: "database is locked".into() });
        }
        Ok(SavedRecord { status: Some("saved".into()), id: Some(1) })
    }

    async fn list_history(&self) -> Result<Vec<HistoryRecord>> {
        self.record("list");
        if self.fail_list {
            return Err(VerifierError::Status { status: 500, body: "unable to open database".into() });
        }
        Ok(self.history.lock().unwrap().clone())
    }

    async fn delete_history(&self, id: i64) -> Result<u16> {
        self.record(format!("delete:{id}"));
        let mut history = self.history.lock().unwrap();
        let before = history.len();
        history.retain(|r| r.id != id);
        Ok(if history.len() < before { 200 } else { 404 })
    }

    async fn clear_history(&self) -> Result<u16> {
        self.record("clear");
        self.history.lock().unwrap().clear();
        Ok(200)
    }

    async fn health(&self) -> Result<()> {
        Ok(())
    }
}

pub fn summaries(n: usize) -> Vec<SummaryItem> {
    (0..n)
        .map(|i| SummaryItem {
            publisher: format!("Publisher{i}"),
            title: format!("Fact check number {i}"),
            url: format!("https://factcheck.example.org/{i}"),
            rating: "Mostly False".into(),
            summary: Some(format!("AI summary text {i}")),
        })
        .collect()
}

pub fn history_record(id: i64) -> HistoryRecord {
    HistoryRecord {
        id,
        claim: format!("Saved claim {id}"),
        publisher: format!("HistoryPublisher{id}"),
        title: format!("History title {id}"),
        url: format!("https://factcheck.example.org/h{id}"),
        rating: "False".into(),
        summary: format!("History summary {id}"),
        created_at: 1_700_000_000.0 + id as f64,
    }
}

pub fn build_test_app(backend: Arc<FakeBackend>) -> Router {
    let state = AppState::new(backend, 16).expect("templates compile");
    build_router(state)
}

pub async fn get(app: &Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    app.clone().oneshot(request).await.unwrap()
}

pub async fn post_form(app: &Router, uri: &str, form: &str) -> Response<Body> {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(form.to_string()))
        .unwrap();
    app.clone().oneshot(request).await.unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Asserts a 303 and returns the Location header.
pub fn redirect_location(response: &Response<Body>) -> String {
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    response.headers()[header::LOCATION].to_str().unwrap().to_string()
}

/// Follow a redirect and return the page body.
pub async fn follow(app: &Router, response: Response<Body>) -> String {
    let location = redirect_location(&response);
    let path = location.split('#').next().unwrap().to_string();
    let page = get(app, &path).await;
    assert_eq!(page.status(), StatusCode::OK);
    body_text(page).await
}
