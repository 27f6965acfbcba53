//! reqwest-backed implementation of [`VerifierBackend`].

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde_json::json;
use tracing::{debug, instrument, warn};

use claimcheck_common::{
    BackendConfig, Claim, HistoryRecord, NewHistoryRecord, Result, SavedRecord,
    VerificationResult, VerifierError, VerifyResponse,
};

use crate::VerifierBackend;

const USER_AGENT: &str = concat!("ClaimCheck/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// `base_url` is the backend root without a trailing slash.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &BackendConfig) -> Result<Self> {
        Self::new(config.api_url.clone())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Turns a non-success response into [`VerifierError::Status`] carrying the body text.
async fn ensure_success(resp: Response) -> Result<Response> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.text().await.unwrap_or_default();
    warn!(status = status.as_u16(), "Backend returned an error status");
    Err(VerifierError::Status { status: status.as_u16(), body })
}

async fn decode<T: DeserializeOwned>(resp: Response) -> Result<T> {
    let text = resp.text().await?;
    Ok(serde_json::from_str(&text)?)
}

#[async_trait]
impl VerifierBackend for ApiClient {
    #[instrument(skip(self, claim))]
    async fn verify(&self, claim: &Claim) -> Result<VerifyResponse> {
        let resp = self
            .client
            .post(self.url("/verify"))
            .json(&json!({ "query": claim.as_str() }))
            .send()
            .await?;
        let verified: VerifyResponse = decode(ensure_success(resp).await?).await?;
        debug!(claim = %verified.claim, "Verify returned");
        Ok(verified)
    }

    #[instrument(skip(self, verified))]
    async fn analyze(&self, verified: &VerifyResponse) -> Result<VerificationResult> {
        let resp = self
            .client
            .post(self.url("/analyze"))
            .json(&json!({ "claim": verified.claim, "sources": verified.sources }))
            .send()
            .await?;
        let result: VerificationResult = decode(ensure_success(resp).await?).await?;
        debug!(n = result.summaries.len(), "Analyze returned summaries");
        Ok(result)
    }

    #[instrument(skip(self, record), fields(url = %record.url))]
    async fn save_history(&self, record: &NewHistoryRecord) -> Result<SavedRecord> {
        let resp = self
            .client
            .post(self.url("/history"))
            .json(record)
            .send()
            .await?;
        let text = ensure_success(resp).await?.text().await?;
        // The acknowledgement shape is not guaranteed; success is what matters.
        Ok(serde_json::from_str(&text).unwrap_or_default())
    }

    #[instrument(skip(self))]
    async fn list_history(&self) -> Result<Vec<HistoryRecord>> {
        let resp = self.client.get(self.url("/history")).send().await?;
        let records: Vec<HistoryRecord> = decode(ensure_success(resp).await?).await?;
        debug!(n = records.len(), "Listed history");
        Ok(records)
    }

    #[instrument(skip(self))]
    async fn delete_history(&self, id: i64) -> Result<u16> {
        let resp = self
            .client
            .delete(self.url(&format!("/history/{id}")))
            .send()
            .await?;
        Ok(resp.status().as_u16())
    }

    #[instrument(skip(self))]
    async fn clear_history(&self) -> Result<u16> {
        let resp = self.client.delete(self.url("/history")).send().await?;
        Ok(resp.status().as_u16())
    }

    async fn health(&self) -> Result<()> {
        let resp = self.client.get(self.url("/health")).send().await?;
        ensure_success(resp).await?;
        Ok(())
    }
}
