//! claimcheck-client — REST client for the verification backend.
//!
//! Endpoints consumed:
//!   POST   /verify        claim text  -> claim + candidate sources
//!   POST   /analyze       claim + sources -> ranked summaries
//!   POST   /history       save one summary
//!   GET    /history       list saved summaries
//!   DELETE /history/{id}  delete one saved summary
//!   DELETE /history       delete all saved summaries
//!   GET    /health        liveness probe

pub mod api;

use async_trait::async_trait;
use claimcheck_common::{
    Claim, HistoryRecord, NewHistoryRecord, Result, SavedRecord, VerificationResult,
    VerifyResponse,
};

pub use api::ApiClient;

/// Common interface to the verification backend.
///
/// Pages depend on this trait rather than on [`ApiClient`] so they can be
/// driven by an in-memory backend in tests.
#[async_trait]
pub trait VerifierBackend: Send + Sync {
    /// Look up candidate fact-check sources for a claim.
    async fn verify(&self, claim: &Claim) -> Result<VerifyResponse>;

    /// Summarise the sources returned by [`VerifierBackend::verify`].
    async fn analyze(&self, verified: &VerifyResponse) -> Result<VerificationResult>;

    async fn save_history(&self, record: &NewHistoryRecord) -> Result<SavedRecord>;

    async fn list_history(&self) -> Result<Vec<HistoryRecord>>;

    /// Delete one record. Resolves with the response status whatever it is;
    /// only transport failures are errors.
    async fn delete_history(&self, id: i64) -> Result<u16>;

    /// Delete every record. Same status semantics as [`VerifierBackend::delete_history`].
    async fn clear_history(&self) -> Result<u16>;

    async fn health(&self) -> Result<()>;
}
