//! claimcheck-common — Shared types, errors, and configuration used across all ClaimCheck crates.

pub mod config;
pub mod error;
pub mod models;

// Re-export commonly used types
pub use config::{BackendConfig, Config, ServerConfig};
pub use error::{Result, VerifierError};
pub use models::{
    Claim, HistoryRecord, NewHistoryRecord, SavedRecord, SummaryItem, VerificationResult,
    VerifyResponse,
};
