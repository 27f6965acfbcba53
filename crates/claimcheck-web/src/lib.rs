//! claimcheck-web — Web front end for ClaimCheck.
//! Provides:
//!   - Claim verification page (verify → analyze, result cards)
//!   - Per-result "save to history" and summary toggles
//!   - History browser with delete / clear
//!   - Health probe

pub mod error;
pub mod handlers;
pub mod router;
pub mod session;
pub mod state;
pub mod templates;
