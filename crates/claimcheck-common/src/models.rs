//! Wire types exchanged with the verification backend.
//! Field names follow the backend's JSON exactly.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Reads a string field that the backend may send as `null`.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

// ---------------------------------------------------------------------------
// Claim
// ---------------------------------------------------------------------------

/// A statement submitted for fact-checking.
///
/// Only constructible from text that is non-empty after trimming. The text
/// itself is kept as typed and forwarded untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Claim(String);

impl Claim {
    /// Returns `None` for empty or whitespace-only input.
    pub fn parse(text: impl Into<String>) -> Option<Self> {
        let text = text.into();
        if text.trim().is_empty() {
            None
        } else {
            Some(Self(text))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Claim {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

// ---------------------------------------------------------------------------
// Verify / analyze
// ---------------------------------------------------------------------------

/// Response of `POST /verify`. `sources` is opaque to this layer and is
/// handed to `/analyze` as-is.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VerifyResponse {
    pub claim: String,
    #[serde(default)]
    pub sources: serde_json::Value,
}

/// One fact-check verdict as produced by `/analyze`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct SummaryItem {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub publisher: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub url: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub rating: String,
    #[serde(default)]
    pub summary: Option<String>,
}

impl SummaryItem {
    /// The AI summary, if present and non-blank.
    pub fn summary_text(&self) -> Option<&str> {
        self.summary.as_deref().filter(|s| !s.trim().is_empty())
    }
}

/// Response of `POST /analyze`: the claim plus summaries in ranking order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct VerificationResult {
    pub claim: String,
    #[serde(default)]
    pub summaries: Vec<SummaryItem>,
}

// ---------------------------------------------------------------------------
// History
// ---------------------------------------------------------------------------

/// Body of `POST /history`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewHistoryRecord {
    pub claim: String,
    pub publisher: String,
    pub title: String,
    pub url: String,
    pub rating: String,
    pub summary: String,
}

impl NewHistoryRecord {
    /// Builds the save payload for one item of a result. A missing summary is sent as `""`.
    pub fn from_item(claim: &str, item: &SummaryItem) -> Self {
        Self {
            claim: claim.to_string(),
            publisher: item.publisher.clone(),
            title: item.title.clone(),
            url: item.url.clone(),
            rating: item.rating.clone(),
            summary: item.summary.clone().unwrap_or_default(),
        }
    }
}

/// Acknowledgement returned by `POST /history`. The backend's shape is loose.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct SavedRecord {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub id: Option<i64>,
}

/// A persisted summary as listed by `GET /history`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HistoryRecord {
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub claim: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub publisher: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub url: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub rating: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub summary: String,
    /// Seconds since the Unix epoch, fractional.
    #[serde(default)]
    pub created_at: f64,
}

impl HistoryRecord {
    pub fn created_at_utc(&self) -> Option<DateTime<Utc>> {
        if !self.created_at.is_finite() {
            return None;
        }
        let secs = self.created_at.trunc() as i64;
        let nanos = ((self.created_at - self.created_at.trunc()) * 1e9) as u32;
        DateTime::from_timestamp(secs, nanos)
    }
}
