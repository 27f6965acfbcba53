use thiserror::Error;

/// Shown when a failure carries no message worth showing to the user.
pub const GENERIC_ERROR_MESSAGE: &str = "Unexpected error occurred";

#[derive(Debug, Error)]
pub enum VerifierError {
    /// The backend answered with a non-success status.
    #[error("Backend returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl VerifierError {
    /// Text to surface on the page. Backend error bodies are shown verbatim,
    /// everything else collapses to a generic message.
    pub fn user_message(&self) -> String {
        match self {
            VerifierError::Status { body, .. } if !body.trim().is_empty() => body.clone(),
            _ => GENERIC_ERROR_MESSAGE.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, VerifierError>;
