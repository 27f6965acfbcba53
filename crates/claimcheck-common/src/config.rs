//! Configuration loading for ClaimCheck.
//! Reads claimcheck.toml from the current directory or the path in CLAIMCHECK_CONFIG,
//! then applies CLAIMCHECK_API_URL / CLAIMCHECK_BIND overrides (a `.env` file is honoured).

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

use crate::error::{Result, VerifierError};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub backend: BackendConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
    /// Maximum number of live page sessions before the oldest is evicted.
    #[serde(default = "default_session_capacity")]
    pub session_capacity: usize,
}

fn default_bind() -> String { "127.0.0.1:3000".to_string() }
fn default_session_capacity() -> usize { 512 }

impl Default for ServerConfig {
    fn default() -> Self {
        Self { bind: default_bind(), session_capacity: default_session_capacity() }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Base URL of the verification backend, e.g. `http://localhost:8000`.
    #[serde(default = "default_api_url")]
    pub api_url: String,
}

fn default_api_url() -> String { "http://localhost:8000".to_string() }

impl Default for BackendConfig {
    fn default() -> Self {
        Self { api_url: default_api_url() }
    }
}

impl Config {
    /// Load configuration from claimcheck.toml plus environment overrides.
    /// A missing file is not an error; defaults are used instead.
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();

        let path = std::env::var("CLAIMCHECK_CONFIG")
            .unwrap_or_else(|_| "claimcheck.toml".to_string());

        let mut config = if Path::new(&path).exists() {
            let content = std::fs::read_to_string(&path)
                .map_err(|e| VerifierError::Config(format!("cannot read {path}: {e}")))?;
            debug!(path = %path, "Loaded config file");
            Self::from_toml(&content)?
        } else {
            info!(path = %path, "Config file not found, using defaults");
            Self::default()
        };

        config.apply_overrides(
            std::env::var("CLAIMCHECK_API_URL").ok(),
            std::env::var("CLAIMCHECK_BIND").ok(),
        );
        config.validate()?;
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| VerifierError::Config(e.to_string()))
    }

    pub fn apply_overrides(&mut self, api_url: Option<String>, bind: Option<String>) {
        if let Some(url) = api_url.filter(|u| !u.trim().is_empty()) {
            self.backend.api_url = url;
        }
        if let Some(bind) = bind.filter(|b| !b.trim().is_empty()) {
            self.server.bind = bind;
        }
    }

    /// Checks the backend URL and normalises it (no trailing slash).
    pub fn validate(&mut self) -> Result<()> {
        let trimmed = self.backend.api_url.trim().trim_end_matches('/').to_string();
        let parsed = url::Url::parse(&trimmed)
            .map_err(|e| VerifierError::Config(format!("invalid backend.api_url {trimmed:?}: {e}")))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(VerifierError::Config(format!(
                "backend.api_url must be http or https, got {}",
                parsed.scheme()
            )));
        }
        if self.server.session_capacity == 0 {
            return Err(VerifierError::Config("server.session_capacity must be at least 1".into()));
        }
        self.backend.api_url = trimmed;
        Ok(())
    }
}
