use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:4000";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 15;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default = "default_backend_url")]
    pub backend_url: String,

    /// Upper bound for every collaborator request, in seconds.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
}

fn default_backend_url() -> String {
    DEFAULT_BACKEND_URL.to_string()
}

fn default_request_timeout_secs() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_SECS
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            backend_url: default_backend_url(),
            request_timeout_secs: default_request_timeout_secs(),
            log_file: None,
        }
    }
}

/// Values given on the command line; each one wins over the config file.
#[derive(Clone, Debug, Default)]
pub struct ConfigOverrides {
    pub backend_url: Option<String>,
    pub request_timeout_secs: Option<u64>,
    pub log_file: Option<PathBuf>,
}

impl ClientConfig {
    pub fn read(path: &Path) -> Result<Self> {
        let bytes =
            std::fs::read(path).with_context(|| format!("read config {}", path.display()))?;
        let cfg: ClientConfig = serde_json::from_slice(&bytes)
            .with_context(|| format!("parse config {}", path.display()))?;
        Ok(cfg)
    }

    pub fn load(path: Option<&Path>, overrides: ConfigOverrides) -> Result<Self> {
        let mut cfg = match path {
            Some(p) => Self::read(p)?,
            None => Self::default(),
        };

        if let Some(url) = overrides.backend_url {
            cfg.backend_url = url;
        }
        if let Some(secs) = overrides.request_timeout_secs {
            cfg.request_timeout_secs = secs;
        }
        if overrides.log_file.is_some() {
            cfg.log_file = overrides.log_file;
        }

        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&mut self) -> Result<()> {
        let trimmed = self.backend_url.trim().trim_end_matches('/').to_string();
        let url = reqwest::Url::parse(&trimmed)
            .with_context(|| format!("invalid backend url {:?}", self.backend_url))?;
        if url.scheme() != "http" && url.scheme() != "https" {
            anyhow::bail!("backend url must be http or https (got {})", url.scheme());
        }
        self.backend_url = trimmed;

        if self.request_timeout_secs == 0 {
            anyhow::bail!("request timeout must be at least 1 second");
        }
        Ok(())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn install_url(&self) -> String {
        format!("{}/auth/install", self.backend_url)
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
