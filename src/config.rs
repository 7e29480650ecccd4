// src/config.rs
//! Client construction options and their validation.
//!
//! Options are plain data with defaults; [`crate::Client::new`] resolves
//! them once into an immutable client. A base URL without a scheme the
//! transport can speak is rejected here, at construction, rather than on
//! the first call.

use crate::error::Error;
use crate::logging::{LogLevel, Logger};
use std::time::Duration;
use url::Url;

/// Default production API host; the client appends `/v1/`.
pub const DEFAULT_BASE_URL: &str = "https://api.notion.com";

/// Notion API version sent with every request unless overridden.
pub const DEFAULT_NOTION_VERSION: &str = "2021-05-13";

/// How long a single request may take before failing with a timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(60_000);

/// Options accepted by [`crate::Client::new`]. Every field has a default;
/// set only what differs.
#[derive(Clone)]
pub struct ClientOptions {
    /// Bearer token used for every request unless overridden per call.
    /// `None` sends no `Authorization` header at all; unauthenticated
    /// requests are permitted to fail at the server.
    pub auth: Option<String>,
    /// API host, scheme included. The client appends `/v1/` itself.
    pub base_url: String,
    /// Per-request timeout enforced by the transport.
    pub timeout: Duration,
    /// Value of the `Notion-Version` header.
    pub notion_version: String,
    /// Minimum severity handed to the logger.
    pub log_level: LogLevel,
    /// Log sink; `None` forwards to the `log` facade.
    pub logger: Option<Logger>,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            auth: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            notion_version: DEFAULT_NOTION_VERSION.to_string(),
            log_level: LogLevel::Warn,
            logger: None,
        }
    }
}

impl ClientOptions {
    /// Validates the base URL and returns the request prefix
    /// (`<base_url>/v1/`).
    pub(crate) fn prefix_url(&self) -> Result<String, Error> {
        let parsed =
            Url::parse(&self.base_url).map_err(|_| Error::InvalidBaseUrl(self.base_url.clone()))?;
        match parsed.scheme() {
            "http" | "https" => Ok(format!("{}/v1/", self.base_url.trim_end_matches('/'))),
            _ => Err(Error::InvalidBaseUrl(self.base_url.clone())),
        }
    }
}
