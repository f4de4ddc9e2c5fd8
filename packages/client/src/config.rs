//! Client configuration.

use std::time::Duration;

use tokio_tungstenite::tungstenite::http::Uri;

use crate::error::ClientError;

/// Endpoint used when none is configured.
pub const DEFAULT_URL: &str = "ws://localhost:3000/ws/anagram";

/// Handshake timeout used when none is configured.
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Validated settings for one client run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    url: String,
    connect_timeout: Duration,
}

impl ClientConfig {
    /// Create a configuration for `url`, rejecting anything that is not a
    /// `ws://` URL with a host.
    pub fn new(url: impl Into<String>) -> Result<Self, ClientError> {
        let url = url.into();
        validate_url(&url)?;

        Ok(Self {
            url,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
        })
    }

    pub fn with_connect_timeout(mut self, connect_timeout: Duration) -> Self {
        self.connect_timeout = connect_timeout;
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn connect_timeout(&self) -> Duration {
        self.connect_timeout
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
        }
    }
}

fn validate_url(url: &str) -> Result<(), ClientError> {
    let invalid = |reason: &str| ClientError::InvalidEndpoint {
        url: url.to_string(),
        reason: reason.to_string(),
    };

    let uri: Uri = url.parse().map_err(|_| invalid("not a valid URI"))?;

    match uri.scheme_str() {
        Some("ws") => {}
        Some(other) => return Err(invalid(&format!("unsupported scheme '{}'", other))),
        None => return Err(invalid("missing scheme")),
    }

    if uri.host().is_none_or(str::is_empty) {
        return Err(invalid("missing host"));
    }

    Ok(())
}
