//! Error types for the wordgames client.

use std::{io, time::Duration};

use thiserror::Error;
use tokio_tungstenite::tungstenite;

/// Client-specific errors
#[derive(Debug, Error)]
pub enum ClientError {
    /// The configured endpoint cannot be used
    #[error("Invalid endpoint '{url}': {reason}")]
    InvalidEndpoint { url: String, reason: String },

    /// Connection error (handshake, send or receive)
    #[error("Connection error: {0}")]
    ConnectionError(#[from] tungstenite::Error),

    /// The handshake did not complete in time
    #[error("Connection timed out after {0:?}")]
    ConnectTimeout(Duration),

    /// Standard input reached end-of-stream
    #[error("Input closed")]
    InputClosed,

    /// Standard input could not be read
    #[error("Failed to read input: {0}")]
    Input(#[source] io::Error),

    /// Standard output could not be written
    #[error("Failed to write output: {0}")]
    Output(#[source] io::Error),
}

impl ClientError {
    /// Whether this error should be reported to the user.
    ///
    /// `InputClosed` marks the ordinary end of the input relay and is not.
    pub fn is_failure(&self) -> bool {
        !matches!(self, ClientError::InputClosed)
    }
}
