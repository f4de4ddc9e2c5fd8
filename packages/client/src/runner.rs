//! Client execution logic.

use tokio_tungstenite::connect_async;

use crate::{
    config::ClientConfig,
    error::ClientError,
    input::spawn_stdin_reader,
    session::{SessionReport, SessionState, log_state, run_session},
};

/// Connect to the configured endpoint and run a single session on the console.
///
/// Errors during connection setup are returned; anything that goes wrong once
/// the session is running is reported on stderr and described by the
/// returned [`SessionReport`].
pub async fn run_client(config: &ClientConfig) -> Result<SessionReport, ClientError> {
    log_state(SessionState::Connecting);
    tracing::debug!("Connecting to {}", config.url());

    let (ws_stream, response) =
        tokio::time::timeout(config.connect_timeout(), connect_async(config.url()))
            .await
            .map_err(|_| ClientError::ConnectTimeout(config.connect_timeout()))??;

    tracing::debug!(
        "Connected to {} (HTTP {})",
        config.url(),
        response.status().as_u16()
    );

    let lines = spawn_stdin_reader().map_err(ClientError::Input)?;

    let mut stdout = tokio::io::stdout();
    let mut stderr = tokio::io::stderr();
    let report = run_session(ws_stream, lines, &mut stdout, &mut stderr).await;

    tracing::debug!("Session ended ({} finished first)", report.finished_first);

    Ok(report)
}
