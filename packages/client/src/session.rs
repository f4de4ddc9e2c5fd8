//! WebSocket client session: races the input relay against the inbound printer.

use std::{fmt, time::Duration};

use futures_util::{Sink, SinkExt, Stream, StreamExt};
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tokio_tungstenite::tungstenite::{self, Message};

use crate::{error::ClientError, input::LineReceiver, printer::print_inbound, relay::relay_input};

/// How long the closing handshake may take before the connection is dropped.
const CLOSE_TIMEOUT: Duration = Duration::from_secs(1);

/// The two concurrent halves of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activity {
    InputRelay,
    InboundPrinter,
}

impl fmt::Display for Activity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Activity::InputRelay => write!(f, "input relay"),
            Activity::InboundPrinter => write!(f, "inbound printer"),
        }
    }
}

/// Lifecycle of a single client run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SessionState {
    Connecting,
    Connected,
    Draining,
    Disconnected,
}

/// How a session ended.
#[derive(Debug)]
pub struct SessionReport {
    /// The activity that won the race
    pub finished_first: Activity,
    /// What that activity returned
    pub outcome: Result<(), ClientError>,
}

impl SessionReport {
    /// The error worth showing to the user, if any.
    pub fn failure(&self) -> Option<&ClientError> {
        self.outcome.as_ref().err().filter(|e| e.is_failure())
    }
}

/// Run one session over an established connection.
///
/// Lines from `lines` are sent as text frames while received payloads are
/// written to `stdout`. As soon as either side finishes, the other one is
/// dropped, a failure (if any) is written to `stderr`, `Disconnected` is
/// printed, and the connection is closed.
pub async fn run_session<S, O, E>(
    connection: S,
    mut lines: LineReceiver,
    stdout: &mut O,
    stderr: &mut E,
) -> SessionReport
where
    S: Stream<Item = Result<Message, tungstenite::Error>>
        + Sink<Message, Error = tungstenite::Error>
        + Unpin,
    O: AsyncWrite + Unpin,
    E: AsyncWrite + Unpin,
{
    let (mut sink, mut source) = connection.split();
    log_state(SessionState::Connected);

    // Whichever future loses the race is dropped here, abandoning its pending
    // read or send.
    let (finished_first, outcome) = tokio::select! {
        outcome = relay_input(&mut lines, &mut sink) => (Activity::InputRelay, outcome),
        outcome = print_inbound(&mut source, stdout) => (Activity::InboundPrinter, outcome),
    };
    log_state(SessionState::Draining);
    tracing::debug!("{} finished first", finished_first);

    // Lets the reader thread stop at its next line.
    drop(lines);

    let report = SessionReport {
        finished_first,
        outcome,
    };

    if let Some(e) = report.failure()
        && let Err(write_err) = write_line(stderr, &e.to_string()).await
    {
        tracing::warn!("Failed to report error '{}': {}", e, write_err);
    }

    if let Err(e) = write_line(stdout, "Disconnected").await {
        tracing::warn!("Failed to print disconnect notice: {}", e);
    }

    close_connection(&mut sink).await;
    log_state(SessionState::Disconnected);

    report
}

async fn close_connection<S>(sink: &mut S)
where
    S: Sink<Message, Error = tungstenite::Error> + Unpin,
{
    match tokio::time::timeout(CLOSE_TIMEOUT, sink.close()).await {
        Ok(Ok(())) => tracing::debug!("Connection closed"),
        Ok(Err(e)) => tracing::debug!("Error while closing connection: {}", e),
        Err(_) => tracing::debug!("Closing handshake timed out after {:?}", CLOSE_TIMEOUT),
    }
}

async fn write_line<W>(out: &mut W, line: &str) -> std::io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    out.write_all(line.as_bytes()).await?;
    out.write_all(b"\n").await?;
    out.flush().await
}

pub(crate) fn log_state(state: SessionState) {
    tracing::debug!(?state, "Session state changed");
}
