//! Line reader feeding the input relay.
//!
//! Reading a line blocks until the user presses Enter, so it happens on a
//! dedicated OS thread. Lines are handed to the async side over an unbounded
//! channel; the thread exits at the next line once the receiver is gone.

use std::io::{self, BufRead};
use std::thread;

use tokio::sync::mpsc;

/// Receiving end of a line reader.
pub type LineReceiver = mpsc::UnboundedReceiver<io::Result<String>>;

/// Start reading lines from standard input.
pub fn spawn_stdin_reader() -> io::Result<LineReceiver> {
    spawn_line_reader(io::BufReader::new(io::stdin()))
}

/// Start reading lines from `reader` on a background thread.
///
/// The channel closes on end-of-stream. A read error is forwarded once and
/// ends the thread.
pub fn spawn_line_reader<R>(reader: R) -> io::Result<LineReceiver>
where
    R: BufRead + Send + 'static,
{
    let (line_tx, line_rx) = mpsc::unbounded_channel();

    thread::Builder::new()
        .name("line-reader".to_string())
        .spawn(move || {
            for line in reader.lines() {
                let failed = line.is_err();
                if line_tx.send(line).is_err() {
                    // Receiver dropped, the session is over
                    tracing::debug!("Line receiver closed, stopping reader");
                    break;
                }
                if failed {
                    break;
                }
            }
            tracing::debug!("Line reader finished");
        })?;

    Ok(line_rx)
}
