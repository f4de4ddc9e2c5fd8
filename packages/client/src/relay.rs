//! Input relay: forwards each input line to the server as a text frame.

use futures_util::{Sink, SinkExt};
use tokio_tungstenite::tungstenite::{self, Message};

use crate::{error::ClientError, input::LineReceiver};

/// Send every line from `lines` over `sink`, one text frame per line.
///
/// Never returns `Ok`: the loop ends with `InputClosed` at end-of-stream,
/// `Input` when reading failed, or `ConnectionError` when a send failed.
pub async fn relay_input<S>(lines: &mut LineReceiver, sink: &mut S) -> Result<(), ClientError>
where
    S: Sink<Message, Error = tungstenite::Error> + Unpin,
{
    loop {
        let line = match lines.recv().await {
            Some(Ok(line)) => line,
            Some(Err(e)) => return Err(ClientError::Input(e)),
            None => {
                tracing::debug!("Input reached end-of-stream");
                return Err(ClientError::InputClosed);
            }
        };

        if let Err(e) = sink.send(Message::Text(line.into())).await {
            tracing::debug!("Failed to send line: {}", e);
            return Err(ClientError::ConnectionError(e));
        }
    }
}
