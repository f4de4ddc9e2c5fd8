//! Inbound printer: writes each received payload to the console.

use futures_util::{Stream, StreamExt};
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tokio_tungstenite::tungstenite::{self, Message, protocol::CloseFrame};

use crate::error::ClientError;

/// What the printer makes of one received frame.
#[derive(Debug, PartialEq, Eq)]
pub enum InboundEvent<'a> {
    /// Text or binary payload to print
    Data(&'a [u8]),
    /// The peer started the closing handshake
    Close(Option<&'a CloseFrame>),
    /// Control or raw frames; the transport handles these itself
    Other,
}

impl<'a> From<&'a Message> for InboundEvent<'a> {
    fn from(message: &'a Message) -> Self {
        match message {
            Message::Text(text) => InboundEvent::Data(text.as_bytes()),
            Message::Binary(data) => InboundEvent::Data(data),
            Message::Close(frame) => InboundEvent::Close(frame.as_ref()),
            Message::Ping(_) | Message::Pong(_) | Message::Frame(_) => InboundEvent::Other,
        }
    }
}

/// Print every data frame from `source` to `out`, one payload per line.
///
/// Returns `Ok` once the peer closes the connection or the stream ends.
/// Transport faults surface as `ConnectionError`.
pub async fn print_inbound<S, W>(source: &mut S, out: &mut W) -> Result<(), ClientError>
where
    S: Stream<Item = Result<Message, tungstenite::Error>> + Unpin,
    W: AsyncWrite + Unpin,
{
    while let Some(received) = source.next().await {
        let message = match received {
            Ok(message) => message,
            Err(tungstenite::Error::ConnectionClosed | tungstenite::Error::AlreadyClosed) => {
                tracing::debug!("Connection already closed");
                return Ok(());
            }
            Err(e) => {
                tracing::debug!("WebSocket read error: {}", e);
                return Err(ClientError::ConnectionError(e));
            }
        };

        match InboundEvent::from(&message) {
            InboundEvent::Data(payload) => write_line(out, payload)
                .await
                .map_err(ClientError::Output)?,
            InboundEvent::Close(frame) => {
                tracing::debug!("Server closed the connection: {:?}", frame);
                return Ok(());
            }
            InboundEvent::Other => {}
        }
    }

    tracing::debug!("Inbound stream ended");
    Ok(())
}

async fn write_line<W>(out: &mut W, payload: &[u8]) -> std::io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    out.write_all(payload).await?;
    out.write_all(b"\n").await?;
    out.flush().await
}
