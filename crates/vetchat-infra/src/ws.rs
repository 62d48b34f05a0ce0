//! WebSocket transport for the screening chat protocol.
//!
//! One persistent connection, split into a send half and a receive half so
//! the input loop and the receiver loop can own them independently.
//! Envelopes travel as JSON text frames; protocol control frames never
//! reach the caller.

use futures_util::stream::{SplitSink, SplitStream};
use futures_util::{SinkExt, StreamExt};
use thiserror::Error;
use tokio::net::TcpStream;
use tokio_tungstenite::tungstenite::{Error as WsError, Message};
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream, connect_async};

use vetchat_types::error::ProtocolError;
use vetchat_types::protocol::{ClientEnvelope, ServerEnvelope};

type Socket = WebSocketStream<MaybeTlsStream<TcpStream>>;

/// Errors from the WebSocket transport.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("failed to connect to {url}: {source}")]
    Connect {
        url: String,
        #[source]
        source: WsError,
    },

    #[error("failed to encode request: {0}")]
    Encode(String),

    #[error("failed to send request: {0}")]
    Send(String),

    #[error("receive failed: {0}")]
    Receive(String),

    #[error(transparent)]
    Decode(#[from] ProtocolError),
}

/// Send half of the connection, owned by the input loop.
pub struct WsSender {
    sink: SplitSink<Socket, Message>,
}

/// Receive half of the connection, owned by the receiver loop.
pub struct WsReceiver {
    stream: SplitStream<Socket>,
}

/// Open the connection and split it into its two halves.
///
/// There is no retry: a failure here is fatal to the caller.
pub async fn connect(url: &str) -> Result<(WsSender, WsReceiver), TransportError> {
    let (socket, _response) = connect_async(url)
        .await
        .map_err(|source| TransportError::Connect {
            url: url.to_string(),
            source,
        })?;
    tracing::debug!(%url, "WebSocket connection established");

    let (sink, stream) = socket.split();
    Ok((WsSender { sink }, WsReceiver { stream }))
}

impl WsSender {
    /// Serialize one request and write it to the wire.
    pub async fn send(&mut self, envelope: &ClientEnvelope) -> Result<(), TransportError> {
        let json =
            serde_json::to_string(envelope).map_err(|err| TransportError::Encode(err.to_string()))?;
        self.sink
            .send(Message::Text(json.into()))
            .await
            .map_err(|err| TransportError::Send(err.to_string()))
    }

    /// Close the connection. Idempotent: closing an already-closed
    /// connection is not an error.
    pub async fn close(&mut self) -> Result<(), TransportError> {
        match self.sink.close().await {
            Ok(()) | Err(WsError::ConnectionClosed | WsError::AlreadyClosed) => Ok(()),
            Err(err) => Err(TransportError::Send(err.to_string())),
        }
    }
}

impl WsReceiver {
    /// Read the next inbound envelope, in strict arrival order.
    ///
    /// Returns `None` once the peer has closed the connection. Ping/pong
    /// and binary frames are skipped. A text frame that fails to decode is
    /// returned as an error; the caller decides whether to keep reading
    /// (this client stops).
    pub async fn next(&mut self) -> Option<Result<ServerEnvelope, TransportError>> {
        loop {
            match self.stream.next().await? {
                Ok(Message::Text(text)) => {
                    return Some(ServerEnvelope::parse(text.as_str()).map_err(TransportError::from));
                }
                Ok(Message::Close(_)) => {
                    tracing::debug!("close frame received from server");
                    return None;
                }
                Ok(other) => {
                    tracing::trace!(kind = ?other, "skipping non-text frame");
                }
                Err(err) => return Some(Err(TransportError::Receive(err.to_string()))),
            }
        }
    }
}
