use eyre::{Context, Result};
use futures_util::{SinkExt, StreamExt};
use serde_json::Value;
use tokio_tungstenite::{
    connect_async,
    tungstenite::{error::ProtocolError, Error, Message},
};
use tracing::{debug, info};

use crate::event;

/// Dashboard WebSocket endpoint of the node at `host:port`.
pub fn ws_uri(host: &str, port: u16) -> String {
    format!("ws://{host}:{port}/ws")
}

/// How a listening session ended, when it ended for an expected reason.
/// Anything else surfaces as an error from [`listen`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The server finished the session, cleanly or by dropping the link.
    ServerClosed,
    /// The user hit Ctrl-C.
    Interrupted,
}

/// Connects to `uri` and prints every event frame until the server closes
/// the connection or the user interrupts.
pub async fn listen(uri: &str) -> Result<StopReason> {
    let (ws_stream, _) = connect_async(uri)
        .await
        .context("websocket handshake failed")?;
    info!("Connected. Listening for events...");

    let (mut write, mut read) = ws_stream.split();

    loop {
        tokio::select! {
            msg = read.next() => match msg {
                Some(Ok(Message::Text(raw))) => print_frame(&raw)?,
                Some(Ok(Message::Close(_))) | None => return Ok(StopReason::ServerClosed),
                Some(Ok(Message::Ping(_) | Message::Pong(_))) => {}
                Some(Ok(other)) => debug!("ignoring non-text frame: {other:?}"),
                Some(Err(err)) if peer_went_away(&err) => return Ok(StopReason::ServerClosed),
                Some(Err(err)) => return Err(err).context("failed to receive frame"),
            },
            _ = tokio::signal::ctrl_c() => {
                info!("Interrupt received, closing connection");
                write.close().await.ok();
                return Ok(StopReason::Interrupted);
            }
        }
    }
}

// An abrupt reset counts as the server going away, same as a clean close.
fn peer_went_away(err: &Error) -> bool {
    matches!(
        err,
        Error::ConnectionClosed
            | Error::AlreadyClosed
            | Error::Protocol(ProtocolError::ResetWithoutClosingHandshake)
    )
}

fn print_frame(raw: &str) -> Result<()> {
    let value: Value = serde_json::from_str(raw).context("frame is not valid JSON")?;
    println!("\n{}", event::render(&value));
    Ok(())
}
