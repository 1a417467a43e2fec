//! TCP transport for the client.
//!
//! Provides [`ConnectedClient`] which handles socket I/O for the outbound
//! command queue and the inbound notification stream. This is a thin layer
//! that just moves newline-delimited JSON; all input-layer logic stays in
//! the sans-IO [`Translator`](crate::Translator).

use sapper_proto::{WireMessage, decode_value};
use thiserror::Error;
use tokio::{
    io::{AsyncBufReadExt, AsyncWriteExt, BufReader},
    net::{
        TcpStream,
        tcp::{OwnedReadHalf, OwnedWriteHalf},
    },
    sync::mpsc,
};

use crate::channel::{CommandChannel, OUTBOUND_CAPACITY};

/// Transport errors.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Connection failed.
    #[error("connection failed: {0}")]
    Connection(String),

    /// Stream error.
    #[error("stream error: {0}")]
    Stream(String),
}

/// Handle to a connected client.
///
/// Owns the I/O task: outbound messages flow from the [`CommandChannel`]
/// through a writer loop, inbound lines are decoded and delivered on
/// `from_server`.
pub struct ConnectedClient {
    /// Fire-and-forget sender for outbound messages.
    pub channel: CommandChannel,
    /// Decoded notifications from the server.
    pub from_server: mpsc::Receiver<serde_json::Value>,
    /// Abort handle to stop the connection task.
    abort_handle: tokio::task::AbortHandle,
}

impl ConnectedClient {
    /// Stop the connection.
    pub fn stop(&self) {
        self.abort_handle.abort();
    }
}

/// Connect to a sapper game server over TCP.
pub async fn connect(server_addr: &str) -> Result<ConnectedClient, TransportError> {
    let stream = TcpStream::connect(server_addr)
        .await
        .map_err(|e| TransportError::Connection(format!("connect to {server_addr} failed: {e}")))?;

    let (read_half, write_half) = stream.into_split();
    let (to_server_tx, to_server_rx) = mpsc::channel::<WireMessage>(OUTBOUND_CAPACITY);
    let (from_server_tx, from_server_rx) = mpsc::channel::<serde_json::Value>(OUTBOUND_CAPACITY);

    let handle = tokio::spawn(run_connection(read_half, write_half, to_server_rx, from_server_tx));

    Ok(ConnectedClient {
        channel: CommandChannel::new(to_server_tx),
        from_server: from_server_rx,
        abort_handle: handle.abort_handle(),
    })
}

/// Run the connection, bridging between the queues and the socket.
async fn run_connection(
    read_half: OwnedReadHalf,
    mut write_half: OwnedWriteHalf,
    mut to_server: mpsc::Receiver<WireMessage>,
    from_server: mpsc::Sender<serde_json::Value>,
) {
    let recv_handle = tokio::spawn(read_lines(read_half, from_server));

    // Writer loop: drain the outbound queue until the client drops it.
    while let Some(message) = to_server.recv().await {
        match message.encode_line() {
            Ok(line) => {
                if let Err(e) = write_line(&mut write_half, &line).await {
                    tracing::warn!(error = %e, "send failed, dropping message");
                }
            },
            Err(e) => {
                tracing::warn!(error = %e, "unencodable message dropped");
            },
        }
    }

    recv_handle.abort();
}

/// Reader loop: decode inbound lines until the server closes the stream.
async fn read_lines(read_half: OwnedReadHalf, from_server: mpsc::Sender<serde_json::Value>) {
    let mut lines = BufReader::new(read_half).lines();

    loop {
        match lines.next_line().await {
            Ok(Some(line)) => match decode_value(&line) {
                Ok(value) => {
                    if from_server.send(value).await.is_err() {
                        break;
                    }
                },
                Err(e) => {
                    tracing::warn!(error = %e, "malformed server line dropped");
                },
            },
            Ok(None) => {
                tracing::info!("server closed the connection");
                break;
            },
            Err(e) => {
                tracing::warn!(error = %e, "read failed, closing receiver");
                break;
            },
        }
    }
}

async fn write_line(write_half: &mut OwnedWriteHalf, line: &str) -> Result<(), TransportError> {
    write_half
        .write_all(line.as_bytes())
        .await
        .map_err(|e| TransportError::Stream(format!("write failed: {e}")))?;
    write_half
        .write_all(b"\n")
        .await
        .map_err(|e| TransportError::Stream(format!("write failed: {e}")))?;
    write_half.flush().await.map_err(|e| TransportError::Stream(format!("flush failed: {e}")))
}

#[cfg(test)]
mod tests {
    use tokio::{io::AsyncReadExt, net::TcpListener};

    use super::*;

    #[tokio::test]
    async fn messages_arrive_as_json_lines() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let client = connect(&addr.to_string()).await.unwrap();
        let (mut socket, _) = listener.accept().await.unwrap();

        client.channel.send_raw(WireMessage::join_queue("arena1"));

        let mut buf = vec![0u8; 256];
        let n = socket.read(&mut buf).await.unwrap();
        let received = String::from_utf8_lossy(&buf[..n]).to_string();

        assert_eq!(received, "{\"cmd\":\"join_queue\",\"queue\":\"arena1\"}\n");

        client.stop();
    }

    #[tokio::test]
    async fn inbound_lines_are_decoded() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let mut client = connect(&addr.to_string()).await.unwrap();
        let (mut socket, _) = listener.accept().await.unwrap();

        socket.write_all(b"{\"cmd\":\"startup_status\",\"queue\":\"arena1\"}\n").await.unwrap();

        let value = client.from_server.recv().await.unwrap();
        assert_eq!(value["cmd"], "startup_status");

        client.stop();
    }

    #[tokio::test]
    async fn malformed_inbound_lines_are_skipped() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let mut client = connect(&addr.to_string()).await.unwrap();
        let (mut socket, _) = listener.accept().await.unwrap();

        socket.write_all(b"not json\n{\"error\":\"boom\"}\n").await.unwrap();

        // The garbage line is dropped; the next valid line still arrives.
        let value = client.from_server.recv().await.unwrap();
        assert_eq!(value["error"], "boom");

        client.stop();
    }
}
