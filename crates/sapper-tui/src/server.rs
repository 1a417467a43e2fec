//! In-process practice server.
//!
//! Plays the game server's role using channels for message transport. No
//! network - outbound messages flow through mpsc so the whole input path
//! can be exercised deterministically with a real terminal.
//!
//! Replies mirror the real server's shapes: `join_queue` is acknowledged
//! with a `startup_status` object, game events echo back as `status`
//! notifications.

use sapper_proto::WireMessage;
use serde_json::json;
use tokio::sync::mpsc;

use sapper_client::OUTBOUND_CAPACITY;

/// Handle to a running in-process server.
pub struct ServerHandle {
    /// Send messages to the server.
    pub to_server: mpsc::Sender<WireMessage>,
    /// Receive notifications from the server.
    pub from_server: mpsc::Receiver<serde_json::Value>,
    /// Abort handle to stop the server task.
    abort_handle: tokio::task::AbortHandle,
}

impl ServerHandle {
    /// Stop the server.
    pub fn stop(&self) {
        self.abort_handle.abort();
    }
}

/// Spawn an in-process practice server.
///
/// Returns a handle with channels for message transport. The server runs as
/// a tokio task until dropped or stopped.
pub fn spawn_server() -> ServerHandle {
    let (client_tx, mut server_rx) = mpsc::channel::<WireMessage>(OUTBOUND_CAPACITY);
    let (server_tx, client_rx) = mpsc::channel::<serde_json::Value>(OUTBOUND_CAPACITY);

    let handle = tokio::spawn(async move {
        while let Some(message) = server_rx.recv().await {
            let reply = match message {
                WireMessage::JoinQueue { queue } => {
                    tracing::info!(%queue, "practice server: queue joined");
                    json!({ "cmd": "startup_status", "queue": queue, "players": 1 })
                },
                WireMessage::SendEvent { event, args } => {
                    json!({
                        "command": "status",
                        "status": { "didsmthhappen": true, "event": event, "args": args },
                    })
                },
            };

            if server_tx.send(reply).await.is_err() {
                break;
            }
        }
    });

    ServerHandle {
        to_server: client_tx,
        from_server: client_rx,
        abort_handle: handle.abort_handle(),
    }
}
