//! In-process WebSocket server used by the integration tests.

#![allow(dead_code)]

use std::net::SocketAddr;

use axum::{
    Router,
    extract::{
        State,
        ws::{Message, WebSocket, WebSocketUpgrade},
    },
    response::IntoResponse,
    routing::get,
};
use tokio::sync::mpsc;

/// Text that makes the echo endpoint close the connection.
pub const QUIT: &str = "quit";

/// Lines the greeting endpoint sends before closing.
pub const GREETING: [&str; 2] = ["Welcome to anagrams!", ""];

#[derive(Clone)]
struct ServerState {
    received: mpsc::UnboundedSender<String>,
}

/// Build the test router.
///
/// * `/ws/echo` - echoes every text frame, closes after receiving [`QUIT`]
/// * `/ws/greet` - sends [`GREETING`] and closes
/// * `/ws/idle` - never sends anything
///
/// Every text frame received on any endpoint is forwarded to `received`.
pub fn app(received: mpsc::UnboundedSender<String>) -> Router {
    Router::new()
        .route("/ws/echo", get(echo_handler))
        .route("/ws/greet", get(greet_handler))
        .route("/ws/idle", get(idle_handler))
        .with_state(ServerState { received })
}

/// Serve [`app`] on an ephemeral port of the current runtime.
pub async fn spawn_server() -> (SocketAddr, mpsc::UnboundedReceiver<String>) {
    let (tx, rx) = mpsc::unbounded_channel();
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test server");
    let addr = listener.local_addr().expect("Failed to read local address");

    tokio::spawn(async move {
        axum::serve(listener, app(tx))
            .await
            .expect("Test server failed");
    });

    (addr, rx)
}

pub fn ws_url(addr: SocketAddr, path: &str) -> String {
    format!("ws://{}{}", addr, path)
}

async fn echo_handler(ws: WebSocketUpgrade, State(state): State<ServerState>) -> impl IntoResponse {
    ws.on_upgrade(move |socket| echo(socket, state))
}

async fn greet_handler(ws: WebSocketUpgrade) -> impl IntoResponse {
    ws.on_upgrade(greet)
}

async fn idle_handler(ws: WebSocketUpgrade, State(state): State<ServerState>) -> impl IntoResponse {
    ws.on_upgrade(move |mut socket| async move { drain(&mut socket, &state).await })
}

async fn echo(mut socket: WebSocket, state: ServerState) {
    while let Some(Ok(message)) = socket.recv().await {
        let Message::Text(text) = message else {
            continue;
        };
        let text = text.as_str().to_owned();
        let _ = state.received.send(text.clone());

        if text == QUIT {
            let _ = socket.send(Message::Close(None)).await;
            break;
        }
        if socket.send(Message::Text(text.into())).await.is_err() {
            break;
        }
    }
}

async fn greet(mut socket: WebSocket) {
    for line in GREETING {
        if socket.send(Message::Text(line.to_string().into())).await.is_err() {
            return;
        }
    }
    let _ = socket.send(Message::Close(None)).await;
    // Wait for the client's close reply
    while let Some(Ok(_)) = socket.recv().await {}
}

async fn drain(socket: &mut WebSocket, state: &ServerState) {
    while let Some(Ok(message)) = socket.recv().await {
        if let Message::Text(text) = message {
            let _ = state.received.send(text.as_str().to_owned());
        }
    }
}
