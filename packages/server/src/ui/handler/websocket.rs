//! WebSocket connection handlers.

use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{
        Query, State,
        ws::{Message, WebSocket, WebSocketUpgrade},
    },
    response::IntoResponse,
};
use futures_util::{
    sink::SinkExt,
    stream::{SplitSink, StreamExt},
};
use tokio::sync::mpsc;

use crate::{
    domain::{DisplayName, Frame},
    infrastructure::dto::websocket::frame_to_json,
    ui::state::AppState,
};

pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
    Query(query): Query<HashMap<String, String>>,
) -> impl IntoResponse {
    // A map never rejects a repeated `name`; the last occurrence wins
    let display_name = DisplayName::from_query(query.get("name").cloned());
    tracing::debug!("Upgrade requested by '{}'", display_name);

    ws.on_upgrade(move |socket| handle_socket(socket, state, display_name))
}

/// Spawns a task that drains the connection's frame queue into the WebSocket sink.
///
/// Frames are serialized to JSON here, so the domain never sees the wire format.
/// The task ends when the queue is closed (the connection left the registry)
/// or the socket can no longer be written.
fn pusher_loop(
    mut rx: mpsc::UnboundedReceiver<Frame>,
    mut sender: SplitSink<WebSocket, Message>,
    display_name: DisplayName,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(frame) = rx.recv().await {
            let json = match frame_to_json(&frame) {
                Ok(json) => json,
                Err(e) => {
                    tracing::error!("Failed to serialize frame for '{}': {}", display_name, e);
                    continue;
                }
            };
            if let Err(e) = sender.send(Message::Text(json.into())).await {
                tracing::debug!("Failed to write to '{}': {}", display_name, e);
                break;
            }
        }
    })
}

async fn handle_socket(socket: WebSocket, state: Arc<AppState>, display_name: DisplayName) {
    let (sender, mut receiver) = socket.split();

    // CONNECTING → OPEN: register and queue the history frame
    let (tx, rx) = mpsc::unbounded_channel();
    let connection_id = state
        .connect_client_usecase
        .execute(display_name.clone(), tx)
        .await;

    let mut send_task = pusher_loop(rx, sender, display_name.clone());

    let state_clone = state.clone();
    let sender_name = display_name.clone();

    // Spawn a task to receive messages from this client
    let mut recv_task = tokio::spawn(async move {
        while let Some(msg) = receiver.next().await {
            let msg = match msg {
                Ok(msg) => msg,
                Err(e) => {
                    tracing::warn!("WebSocket error from '{}': {}", sender_name, e);
                    break;
                }
            };

            match msg {
                Message::Text(text) => {
                    if let Err(e) = state_clone
                        .send_message_usecase
                        .execute(sender_name.clone(), text.to_string())
                        .await
                    {
                        tracing::debug!("Dropped frame from '{}': {}", sender_name, e);
                    }
                }
                Message::Binary(_) => {
                    tracing::debug!("Ignoring binary frame from '{}'", sender_name);
                }
                Message::Ping(_) | Message::Pong(_) => {
                    // Ping/pong is handled automatically by the WebSocket protocol
                }
                Message::Close(_) => {
                    tracing::debug!("Client '{}' requested close", sender_name);
                    break;
                }
            }
        }
    });

    // If any one of the tasks completes, abort the other
    tokio::select! {
        _ = &mut recv_task => send_task.abort(),
        _ = &mut send_task => recv_task.abort(),
    };

    // OPEN → CLOSED
    state.disconnect_client_usecase.execute(&connection_id).await;
}
