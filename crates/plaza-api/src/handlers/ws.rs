//! WebSocket event feed handler.
//!
//! Every connected client receives all account-lifecycle and
//! notification events as JSON messages. Delivery is best-effort: a
//! subscriber that lags past the channel capacity skips the missed
//! events and keeps receiving.

use axum::extract::ws::{Message, WebSocket};
use axum::extract::{Query, State, WebSocketUpgrade};
use axum::response::Response;
use futures::{SinkExt, StreamExt};
use tokio::sync::broadcast::error::RecvError;
use tracing::{debug, info, warn};

use crate::error::ApiError;
use crate::state::AppState;

/// Query parameter for WebSocket authentication.
#[derive(Debug, serde::Deserialize)]
pub struct WsQuery {
    /// JWT access token.
    pub token: String,
}

/// GET /ws?token={jwt} — WebSocket upgrade.
pub async fn ws_upgrade(
    State(state): State<AppState>,
    ws: WebSocketUpgrade,
    Query(query): Query<WsQuery>,
) -> Result<Response, ApiError> {
    // Authenticate before upgrading.
    let claims = state.jwt_decoder.decode_token(&query.token).map_err(ApiError)?;

    Ok(ws.on_upgrade(move |socket| handle_ws_connection(state, claims.username, socket)))
}

/// Forwards broadcast events to an established WebSocket connection.
async fn handle_ws_connection(state: AppState, username: String, socket: WebSocket) {
    let mut events = state.event_hub.subscribe();
    let (mut ws_tx, mut ws_rx) = socket.split();

    info!(username = %username, "WebSocket subscriber connected");

    let forward = tokio::spawn(async move {
        loop {
            match events.recv().await {
                Ok(event) => {
                    let Ok(json) = serde_json::to_string(&event) else {
                        continue;
                    };
                    if ws_tx.send(Message::Text(json.into())).await.is_err() {
                        break;
                    }
                }
                Err(RecvError::Lagged(missed)) => {
                    debug!(missed, "WebSocket subscriber lagged behind");
                }
                Err(RecvError::Closed) => break,
            }
        }
    });

    // Drain inbound messages until the client closes the connection.
    while let Some(result) = ws_rx.next().await {
        match result {
            Ok(Message::Close(_)) => break,
            Ok(_) => {}
            Err(e) => {
                warn!(username = %username, error = %e, "WebSocket error");
                break;
            }
        }
    }

    forward.abort();
    info!(username = %username, "WebSocket subscriber disconnected");
}
