//! Wire DTOs for the realtime event channel.
//!
//! DESIGN
//! ======
//! The socket carries named events in a small JSON envelope. Payload field
//! names match the server protocol exactly (camelCase), so these types are
//! the only place wire naming appears.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Event name used for chat traffic in both directions.
pub const CHAT_MESSAGE_EVENT: &str = "chatMessage";

/// Envelope for a named event on the realtime socket.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClientEvent {
    /// Event name (e.g. `"chatMessage"`).
    pub event: String,
    /// Event payload; shape depends on the event name.
    #[serde(default)]
    pub data: serde_json::Value,
}

/// Outbound chat payload: `{ roomCode, message }`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatSend {
    pub room_code: String,
    pub message: String,
}

/// Inbound chat payload: `{ playerName, message, timestamp }`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatReceived {
    pub player_name: String,
    pub message: String,
    /// Milliseconds since the Unix epoch.
    pub timestamp: f64,
}
