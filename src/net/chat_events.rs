//! Compose and apply chat events.
//!
//! DESIGN
//! ======
//! The send/receive rules live here as plain functions over plain data, so
//! the widget's preconditions are testable without a browser. Callers log
//! diagnostics; these helpers just decline by returning `None`.

#[cfg(test)]
#[path = "chat_events_test.rs"]
mod chat_events_test;

use crate::net::types::{CHAT_MESSAGE_EVENT, ChatSend, ClientEvent};
#[cfg(any(test, feature = "hydrate"))]
use crate::net::types::ChatReceived;
#[cfg(any(test, feature = "hydrate"))]
use crate::state::chat::{ChatMessage, ChatState};
use crate::state::session::ConnectionStatus;

/// Build the outbound `chatMessage` event for the current input, or `None`
/// when any send precondition fails: widget disabled, connection not in the
/// connected state, input blank after trimming, or no room code available
/// from the page URL.
pub(crate) fn outgoing_chat_event(
    enabled: bool,
    status: ConnectionStatus,
    input: &str,
    room_code: Option<&str>,
) -> Option<ClientEvent> {
    if !enabled {
        return None;
    }
    if status != ConnectionStatus::Connected {
        return None;
    }
    let message = input.trim();
    if message.is_empty() {
        return None;
    }
    let room_code = room_code.map(str::trim).filter(|code| !code.is_empty())?;

    let payload = ChatSend {
        room_code: room_code.to_owned(),
        message: message.to_owned(),
    };
    Some(ClientEvent {
        event: CHAT_MESSAGE_EVENT.to_owned(),
        data: serde_json::to_value(payload).ok()?,
    })
}

/// Parse an inbound `chatMessage` event into a [`ChatMessage`].
///
/// Returns `None` for other event names or malformed payloads. The message
/// text is carried verbatim; rendering happens through text nodes, so markup
/// in the payload is never interpreted.
#[cfg(any(test, feature = "hydrate"))]
pub(super) fn parse_chat_event(event: &ClientEvent) -> Option<ChatMessage> {
    if event.event != CHAT_MESSAGE_EVENT {
        return None;
    }
    let payload: ChatReceived = serde_json::from_value(event.data.clone()).ok()?;
    Some(ChatMessage {
        id: uuid::Uuid::new_v4().to_string(),
        player_name: payload.player_name,
        text: payload.message,
        timestamp: payload.timestamp,
    })
}

/// Apply an inbound event to the chat history.
///
/// Returns `true` when the event was a chat message accepted into the
/// history. Disabled state is absorbed by [`ChatState::push_message`].
#[cfg(any(test, feature = "hydrate"))]
pub(super) fn apply_chat_event(chat: &mut ChatState, event: &ClientEvent) -> bool {
    let Some(message) = parse_chat_event(event) else {
        return false;
    };
    if !chat.enabled {
        return false;
    }
    chat.push_message(message);
    true
}
