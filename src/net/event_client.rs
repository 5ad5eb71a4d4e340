//! WebSocket event client for real-time communication with the server.
//!
//! Owns the socket lifecycle: connection, reconnection with exponential
//! backoff, the outbound send pump, and inbound event dispatch. The rest of
//! the client only ever sees the returned sender channel and the
//! [`SessionState`] status signal, so transport details stay contained here.
//!
//! All WebSocket logic is gated behind `#[cfg(feature = "hydrate")]` since it
//! requires a browser environment.

#[cfg(feature = "hydrate")]
use crate::net::chat_events::apply_chat_event;
#[cfg(feature = "hydrate")]
use crate::net::types::ClientEvent;
#[cfg(feature = "hydrate")]
use crate::state::chat::ChatState;
#[cfg(feature = "hydrate")]
use crate::state::session::{ConnectionStatus, SessionState};
#[cfg(feature = "hydrate")]
use leptos::prelude::Update;

/// Spawn the WebSocket event client lifecycle as a local async task.
///
/// Connects to the server, routes inbound chat events into `chat`, mirrors
/// connection status into `session`, and reconnects on disconnect with
/// exponential backoff. Returns the channel used to send serialized events.
#[cfg(feature = "hydrate")]
pub fn spawn_event_client(
    chat: leptos::prelude::RwSignal<ChatState>,
    session: leptos::prelude::RwSignal<SessionState>,
) -> futures::channel::mpsc::UnboundedSender<String> {
    use futures::channel::mpsc;

    let (tx, rx) = mpsc::unbounded::<String>();

    leptos::task::spawn_local(event_client_loop(chat, session, rx));

    tx
}

/// Main connection loop with reconnect logic.
#[cfg(feature = "hydrate")]
async fn event_client_loop(
    chat: leptos::prelude::RwSignal<ChatState>,
    session: leptos::prelude::RwSignal<SessionState>,
    rx: futures::channel::mpsc::UnboundedReceiver<String>,
) {
    use std::cell::RefCell;
    use std::rc::Rc;

    let rx = Rc::new(RefCell::new(rx));
    let initial_backoff_ms: u32 = 1000;
    let max_backoff_ms: u32 = 10_000;
    let mut backoff_ms = initial_backoff_ms;

    loop {
        session.update(|s| s.connection_status = ConnectionStatus::Connecting);

        let ws_url = websocket_url();

        match connect_and_run(&ws_url, chat, session, &rx).await {
            Ok(()) => {
                leptos::logging::log!("WS disconnected cleanly");
                backoff_ms = initial_backoff_ms;
            }
            Err(e) => {
                leptos::logging::warn!("WS error: {e}");
            }
        }

        session.update(|s| s.connection_status = ConnectionStatus::Disconnected);

        // Exponential backoff before reconnect.
        gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(backoff_ms))).await;
        backoff_ms = (backoff_ms * 2).min(max_backoff_ms);
    }
}

/// Derive the WebSocket URL from the current page location.
#[cfg(feature = "hydrate")]
fn websocket_url() -> String {
    let location = web_sys::window()
        .and_then(|w| w.location().href().ok())
        .unwrap_or_default();
    let ws_proto = if location.starts_with("https") { "wss" } else { "ws" };
    let host = web_sys::window()
        .and_then(|w| w.location().host().ok())
        .unwrap_or_else(|| "localhost:3000".to_owned());
    format!("{ws_proto}://{host}/ws")
}

/// Connect to the WebSocket and process messages until disconnect.
#[cfg(feature = "hydrate")]
async fn connect_and_run(
    url: &str,
    chat: leptos::prelude::RwSignal<ChatState>,
    session: leptos::prelude::RwSignal<SessionState>,
    rx: &std::rc::Rc<std::cell::RefCell<futures::channel::mpsc::UnboundedReceiver<String>>>,
) -> Result<(), String> {
    use futures::StreamExt;
    use gloo_net::websocket::Message;
    use gloo_net::websocket::futures::WebSocket;

    let ws = WebSocket::open(url).map_err(|e| e.to_string())?;
    let (mut ws_write, mut ws_read) = ws.split();

    session.update(|s| s.connection_status = ConnectionStatus::Connected);

    // Forward outgoing events from the shared channel to the socket.
    let mut rx_borrow = rx.borrow_mut();
    let send_task = async {
        use futures::SinkExt;
        while let Some(msg) = rx_borrow.next().await {
            if ws_write.send(Message::Text(msg)).await.is_err() {
                break;
            }
        }
    };

    // Receive loop: route inbound events.
    let recv_task = async {
        while let Some(msg) = ws_read.next().await {
            match msg {
                Ok(Message::Text(text)) => {
                    if let Ok(event) = serde_json::from_str::<ClientEvent>(&text) {
                        dispatch_event(&event, chat);
                    }
                }
                Ok(Message::Bytes(_)) => {}
                Err(e) => {
                    leptos::logging::warn!("WS recv error: {e}");
                    break;
                }
            }
        }
    };

    // Run both tasks; when either finishes, the connection is done.
    futures::future::select(Box::pin(send_task), Box::pin(recv_task)).await;

    Ok(())
}

/// Route an inbound event to its state handler. Unknown events are ignored.
#[cfg(feature = "hydrate")]
fn dispatch_event(event: &ClientEvent, chat: leptos::prelude::RwSignal<ChatState>) {
    let mut accepted = false;
    chat.update(|c| accepted = apply_chat_event(c, event));
    if !accepted && event.event == crate::net::types::CHAT_MESSAGE_EVENT {
        leptos::logging::warn!("chat: dropped inbound message (disabled or malformed)");
    }
}
