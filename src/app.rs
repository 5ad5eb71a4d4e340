//! Root application component with context providers and startup wiring.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::net::types::ClientEvent;
use crate::pages::room::RoomPage;
use crate::state::chat::ChatState;
use crate::state::session::SessionState;

/// Cloneable handle for sending serialized events to the websocket task.
///
/// Starts detached; the application attaches the channel once the event
/// client is running. The chat widget treats a detached sender as
/// "connection handle not available" and declines to send.
#[derive(Clone, Default)]
pub struct EventSender {
    tx: Option<futures::channel::mpsc::UnboundedSender<String>>,
}

impl EventSender {
    pub fn new(tx: futures::channel::mpsc::UnboundedSender<String>) -> Self {
        Self { tx: Some(tx) }
    }

    /// Whether a realtime connection handle has been attached.
    pub fn attached(&self) -> bool {
        self.tx.is_some()
    }

    /// Serialize and queue an event for the socket.
    ///
    /// Returns `false` when detached, when serialization fails, or when the
    /// event client has shut its receiving end.
    pub fn send(&self, event: &ClientEvent) -> bool {
        let Some(tx) = &self.tx else {
            return false;
        };
        match serde_json::to_string(event) {
            Ok(json) => tx.unbounded_send(json).is_ok(),
            Err(_) => false,
        }
    }
}

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared state contexts, resolves the session's feature flags
/// exactly once, and boots the websocket event client when chat is enabled.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let chat = RwSignal::new(ChatState::default());
    let session = RwSignal::new(SessionState::default());
    let sender = RwSignal::new(EventSender::default());

    provide_context(chat);
    provide_context(session);
    provide_context(sender);

    // Resolve feature flags, then initialize chat and open the socket. Flag
    // availability is an explicit precondition here: initialization runs
    // once the fetch resolves, never on a timer. `ChatState::initialize`
    // absorbs any re-entry.
    #[cfg(feature = "hydrate")]
    {
        let boot_started = RwSignal::new(false);
        Effect::new(move || {
            if boot_started.get_untracked() {
                return;
            }
            boot_started.set(true);

            leptos::task::spawn_local(async move {
                let flags = crate::net::api::fetch_feature_flags().await.unwrap_or_default();

                let mut enabled_now = false;
                chat.update(|c| enabled_now = c.initialize(&flags));

                if enabled_now {
                    leptos::logging::log!("chat: initialized and enabled");
                    let tx = crate::net::event_client::spawn_event_client(chat, session);
                    sender.set(EventSender::new(tx));
                } else {
                    leptos::logging::log!("chat: not enabled (feature flag disabled)");
                }
            });
        });
    }

    view! {
        <Stylesheet id="leptos" href="/pkg/room-chat.css"/>
        <Title text="Room Chat"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=RoomPage/>
            </Routes>
        </Router>
    }
}
