//! Floating room chat panel displaying and sending messages.

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::app::EventSender;
use crate::net::chat_events::outgoing_chat_event;
use crate::state::chat::{ChatMessage, ChatState};
use crate::state::session::SessionState;
use crate::util::clock;

/// Chat panel showing the bounded message history and an input for sending
/// new messages. The header toggle collapses the panel to its title bar.
#[component]
pub fn ChatPanel() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let session = expect_context::<RwSignal<SessionState>>();
    let sender = expect_context::<RwSignal<EventSender>>();
    let query = use_query_map();

    let input = RwSignal::new(String::new());
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    // Keep the newest message in view whenever the history changes.
    Effect::new(move || {
        let _ = chat.get().messages.len();

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = messages_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    let do_send = move || {
        let state = chat.get_untracked();
        if !state.enabled {
            leptos::logging::warn!("chat: not enabled");
            return;
        }

        let handle = sender.get_untracked();
        if !handle.attached() {
            leptos::logging::warn!("chat: realtime connection not ready");
            return;
        }

        let status = session.get_untracked().connection_status;
        let room_code = query.get_untracked().get("room");
        let text = input.get_untracked();

        let Some(event) = outgoing_chat_event(state.enabled, status, &text, room_code.as_deref())
        else {
            leptos::logging::warn!("chat: message not sent (disconnected, blank, or no room)");
            return;
        };

        if handle.send(&event) {
            input.set(String::new());
        }
    };

    let on_click = move |_| do_send();

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            do_send();
        }
    };

    let on_toggle = move |_| chat.update(ChatState::toggle_visibility);

    let can_send = move || !input.get().trim().is_empty();

    view! {
        <div class="chat-panel" class:chat-panel--collapsed=move || !chat.get().visible>
            <div class="chat-panel__header">
                <span class="chat-panel__title">"Chat"</span>
                <button class="chat-panel__toggle" on:click=on_toggle title="Toggle chat">
                    {move || if chat.get().visible { "−" } else { "+" }}
                </button>
            </div>

            <div class="chat-panel__messages" node_ref=messages_ref>
                <Show
                    when=move || !chat.get().messages.is_empty()
                    fallback=|| view! { <div class="chat-panel__empty">"No messages yet"</div> }
                >
                    <For
                        each=move || chat.get().messages
                        key=|msg| msg.id.clone()
                        children=move |msg: ChatMessage| {
                            view! {
                                <div class="chat-panel__message">
                                    <span class="chat-panel__author">{msg.player_name}":"</span>
                                    <span class="chat-panel__text">{msg.text}</span>
                                    <span class="chat-panel__time">
                                        {clock::message_time(msg.timestamp)}
                                    </span>
                                </div>
                            }
                        }
                    />
                </Show>
            </div>

            <div class="chat-panel__input-row">
                <input
                    class="chat-panel__input"
                    type="text"
                    placeholder="Type a message..."
                    maxlength="100"
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                    on:keydown=on_keydown
                />
                <button class="btn chat-panel__send" on:click=on_click disabled=move || !can_send()>
                    "Send"
                </button>
            </div>
        </div>
    }
}
