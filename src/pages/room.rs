//! Room page hosting the floating chat widget.

use leptos::prelude::*;

use crate::components::chat_panel::ChatPanel;
use crate::state::chat::ChatState;

/// Page shown for a game room. The chat panel only exists in the view tree
/// once the session's feature flags have enabled it, so a disabled session
/// renders no chat UI at all.
#[component]
pub fn RoomPage() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();

    let enabled = move || chat.get().enabled;

    view! {
        <main class="room-page">
            <Show when=enabled>
                <ChatPanel/>
            </Show>
        </main>
    }
}
