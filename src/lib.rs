//! # room-chat
//!
//! Leptos + WASM chat widget for room-based multiplayer pages. The widget is
//! feature-flagged: it only renders, listens, and sends when the session's
//! `chat` capability flag is on. Messages ride an existing realtime
//! websocket as named JSON events, and the rendered history is bounded.
//!
//! This crate contains the page shell, the chat panel component, application
//! state, network types, and the websocket event client.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Client-side entry point: install the panic hook and console logger, then
/// hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::App;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    leptos::mount::hydrate_body(App);
}
