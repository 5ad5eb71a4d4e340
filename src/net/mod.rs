//! Networking modules for HTTP + the websocket event channel.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls, `event_client` manages the websocket lifecycle,
//! `chat_events` holds the pure compose/parse rules for chat traffic, and
//! `types` defines the shared wire schema.

pub mod api;
pub mod chat_events;
pub mod event_client;
pub mod types;
