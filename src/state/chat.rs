#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use crate::state::flags::FeatureFlags;

/// Maximum number of messages kept in the rendered history.
pub const MESSAGE_HISTORY_LIMIT: usize = 50;

/// State for the room chat widget.
///
/// Owned by the application root as a single signal; components read and
/// update it through context. `initialized` guards duplicate setup,
/// `enabled` gates all message I/O, and `visible` only controls display.
#[derive(Clone, Debug)]
pub struct ChatState {
    pub enabled: bool,
    pub visible: bool,
    pub initialized: bool,
    pub messages: Vec<ChatMessage>,
}

impl Default for ChatState {
    fn default() -> Self {
        Self {
            enabled: false,
            // The panel starts expanded; the header toggle collapses it.
            visible: true,
            initialized: false,
            messages: Vec::new(),
        }
    }
}

/// A single chat message as rendered in the history list.
#[derive(Clone, Debug, PartialEq)]
pub struct ChatMessage {
    /// Locally generated render key; inbound payloads carry no id.
    pub id: String,
    pub player_name: String,
    pub text: String,
    /// Milliseconds since the Unix epoch.
    pub timestamp: f64,
}

impl ChatState {
    /// Apply resolved feature flags, enabling the widget when the `chat`
    /// capability is on. Idempotent: once initialized, later calls are
    /// no-ops, so a flag payload arriving twice cannot re-run setup.
    ///
    /// Returns `true` only when this call transitioned the widget into the
    /// enabled state.
    pub fn initialize(&mut self, flags: &FeatureFlags) -> bool {
        if self.initialized {
            return false;
        }
        self.initialized = true;
        self.enabled = flags.chat;
        self.enabled
    }

    /// Flip panel visibility. Display only; message I/O is unaffected.
    pub fn toggle_visibility(&mut self) {
        self.visible = !self.visible;
    }

    /// Append a message to the history, evicting the oldest entries once
    /// the history exceeds [`MESSAGE_HISTORY_LIMIT`].
    ///
    /// No-op while the widget is disabled.
    pub fn push_message(&mut self, message: ChatMessage) {
        if !self.enabled {
            return;
        }
        self.messages.push(message);
        if self.messages.len() > MESSAGE_HISTORY_LIMIT {
            let excess = self.messages.len() - MESSAGE_HISTORY_LIMIT;
            self.messages.drain(..excess);
        }
    }
}
