#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

/// Connection-level state shared between the event client and the widget.
#[derive(Clone, Copy, Debug, Default)]
pub struct SessionState {
    pub connection_status: ConnectionStatus,
}

/// WebSocket connection status.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ConnectionStatus {
    #[default]
    Disconnected,
    Connecting,
    Connected,
}
