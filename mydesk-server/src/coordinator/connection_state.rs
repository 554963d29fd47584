use mydesk_core::RoomCode;
use tokio::time::Instant;

/// Role a connection currently plays.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ConnectionState {
    #[default]
    Idle,
    Hosting(RoomCode),
    Viewing(RoomCode),
}

impl ConnectionState {
    pub fn room(&self) -> Option<&RoomCode> {
        match self {
            ConnectionState::Idle => None,
            ConnectionState::Hosting(code) | ConnectionState::Viewing(code) => Some(code),
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, ConnectionState::Idle)
    }
}

/// Coordinator-side record of one client connection.
#[derive(Debug)]
pub struct Connection {
    pub state: ConnectionState,
    pub connected_at: Instant,
}

impl Connection {
    pub fn new() -> Self {
        Self {
            state: ConnectionState::Idle,
            connected_at: Instant::now(),
        }
    }
}

impl Default for Connection {
    fn default() -> Self {
        Self::new()
    }
}
