use mydesk_core::{ConnectionId, RoomCode};
use serde::Serialize;
use std::collections::HashSet;
use tokio::time::Instant;

/// One rendezvous point: a single host and any number of viewers.
#[derive(Debug)]
pub struct Room {
    pub code: RoomCode,
    pub host: Option<ConnectionId>,
    pub viewers: HashSet<ConnectionId>,
    pub created_at: Instant,
}

impl Room {
    pub fn new(code: RoomCode) -> Self {
        Self {
            code,
            host: None,
            viewers: HashSet::new(),
            created_at: Instant::now(),
        }
    }

    pub fn is_member(&self, id: &ConnectionId) -> bool {
        self.host.as_ref() == Some(id) || self.viewers.contains(id)
    }

    /// Host and viewers, minus `exclude`.
    pub fn members_except(&self, exclude: &ConnectionId) -> Vec<ConnectionId> {
        self.host
            .iter()
            .chain(self.viewers.iter())
            .filter(|id| *id != exclude)
            .copied()
            .collect()
    }

    pub fn info(&self) -> RoomInfo {
        RoomInfo {
            room_id: self.code.clone(),
            host_connected: self.host.is_some(),
            viewer_count: self.viewers.len(),
        }
    }
}

/// Read-only view of a room exposed over HTTP.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomInfo {
    pub room_id: RoomCode,
    pub host_connected: bool,
    pub viewer_count: usize,
}
