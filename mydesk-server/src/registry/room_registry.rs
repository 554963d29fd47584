use crate::error::RegistryError;
use crate::registry::{Room, RoomInfo};
use mydesk_core::{ConnectionId, RoomCode};
use std::collections::{HashMap, HashSet};
use std::time::Duration;
use tokio::time::Instant;
use tracing::info;

/// In-memory map from room code to room state.
///
/// Not synchronized: it is owned by the coordinator task, which applies
/// every mutation to completion before looking at the next event.
#[derive(Debug, Default)]
pub struct RoomRegistry {
    rooms: HashMap<RoomCode, Room>,
}

impl RoomRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the room for `code`, creating an empty, hostless one if needed.
    pub fn create_room(&mut self, code: &RoomCode) -> &mut Room {
        self.rooms.entry(code.clone()).or_insert_with(|| {
            info!(room = %code, "Creating room");
            Room::new(code.clone())
        })
    }

    pub fn get_room(&self, code: &str) -> Option<&Room> {
        self.rooms.get(code)
    }

    /// Assigns the host, creating the room if absent. Returns the previous host.
    pub fn set_host(&mut self, code: &RoomCode, id: ConnectionId) -> Option<ConnectionId> {
        self.create_room(code).host.replace(id)
    }

    /// Adds a viewer and returns the new viewer count.
    pub fn add_viewer(&mut self, code: &RoomCode, id: ConnectionId) -> Result<usize, RegistryError> {
        let room = self
            .rooms
            .get_mut(code.as_str())
            .ok_or_else(|| RegistryError::RoomNotFound(code.clone()))?;

        if room.host.is_none() {
            return Err(RegistryError::HostNotConnected(code.clone()));
        }

        room.viewers.insert(id);
        Ok(room.viewers.len())
    }

    /// Removes a viewer. `Some(count)` only if `id` really was a viewer of an existing room.
    pub fn remove_viewer(&mut self, code: &RoomCode, id: &ConnectionId) -> Option<usize> {
        let room = self.rooms.get_mut(code.as_str())?;
        room.viewers.remove(id).then(|| room.viewers.len())
    }

    /// Deletes the room and hands back the viewers that were attached to it.
    pub fn remove_host(&mut self, code: &RoomCode) -> Option<HashSet<ConnectionId>> {
        let room = self.rooms.remove(code.as_str())?;
        info!(room = %code, active_rooms = self.rooms.len(), "Room closed (host left)");
        Some(room.viewers)
    }

    /// Drops every room older than `max_age` that has no viewers.
    pub fn sweep_expired(&mut self, max_age: Duration) -> Vec<RoomCode> {
        let now = Instant::now();
        let mut removed = Vec::new();

        self.rooms.retain(|code, room| {
            let expired =
                room.viewers.is_empty() && now.saturating_duration_since(room.created_at) > max_age;
            if expired {
                info!(room = %code, "Cleaned up inactive room");
                removed.push(code.clone());
            }
            !expired
        });

        removed
    }

    pub fn room_info(&self, code: &str) -> Option<RoomInfo> {
        self.get_room(code).map(Room::info)
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }
}
