use mydesk_core::RoomCode;

/// Failures of a registry mutation. The display text is what clients see in `room-error`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("Room not found")]
    RoomNotFound(RoomCode),
    #[error("Host not connected")]
    HostNotConnected(RoomCode),
}

impl RegistryError {
    pub fn room_id(&self) -> &RoomCode {
        match self {
            RegistryError::RoomNotFound(code) | RegistryError::HostNotConnected(code) => code,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SignalingError {
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// A frame that is not a valid client message. Dropped, never fatal.
    #[error("malformed message: {0}")]
    MalformedMessage(#[from] serde_json::Error),

    /// The client transport went away; drives leave cleanup.
    #[error("transport closed")]
    TransportClosed,

    #[error("coordinator is no longer running")]
    CoordinatorClosed,
}
