pub use mydesk_core::{ConnectionId, RoomCode};

pub mod model {
    pub use mydesk_core::model::*;
}

pub mod control {
    pub use mydesk_core::control::*;
    pub use mydesk_core::traits::*;
}

#[cfg(feature = "server")]
pub mod server {
    pub use mydesk_server::*;
}
