mod capture;
mod connection;
mod input;
mod room;
mod signaling;

pub use capture::CapturableSurface;
pub use connection::{ConnectionId, ParseConnectionIdError};
pub use input::{Key, KeyboardAction, KeyboardActionKind, MouseAction, MouseButton, NamedKey};
pub use room::RoomCode;
pub use signaling::{ClientMessage, ServerMessage};
