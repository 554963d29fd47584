mod config;
mod coordinator;
mod error;
mod http;
mod registry;
mod server;
mod signaling;

pub use config::*;
pub use coordinator::*;
pub use error::*;
pub use http::*;
pub use registry::*;
pub use server::*;
pub use signaling::*;
