pub mod control;
pub mod model;
pub mod traits;

pub use control::RemoteControl;
pub use model::*;
pub use traits::*;
