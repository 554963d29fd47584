mod capture;
mod input;

pub use capture::{CaptureError, CaptureSourceProvider};
pub use input::{InjectError, InputInjector};
