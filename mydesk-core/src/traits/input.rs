use crate::model::{KeyboardAction, MouseAction};

#[derive(Debug, thiserror::Error)]
pub enum InjectError {
    #[error("input backend unavailable")]
    Unavailable,
    #[error("input injection failed: {0}")]
    Backend(String),
}

/// Platform side that replays viewer input on the host machine.
pub trait InputInjector: Send + Sync {
    fn inject_mouse(&self, action: &MouseAction) -> Result<(), InjectError>;

    fn inject_keyboard(&self, action: &KeyboardAction) -> Result<(), InjectError>;
}
