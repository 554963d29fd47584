use crate::model::{KeyboardAction, MouseAction};
use crate::traits::InputInjector;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{info, warn};

/// Host-side switch in front of an [`InputInjector`].
///
/// Remote input is dropped until the host enables control. Injection errors
/// stay here: they are logged and never reported back to the viewer.
pub struct RemoteControl<I> {
    injector: I,
    enabled: AtomicBool,
}

impl<I: InputInjector> RemoteControl<I> {
    pub fn new(injector: I) -> Self {
        Self {
            injector,
            enabled: AtomicBool::new(false),
        }
    }

    pub fn set_enabled(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::SeqCst);
        info!(
            "Remote control: {}",
            if enabled { "ENABLED" } else { "DISABLED" }
        );
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::SeqCst)
    }

    pub fn inject_mouse(&self, action: &MouseAction) {
        if !self.is_enabled() {
            return;
        }
        if let Err(e) = self.injector.inject_mouse(action) {
            warn!(?action, "Mouse action error: {}", e);
        }
    }

    pub fn inject_keyboard(&self, action: &KeyboardAction) {
        if !self.is_enabled() {
            return;
        }
        if let Err(e) = self.injector.inject_keyboard(action) {
            warn!(?action, "Keyboard action error: {}", e);
        }
    }

    pub fn injector(&self) -> &I {
        &self.injector
    }
}
