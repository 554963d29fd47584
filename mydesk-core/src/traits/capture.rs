use crate::model::CapturableSurface;
use tracing::error;

#[derive(Debug, thiserror::Error)]
pub enum CaptureError {
    #[error("capture backend unavailable: {0}")]
    Unavailable(String),
    #[error("failed to enumerate surfaces: {0}")]
    Enumeration(String),
}

/// Platform side that knows which screens and windows can be shared.
pub trait CaptureSourceProvider: Send + Sync {
    fn list_capturable_surfaces(&self) -> Result<Vec<CapturableSurface>, CaptureError>;

    /// Picker-friendly listing: failures are logged and show up as no sources.
    fn surfaces_or_empty(&self) -> Vec<CapturableSurface> {
        self.list_capturable_surfaces().unwrap_or_else(|e| {
            error!("Error getting capture sources: {}", e);
            Vec::new()
        })
    }
}
