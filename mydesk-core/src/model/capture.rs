use serde::{Deserialize, Serialize};

const SCREEN_PREFIX: &str = "screen:";

/// A screen or window the host can share.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CapturableSurface {
    pub id: String,
    pub display_name: String,
    pub is_screen: bool,
    /// Encoded preview image (data URL).
    pub thumbnail: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_icon: Option<String>,
}

impl CapturableSurface {
    pub fn new(id: impl Into<String>, display_name: impl Into<String>, thumbnail: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            is_screen: id.starts_with(SCREEN_PREFIX),
            id,
            display_name: display_name.into(),
            thumbnail: thumbnail.into(),
            app_icon: None,
        }
    }

    pub fn with_app_icon(mut self, icon: impl Into<String>) -> Self {
        self.app_icon = Some(icon.into());
        self
    }
}
