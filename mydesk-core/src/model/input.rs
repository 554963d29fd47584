use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub enum MouseButton {
    #[default]
    Left,
    Right,
}

/// Browser button index: 2 is the secondary button, everything else maps to left.
impl From<u8> for MouseButton {
    fn from(index: u8) -> Self {
        match index {
            2 => MouseButton::Right,
            _ => MouseButton::Left,
        }
    }
}

impl From<MouseButton> for u8 {
    fn from(button: MouseButton) -> Self {
        match button {
            MouseButton::Left => 0,
            MouseButton::Right => 2,
        }
    }
}

/// Normalized pointer action sent by a viewer, in host screen coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum MouseAction {
    Move {
        x: f64,
        y: f64,
    },
    Click {
        x: f64,
        y: f64,
        #[serde(default)]
        button: MouseButton,
    },
    #[serde(rename = "dblclick")]
    DoubleClick { x: f64, y: f64 },
    #[serde(rename = "mousedown")]
    Down {
        x: f64,
        y: f64,
        #[serde(default)]
        button: MouseButton,
    },
    #[serde(rename = "mouseup")]
    Up {
        #[serde(default)]
        button: MouseButton,
    },
    /// Positive deltas scroll down, negative up.
    Scroll { delta: f64 },
}

impl MouseAction {
    /// Target pixel for actions that reposition the cursor first.
    pub fn position(&self) -> Option<(i32, i32)> {
        match *self {
            MouseAction::Move { x, y }
            | MouseAction::Click { x, y, .. }
            | MouseAction::DoubleClick { x, y }
            | MouseAction::Down { x, y, .. } => Some((x.round() as i32, y.round() as i32)),
            MouseAction::Up { .. } | MouseAction::Scroll { .. } => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyboardActionKind {
    KeyDown,
    KeyUp,
}

/// Normalized key event, carrying the DOM `key` and `code` values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyboardAction {
    #[serde(rename = "type")]
    pub kind: KeyboardActionKind,
    pub key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl KeyboardAction {
    pub fn key(&self) -> Key {
        Key::parse(&self.key)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamedKey {
    Enter,
    Backspace,
    Tab,
    Escape,
    Space,
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Delete,
    Home,
    End,
    PageUp,
    PageDown,
    Control,
    Shift,
    Alt,
    Meta,
    /// Function key `F1` through `F12`.
    F(u8),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    Named(NamedKey),
    Char(char),
    /// A DOM key name with no mapping; injectors skip these.
    Unknown(String),
}

impl Key {
    pub fn parse(name: &str) -> Self {
        let named = match name {
            "Enter" => Some(NamedKey::Enter),
            "Backspace" => Some(NamedKey::Backspace),
            "Tab" => Some(NamedKey::Tab),
            "Escape" => Some(NamedKey::Escape),
            "Space" => Some(NamedKey::Space),
            "ArrowUp" => Some(NamedKey::ArrowUp),
            "ArrowDown" => Some(NamedKey::ArrowDown),
            "ArrowLeft" => Some(NamedKey::ArrowLeft),
            "ArrowRight" => Some(NamedKey::ArrowRight),
            "Delete" => Some(NamedKey::Delete),
            "Home" => Some(NamedKey::Home),
            "End" => Some(NamedKey::End),
            "PageUp" => Some(NamedKey::PageUp),
            "PageDown" => Some(NamedKey::PageDown),
            "Control" => Some(NamedKey::Control),
            "Shift" => Some(NamedKey::Shift),
            "Alt" => Some(NamedKey::Alt),
            "Meta" => Some(NamedKey::Meta),
            _ => name
                .strip_prefix('F')
                .and_then(|n| n.parse::<u8>().ok())
                .filter(|n| (1..=12).contains(n))
                .map(NamedKey::F),
        };

        if let Some(named) = named {
            return Key::Named(named);
        }

        let mut chars = name.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Key::Char(c),
            _ => Key::Unknown(name.to_string()),
        }
    }
}
