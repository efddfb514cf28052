// File: src/toast/config.rs
// Purpose: Toast container configuration, placements and notification kinds

use serde::{Deserialize, Serialize};
use std::fmt;

/// Screen placement of the toast stack.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ToastPosition {
    TopLeft,
    TopCenter,
    #[default]
    TopRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
}

impl ToastPosition {
    pub const ALL: [ToastPosition; 6] = [
        ToastPosition::TopLeft,
        ToastPosition::TopCenter,
        ToastPosition::TopRight,
        ToastPosition::BottomLeft,
        ToastPosition::BottomCenter,
        ToastPosition::BottomRight,
    ];

    /// Case-insensitive kebab-case lookup. Unknown names fall back to top-right.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "top-left" => ToastPosition::TopLeft,
            "top-center" => ToastPosition::TopCenter,
            "top-right" => ToastPosition::TopRight,
            "bottom-left" => ToastPosition::BottomLeft,
            "bottom-center" => ToastPosition::BottomCenter,
            "bottom-right" => ToastPosition::BottomRight,
            _ => ToastPosition::default(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ToastPosition::TopLeft => "top-left",
            ToastPosition::TopCenter => "top-center",
            ToastPosition::TopRight => "top-right",
            ToastPosition::BottomLeft => "bottom-left",
            ToastPosition::BottomCenter => "bottom-center",
            ToastPosition::BottomRight => "bottom-right",
        }
    }

    /// Tailwind layout classes for the fixed container.
    pub fn classes(&self) -> &'static str {
        match self {
            ToastPosition::TopLeft => "top-4 left-4",
            ToastPosition::TopCenter => "top-4 left-1/2 transform -translate-x-1/2",
            ToastPosition::TopRight => "top-4 right-4",
            ToastPosition::BottomLeft => "bottom-4 left-4",
            ToastPosition::BottomCenter => "bottom-4 left-1/2 transform -translate-x-1/2",
            ToastPosition::BottomRight => "bottom-4 right-4",
        }
    }
}

impl From<&str> for ToastPosition {
    fn from(name: &str) -> Self {
        Self::from_name(name)
    }
}

impl From<String> for ToastPosition {
    fn from(name: String) -> Self {
        Self::from_name(&name)
    }
}

impl From<ToastPosition> for String {
    fn from(position: ToastPosition) -> Self {
        position.as_str().to_string()
    }
}

impl fmt::Display for ToastPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Visual variant of a toast.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ToastKind {
    Success,
    Error,
    Info,
    Warning,
    #[default]
    Default,
}

impl ToastKind {
    pub const ALL: [ToastKind; 5] = [
        ToastKind::Success,
        ToastKind::Error,
        ToastKind::Info,
        ToastKind::Warning,
        ToastKind::Default,
    ];

    /// Unknown or empty type names are treated as `default`, as the client does.
    pub fn from_name(name: &str) -> Self {
        match name {
            "success" => ToastKind::Success,
            "error" => ToastKind::Error,
            "info" => ToastKind::Info,
            "warning" => ToastKind::Warning,
            _ => ToastKind::Default,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ToastKind::Success => "success",
            ToastKind::Error => "error",
            ToastKind::Info => "info",
            ToastKind::Warning => "warning",
            ToastKind::Default => "default",
        }
    }

    fn color(&self) -> &'static str {
        match self {
            ToastKind::Success => "green",
            ToastKind::Error => "red",
            ToastKind::Info => "blue",
            ToastKind::Warning => "yellow",
            ToastKind::Default => "gray",
        }
    }

    /// Left-border accent and background gradient.
    pub fn accent_classes(&self) -> String {
        let color = self.color();
        format!(
            "border-l-4 border-{color}-500 bg-gradient-to-r from-{color}-50 to-white"
        )
    }

    pub fn progress_class(&self) -> String {
        format!("bg-{}-500", self.color())
    }

    pub fn icon_class(&self) -> String {
        format!("w-6 h-6 text-{}-500", self.color())
    }

    pub fn icon_path(&self) -> &'static str {
        use crate::icons;
        match self {
            ToastKind::Success => icons::CHECK_CIRCLE,
            ToastKind::Error => icons::X_CIRCLE,
            ToastKind::Info => icons::INFO_CIRCLE,
            ToastKind::Warning => icons::WARNING,
            ToastKind::Default => icons::DOTS_CIRCLE,
        }
    }
}

impl fmt::Display for ToastKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for ToastKind {
    fn from(name: String) -> Self {
        Self::from_name(&name)
    }
}

impl From<ToastKind> for String {
    fn from(kind: ToastKind) -> Self {
        kind.as_str().to_string()
    }
}

/// Toast container configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToastConfig {
    pub position: ToastPosition,

    /// Tailwind max-width class of the stack
    pub max_width_class: String,

    pub z_index_class: String,

    /// Play `sound` URLs attached to toasts
    pub enable_sound: bool,

    /// Used when a toast has no (or a zero) duration
    pub default_duration_ms: u64,

    /// Extra classes for the container
    pub css_class: Option<String>,
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            position: ToastPosition::TopRight,
            max_width_class: "max-w-sm".to_string(),
            z_index_class: "z-50".to_string(),
            enable_sound: false,
            default_duration_ms: 3000,
            css_class: None,
        }
    }
}

impl ToastConfig {
    pub fn position(mut self, position: ToastPosition) -> Self {
        self.position = position;
        self
    }

    pub fn enable_sound(mut self, enable: bool) -> Self {
        self.enable_sound = enable;
        self
    }

    pub fn default_duration_ms(mut self, duration_ms: u64) -> Self {
        self.default_duration_ms = duration_ms;
        self
    }

    /// Full class list of the fixed container.
    pub fn container_classes(&self) -> String {
        let mut classes = vec![
            "fixed",
            self.position.classes(),
            self.z_index_class.as_str(),
            "flex",
            "flex-col",
            "gap-3",
            "w-full",
            self.max_width_class.as_str(),
        ];
        if let Some(extra) = self.css_class.as_deref().filter(|c| !c.is_empty()) {
            classes.push(extra);
        }
        classes.join(" ")
    }
}
