use std::time::Duration;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Default,
    Success,
    Error,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Position {
    TopLeft,
    TopCenter,
    #[default]
    TopRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
}

impl Position {
    /// Tailwind classes anchoring the toast stack.
    pub fn classes(&self) -> &'static str {
        match self {
            Position::TopLeft => "top-4 left-4 items-start",
            Position::TopCenter => "top-4 inset-x-0 items-center",
            Position::TopRight => "top-4 right-4 items-end",
            Position::BottomLeft => "bottom-4 left-4 items-start",
            Position::BottomCenter => "bottom-4 inset-x-0 items-center",
            Position::BottomRight => "bottom-4 right-4 items-end",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToastStyle {
    pub background: String,
    pub color: String,
}

impl ToastStyle {
    pub fn css(&self) -> String {
        format!("background: {}; color: {};", self.background, self.color)
    }
}

/// Icon colors: primary fills the badge, secondary draws the glyph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconTheme {
    pub primary: String,
    pub secondary: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeverityOptions {
    pub duration: Duration,
    pub icon_theme: IconTheme,
}

/// Display options for the notification host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToasterConfig {
    pub position: Position,
    pub duration: Duration,
    pub style: ToastStyle,
    pub success: SeverityOptions,
    pub error: SeverityOptions,
}

impl Default for ToasterConfig {
    fn default() -> Self {
        Self {
            position: Position::TopRight,
            duration: Duration::from_millis(4000),
            style: ToastStyle {
                background: "#363636".into(),
                color: "#fff".into(),
            },
            success: SeverityOptions {
                duration: Duration::from_millis(3000),
                icon_theme: IconTheme {
                    primary: "#10b981".into(),
                    secondary: "#fff".into(),
                },
            },
            error: SeverityOptions {
                duration: Duration::from_millis(5000),
                icon_theme: IconTheme {
                    primary: "#ef4444".into(),
                    secondary: "#fff".into(),
                },
            },
        }
    }
}

impl ToasterConfig {
    pub fn duration_for(&self, severity: Severity) -> Duration {
        match severity {
            Severity::Default => self.duration,
            Severity::Success => self.success.duration,
            Severity::Error => self.error.duration,
        }
    }

    pub fn icon_for(&self, severity: Severity) -> Option<&IconTheme> {
        match severity {
            Severity::Default => None,
            Severity::Success => Some(&self.success.icon_theme),
            Severity::Error => Some(&self.error.icon_theme),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn durations_per_severity() {
        let config = ToasterConfig::default();
        assert_eq!(config.duration_for(Severity::Default), Duration::from_secs(4));
        assert_eq!(config.duration_for(Severity::Success), Duration::from_secs(3));
        assert_eq!(config.duration_for(Severity::Error), Duration::from_secs(5));
    }

    #[test]
    fn icons_only_for_success_and_error() {
        let config = ToasterConfig::default();
        assert_eq!(config.icon_for(Severity::Default), None);
        assert_eq!(config.icon_for(Severity::Success).unwrap().primary, "#10b981");
        assert_eq!(config.icon_for(Severity::Error).unwrap().primary, "#ef4444");
    }

    #[test]
    fn base_style() {
        let config = ToasterConfig::default();
        assert_eq!(config.position, Position::TopRight);
        assert_eq!(config.style.css(), "background: #363636; color: #fff;");
    }
}
