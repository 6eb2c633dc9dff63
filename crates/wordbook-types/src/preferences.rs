use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Font {
    #[serde(rename = "sans")]
    SansSerif,
    #[default]
    Serif,
    Mono,
}

/// Styling hints for the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    pub theme: Theme,
    pub font: Font,
}

impl Preferences {
    /// Theme comes from the platform, font always starts at the default
    pub fn seeded(theme: Theme) -> Self {
        Self {
            theme,
            font: Font::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PreferenceError {
    #[error("Unknown font: {0} (expected sans, serif or mono)")]
    UnknownFont(String),

    #[error("Unknown theme: {0} (expected light or dark)")]
    UnknownTheme(String),
}

impl FromStr for Font {
    type Err = PreferenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sans" | "sans-serif" | "sansserif" => Ok(Font::SansSerif),
            "serif" => Ok(Font::Serif),
            "mono" | "monospace" => Ok(Font::Mono),
            _ => Err(PreferenceError::UnknownFont(s.to_string())),
        }
    }
}

impl FromStr for Theme {
    type Err = PreferenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            _ => Err(PreferenceError::UnknownTheme(s.to_string())),
        }
    }
}

impl fmt::Display for Font {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Font::SansSerif => "Sans Serif",
            Font::Serif => "Serif",
            Font::Mono => "Mono",
        };
        f.write_str(name)
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Light => f.write_str("light"),
            Theme::Dark => f.write_str("dark"),
        }
    }
}
