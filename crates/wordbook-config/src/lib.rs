use std::env;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use self::audio::AudioConfig;
use self::dictionary::DictionaryConfig;
use self::ui::UiConfig;

pub mod audio;
pub mod dictionary;
pub mod ui;

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub dictionary: DictionaryConfig,
    pub audio: AudioConfig,
    pub ui: UiConfig,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("Invalid config file {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },
}

impl Config {
    /// Defaults with environment overrides
    pub fn new() -> Self {
        Self::default().with_overrides(|key| env::var(key).ok())
    }

    /// Load a JSON config file, fields missing from the file keep their defaults
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let data = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;

        serde_json::from_str(&data).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup("WORDBOOK_API_URL") {
            self.dictionary.api_url = url;
        }

        if let Some(raw) = lookup("WORDBOOK_TIMEOUT_SECONDS") {
            match raw.parse() {
                Ok(secs) => self.dictionary.timeout_seconds = secs,
                Err(_) => tracing::warn!("Ignoring invalid WORDBOOK_TIMEOUT_SECONDS: {raw}"),
            }
        }

        if let Some(player) = lookup("WORDBOOK_AUDIO_PLAYER") {
            self.audio.player = player;
        }

        self
    }
}
