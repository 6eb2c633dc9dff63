use std::time::Duration;

use serde::{Deserialize, Serialize};

fn default_api_url() -> String {
    "https://api.dictionaryapi.dev/api/v2/entries/en".to_string()
}

fn default_timeout_seconds() -> u64 {
    10
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct DictionaryConfig {
    /// Base endpoint, the query word is appended as the last path segment
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

impl DictionaryConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds.max(1))
    }
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}
