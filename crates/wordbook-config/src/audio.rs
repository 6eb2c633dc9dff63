use serde::{Deserialize, Serialize};

fn default_enabled() -> bool {
    true
}

fn default_player() -> String {
    "mpv".to_string()
}

fn default_args() -> Vec<String> {
    vec!["--no-video".to_string(), "--really-quiet".to_string()]
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct AudioConfig {
    /// Enable pronunciation playback
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// External player program, receives the clip URL as its last argument
    #[serde(default = "default_player")]
    pub player: String,
    #[serde(default = "default_args")]
    pub args: Vec<String>,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            player: default_player(),
            args: default_args(),
        }
    }
}
