/// Failure of a single lookup. Both variants end up as `LookupState::NotFound`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("No definitions found")]
    NotFound,
}

impl From<reqwest::Error> for LookupError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            LookupError::Network(format!("request timed out: {err}"))
        } else {
            LookupError::Network(err.to_string())
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Invalid base URL {url}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("Failed to build HTTP client: {0}")]
    Build(#[from] reqwest::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AudioError {
    #[error("No pronunciation audio available")]
    NoAudioAvailable,
}

#[derive(Debug, thiserror::Error)]
pub enum PlaybackError {
    #[error("Failed to start {player}: {source}")]
    Spawn {
        player: String,
        source: std::io::Error,
    },

    #[error("Playback disabled")]
    Disabled,
}
