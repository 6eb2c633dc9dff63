use std::sync::Arc;

use wordbook_types::WordEntry;

use crate::error::{AudioError, PlaybackError};

/// Playback backend. `start` must return as soon as playback is underway.
pub trait AudioSink: Send + Sync {
    fn start(&self, url: &str) -> Result<(), PlaybackError>;
}

#[derive(Clone)]
pub struct AudioPlayer {
    sink: Arc<dyn AudioSink>,
}

impl AudioPlayer {
    pub fn new(sink: Arc<dyn AudioSink>) -> Self {
        Self { sink }
    }

    /// Play the entry's pronunciation, fire-and-forget.
    ///
    /// Sink failures are logged only; the caller just learns whether a clip existed.
    pub fn play(&self, entry: &WordEntry) -> Result<(), AudioError> {
        let url = select_clip(entry).ok_or(AudioError::NoAudioAvailable)?;
        let url = absolute_clip_url(url);

        tracing::debug!("Playing pronunciation of '{}': {}", entry.word, url);
        if let Err(e) = self.sink.start(&url) {
            tracing::warn!("Audio playback failed: {}", e);
        }

        Ok(())
    }
}

/// First phonetic with a non-empty audio URL, in entry order
pub fn select_clip(entry: &WordEntry) -> Option<&str> {
    entry
        .phonetics
        .iter()
        .filter_map(|p| p.audio_url.as_deref())
        .find(|url| !url.trim().is_empty())
}

// older payloads carry scheme-relative links like //ssl.gstatic.com/...
fn absolute_clip_url(url: &str) -> String {
    let url = url.trim();
    match url.strip_prefix("//") {
        Some(rest) => format!("https://{rest}"),
        None => url.to_string(),
    }
}
