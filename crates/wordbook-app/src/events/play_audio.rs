use wordbook_core::{AudioError, Session};

pub fn handle_play_audio(session: &Session) {
    match session.play() {
        Ok(()) => tracing::debug!("Pronunciation playback started"),
        // a play press with nothing to play is a no-op
        Err(AudioError::NoAudioAvailable) => tracing::debug!("No audio for current entry"),
    }
}
