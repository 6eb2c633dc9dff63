use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use wordbook_types::{Font, LookupState, PreferenceError, Preferences, Theme};

use crate::audio::{AudioPlayer, AudioSink};
use crate::client::DictionarySource;
use crate::error::AudioError;
use crate::lookup::LookupStateMachine;
use crate::preferences::PreferenceStore;

/// Everything a renderer talks to: both state stores and the operations on them
pub struct Session {
    lookup: LookupStateMachine,
    preferences: PreferenceStore,
    audio: AudioPlayer,
}

impl Session {
    pub fn new(
        source: Arc<dyn DictionarySource>,
        sink: Arc<dyn AudioSink>,
        system_theme: Theme,
    ) -> Self {
        Self {
            lookup: LookupStateMachine::new(source),
            preferences: PreferenceStore::new(system_theme),
            audio: AudioPlayer::new(sink),
        }
    }

    pub fn lookup_state(&self) -> LookupState {
        self.lookup.current()
    }

    pub fn preferences(&self) -> Preferences {
        self.preferences.current()
    }

    pub fn subscribe_lookup(&self) -> watch::Receiver<LookupState> {
        self.lookup.subscribe()
    }

    pub fn subscribe_preferences(&self) -> watch::Receiver<Preferences> {
        self.preferences.subscribe()
    }

    pub fn submit(&self, raw: &str) -> Option<JoinHandle<()>> {
        self.lookup.submit(raw)
    }

    pub fn select_synonym(&self, word: &str) -> Option<JoinHandle<()>> {
        self.lookup.select_synonym(word)
    }

    /// Select the `index`-th synonym of the displayed entry, counting across meanings
    pub fn select_synonym_at(&self, index: usize) -> Option<JoinHandle<()>> {
        let word = self
            .lookup
            .current()
            .entry()
            .and_then(|entry| entry.synonyms().nth(index).map(str::to_string));

        match word {
            Some(word) => self.select_synonym(&word),
            None => {
                tracing::warn!("No synonym at position {}", index);
                None
            }
        }
    }

    pub fn edit_input(&self) {
        self.lookup.edit_input();
    }

    pub fn toggle_theme(&self) -> Theme {
        self.preferences.toggle_theme()
    }

    pub fn set_font(&self, font: Font) {
        self.preferences.set_font(font);
    }

    pub fn set_font_name(&self, name: &str) -> Result<Font, PreferenceError> {
        self.preferences.set_font_name(name)
    }

    /// Play the displayed entry's pronunciation; nothing displayed means no audio
    pub fn play(&self) -> Result<(), AudioError> {
        match self.lookup.current() {
            LookupState::Loaded(entry) => self.audio.play(&entry),
            _ => Err(AudioError::NoAudioAvailable),
        }
    }
}
