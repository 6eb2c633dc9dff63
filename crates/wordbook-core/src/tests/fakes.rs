use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use serde_json::json;
use tokio::sync::oneshot;

use crate::audio::AudioSink;
use crate::client::DictionarySource;
use crate::error::{LookupError, PlaybackError};
use crate::raw::RawEntry;

pub type Outcome = Result<Vec<RawEntry>, LookupError>;

/// Dictionary double. Words answer from `known`; gated words wait until the test releases them.
#[derive(Default)]
pub struct FakeDictionary {
    known: HashMap<String, Vec<RawEntry>>,
    gates: Mutex<HashMap<String, oneshot::Receiver<Outcome>>>,
    calls: AtomicUsize,
    queries: Mutex<Vec<String>>,
}

impl FakeDictionary {
    pub fn with_words(words: &[&str]) -> Self {
        Self {
            known: words.iter().map(|w| (w.to_string(), entry_for(w))).collect(),
            ..Self::default()
        }
    }

    /// Hold back the answer for `word` until the returned sender fires
    pub fn gate(&self, word: &str) -> oneshot::Sender<Outcome> {
        let (tx, rx) = oneshot::channel();
        self.gates.lock().unwrap().insert(word.to_string(), rx);
        tx
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl DictionarySource for FakeDictionary {
    async fn lookup(&self, query: &str) -> Result<Vec<RawEntry>, LookupError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.queries.lock().unwrap().push(query.to_string());

        let gate = self.gates.lock().unwrap().remove(query);
        if let Some(rx) = gate {
            return rx
                .await
                .unwrap_or_else(|_| Err(LookupError::Network("gate dropped".to_string())));
        }

        self.known.get(query).cloned().ok_or(LookupError::NotFound)
    }
}

#[derive(Default)]
pub struct RecordingSink {
    pub started: Mutex<Vec<String>>,
}

impl AudioSink for RecordingSink {
    fn start(&self, url: &str) -> Result<(), PlaybackError> {
        self.started.lock().unwrap().push(url.to_string());
        Ok(())
    }
}

/// Service-shaped payload for `word`, with synonyms and one audio clip
pub fn entry_for(word: &str) -> Vec<RawEntry> {
    serde_json::from_value(json!([{
        "word": word,
        "phonetic": format!("/{word}/"),
        "phonetics": [
            {"text": format!("/{word}/")},
            {"text": format!("/{word}/"), "audio": format!("https://example.org/{word}.mp3")}
        ],
        "meanings": [
            {
                "partOfSpeech": "noun",
                "definitions": [
                    {"definition": format!("The first sense of {word}."), "example": format!("A {word} here.")},
                    {"definition": format!("The second sense of {word}.")}
                ],
                "synonyms": [format!("{word}-noun-syn")]
            },
            {
                "partOfSpeech": "verb",
                "definitions": [{"definition": format!("To {word}.")}],
                "synonyms": [format!("{word}-verb-syn")]
            }
        ],
        "sourceUrls": [format!("https://en.wiktionary.org/wiki/{word}")]
    }]))
    .unwrap()
}
