use serde::{Deserialize, Serialize};

/// Normalized result of one successful lookup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordEntry {
    /// Headword as returned by the service, never empty
    pub word: String,
    pub phonetic: Option<String>,
    pub phonetics: Vec<Phonetic>,
    /// At least one meaning, each with at least one definition
    pub meanings: Vec<Meaning>,
    pub source_urls: Vec<String>,
}

impl WordEntry {
    /// First reference link, shown under the entry
    pub fn primary_source(&self) -> Option<&str> {
        self.source_urls.first().map(String::as_str)
    }

    /// All synonyms across meanings, in display order
    pub fn synonyms(&self) -> impl Iterator<Item = &str> {
        self.meanings
            .iter()
            .flat_map(|m| m.synonyms.iter().map(String::as_str))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phonetic {
    pub text: Option<String>,
    pub audio_url: Option<String>,
}

/// One part-of-speech grouping
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meaning {
    pub part_of_speech: String,
    pub definitions: Vec<Definition>,
    pub synonyms: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Definition {
    pub definition: String,
    pub example: Option<String>,
}
