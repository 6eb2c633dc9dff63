use wordbook_types::{Definition, Meaning, Phonetic, WordEntry};

use crate::error::LookupError;
use crate::raw::{RawDefinition, RawEntry, RawMeaning, RawPhonetic};

/// Turn the service payload into a [`WordEntry`].
///
/// Only the first candidate is used. An empty payload, a blank headword, no
/// meanings, or a meaning without definitions is `NotFound`; missing optional
/// fields are not errors.
pub fn normalize(raw_entries: Vec<RawEntry>) -> Result<WordEntry, LookupError> {
    let raw = raw_entries.into_iter().next().ok_or(LookupError::NotFound)?;

    let word = raw
        .word
        .filter(|w| !w.trim().is_empty())
        .ok_or(LookupError::NotFound)?;

    if raw.meanings.is_empty() {
        tracing::debug!("Entry '{}' has no meanings", word);
        return Err(LookupError::NotFound);
    }

    let meanings = raw
        .meanings
        .into_iter()
        .map(normalize_meaning)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(WordEntry {
        word,
        phonetic: raw.phonetic,
        phonetics: raw.phonetics.into_iter().map(normalize_phonetic).collect(),
        meanings,
        source_urls: raw.source_urls,
    })
}

fn normalize_meaning(raw: RawMeaning) -> Result<Meaning, LookupError> {
    // a definition without text has nothing to show
    let definitions: Vec<Definition> = raw
        .definitions
        .into_iter()
        .filter_map(normalize_definition)
        .collect();

    if definitions.is_empty() {
        tracing::debug!("Meaning {:?} has no definitions", raw.part_of_speech);
        return Err(LookupError::NotFound);
    }

    Ok(Meaning {
        part_of_speech: raw.part_of_speech.unwrap_or_default(),
        definitions,
        synonyms: raw.synonyms,
    })
}

fn normalize_definition(raw: RawDefinition) -> Option<Definition> {
    Some(Definition {
        definition: raw.definition?,
        example: raw.example,
    })
}

fn normalize_phonetic(raw: RawPhonetic) -> Phonetic {
    Phonetic {
        text: raw.text,
        audio_url: raw.audio,
    }
}
