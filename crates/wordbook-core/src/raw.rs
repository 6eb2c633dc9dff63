//! Payload shapes returned by the dictionary service.
//!
//! Every field is optional here; [`crate::normalize`] decides what is required.

use serde::{Deserialize, Deserializer};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawEntry {
    #[serde(default)]
    pub word: Option<String>,
    #[serde(default)]
    pub phonetic: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub phonetics: Vec<RawPhonetic>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub meanings: Vec<RawMeaning>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub source_urls: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawPhonetic {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default, alias = "audioUrl")]
    pub audio: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawMeaning {
    #[serde(default)]
    pub part_of_speech: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub definitions: Vec<RawDefinition>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub synonyms: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawDefinition {
    #[serde(default)]
    pub definition: Option<String>,
    #[serde(default)]
    pub example: Option<String>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_service_shape() {
        let json = r#"[{
            "word": "hello",
            "phonetic": "həˈləʊ",
            "phonetics": [
                {"text": "həˈləʊ", "audio": "//ssl.gstatic.com/dictionary/static/sounds/20200429/hello--_gb_1.mp3"},
                {"text": "hɛˈləʊ"}
            ],
            "origin": "early 19th century",
            "meanings": [{
                "partOfSpeech": "exclamation",
                "definitions": [{
                    "definition": "used as a greeting",
                    "example": "hello there, Katie!",
                    "synonyms": [],
                    "antonyms": []
                }],
                "synonyms": ["hi"],
                "antonyms": []
            }],
            "license": {"name": "CC BY-SA 3.0", "url": "https://creativecommons.org/licenses/by-sa/3.0"},
            "sourceUrls": ["https://en.wiktionary.org/wiki/hello"]
        }]"#;

        let entries: Vec<RawEntry> = serde_json::from_str(json).unwrap();
        assert_eq!(entries.len(), 1);

        let entry = &entries[0];
        assert_eq!(entry.word.as_deref(), Some("hello"));
        assert_eq!(entry.phonetics.len(), 2);
        assert!(entry.phonetics[1].audio.is_none());
        assert_eq!(entry.meanings[0].part_of_speech.as_deref(), Some("exclamation"));
        assert_eq!(entry.meanings[0].synonyms, ["hi"]);
        assert_eq!(entry.source_urls, ["https://en.wiktionary.org/wiki/hello"]);
    }

    #[test]
    fn nulls_and_missing_sequences_become_empty() {
        let json = r#"[{"word": "bare", "phonetics": null, "meanings": [{"definitions": null}]}]"#;

        let entries: Vec<RawEntry> = serde_json::from_str(json).unwrap();
        let entry = &entries[0];
        assert!(entry.phonetic.is_none());
        assert!(entry.phonetics.is_empty());
        assert!(entry.source_urls.is_empty());
        assert!(entry.meanings[0].definitions.is_empty());
        assert!(entry.meanings[0].synonyms.is_empty());
    }

    #[test]
    fn accepts_audio_url_key() {
        let phonetic: RawPhonetic =
            serde_json::from_str(r#"{"audioUrl": "https://example.org/a.mp3"}"#).unwrap();
        assert_eq!(phonetic.audio.as_deref(), Some("https://example.org/a.mp3"));
    }
}
