use unicode_normalization::UnicodeNormalization;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation {
    Valid(String),
    Empty,
}

/// Check a raw text-field value before any network call.
///
/// The returned query is trimmed and NFC-normalized; the raw text is left as typed.
pub fn validate(raw: &str) -> Validation {
    let trimmed = raw.trim();

    if trimmed.is_empty() {
        return Validation::Empty;
    }

    Validation::Valid(trimmed.nfc().collect())
}
