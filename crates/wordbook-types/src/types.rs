#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// Text field submitted
    TextInput(String),
    /// Text field changed without submitting
    InputEdited,
    SelectSynonym(SynonymRef),
    PlayAudio,
    ToggleTheme,
    SetFont(String),
    Quit,
}

/// A synonym picked either by its text or by its position in the current entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SynonymRef {
    Word(String),
    Index(usize),
}
