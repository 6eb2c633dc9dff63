use serde::{Deserialize, Serialize};

use crate::entry::WordEntry;

/// What the renderer currently shows
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LookupState {
    #[default]
    Idle,
    Loading(String),
    Loaded(WordEntry),
    NotFound,
    InvalidInput,
}

impl LookupState {
    pub fn entry(&self) -> Option<&WordEntry> {
        match self {
            LookupState::Loaded(entry) => Some(entry),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, LookupState::Loading(_))
    }
}
