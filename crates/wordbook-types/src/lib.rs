pub mod entry;
pub mod preferences;
pub mod state;
pub mod types;

pub use entry::{Definition, Meaning, Phonetic, WordEntry};
pub use preferences::{Font, PreferenceError, Preferences, Theme};
pub use state::LookupState;
pub use types::{AppEvent, SynonymRef};
