pub mod audio;
pub mod client;
pub mod error;
pub mod lookup;
pub mod normalize;
pub mod preferences;
pub mod raw;
pub mod session;
pub mod validate;

#[cfg(test)]
mod tests;

pub use audio::{AudioPlayer, AudioSink};
pub use client::{DictionaryClient, DictionarySource};
pub use error::{AudioError, ClientError, LookupError, PlaybackError};
pub use lookup::LookupStateMachine;
pub use preferences::PreferenceStore;
pub use session::Session;
