use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::watch;
use tokio::task::JoinHandle;
use wordbook_types::{LookupState, WordEntry};

use crate::client::DictionarySource;
use crate::error::LookupError;
use crate::normalize::normalize;
use crate::validate::{Validation, validate};

/// Owner of the current [`LookupState`].
///
/// Every submission gets a sequence number; a finished lookup may only replace
/// the state while its number is still the latest. Older responses are dropped,
/// not aborted.
#[derive(Clone)]
pub struct LookupStateMachine {
    inner: Arc<Inner>,
}

struct Inner {
    source: Arc<dyn DictionarySource>,
    state: watch::Sender<LookupState>,
    latest: AtomicU64,
}

impl LookupStateMachine {
    pub fn new(source: Arc<dyn DictionarySource>) -> Self {
        let (state, _) = watch::channel(LookupState::Idle);

        Self {
            inner: Arc::new(Inner {
                source,
                state,
                latest: AtomicU64::new(0),
            }),
        }
    }

    /// Snapshot of the current state
    pub fn current(&self) -> LookupState {
        self.inner.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<LookupState> {
        self.inner.state.subscribe()
    }

    /// Validate and start a lookup. Must be called inside a tokio runtime.
    ///
    /// Returns the handle of the spawned lookup, or `None` when the input was
    /// rejected and the state moved to `InvalidInput`.
    pub fn submit(&self, raw: &str) -> Option<JoinHandle<()>> {
        match validate(raw) {
            Validation::Empty => {
                tracing::debug!("Rejected empty query");
                // also retires any lookup still in flight
                self.publish(LookupState::InvalidInput);
                None
            }
            Validation::Valid(query) => Some(self.start(query)),
        }
    }

    /// Look up a synonym of the displayed entry, same as submitting it
    pub fn select_synonym(&self, word: &str) -> Option<JoinHandle<()>> {
        if word.trim().is_empty() {
            tracing::warn!("Ignoring blank synonym");
            return None;
        }
        self.submit(word)
    }

    /// The text field changed: clears a validation error, nothing else
    pub fn edit_input(&self) {
        self.inner.state.send_if_modified(|state| {
            if *state == LookupState::InvalidInput {
                *state = LookupState::Idle;
                true
            } else {
                false
            }
        });
    }

    /// Bump the sequence and replace the state under one lock, so a finishing
    /// lookup can't land in between
    fn publish(&self, next: LookupState) -> u64 {
        let mut seq = 0;
        self.inner.state.send_modify(|state| {
            seq = self.inner.latest.fetch_add(1, Ordering::SeqCst) + 1;
            *state = next;
        });
        seq
    }

    fn start(&self, query: String) -> JoinHandle<()> {
        let seq = self.publish(LookupState::Loading(query.clone()));
        tracing::info!("Looking up '{}' (#{})", query, seq);

        let inner = Arc::clone(&self.inner);
        tokio::spawn(async move {
            let outcome = match inner.source.lookup(&query).await {
                Ok(raw) => normalize(raw),
                Err(e) => Err(e),
            };
            inner.finish(seq, &query, outcome);
        })
    }
}

impl Inner {
    fn finish(&self, seq: u64, query: &str, outcome: Result<WordEntry, LookupError>) {
        let next = match outcome {
            Ok(entry) => {
                tracing::info!(
                    "Found '{}' with {} meaning(s)",
                    entry.word,
                    entry.meanings.len()
                );
                LookupState::Loaded(entry)
            }
            Err(LookupError::Network(reason)) => {
                tracing::warn!("Lookup of '{}' failed, service unreachable: {}", query, reason);
                LookupState::NotFound
            }
            Err(LookupError::NotFound) => {
                tracing::info!("No definitions found for '{}'", query);
                LookupState::NotFound
            }
        };

        let applied = self.state.send_if_modified(|state| {
            if self.latest.load(Ordering::SeqCst) != seq {
                return false;
            }
            *state = next;
            true
        });

        if !applied {
            tracing::debug!("Discarded stale result for '{}' (#{})", query, seq);
        }
    }
}
