use std::sync::Arc;

use kanal::{AsyncReceiver, AsyncSender};
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;
use wordbook_types::AppEvent;

use crate::events::event_loop;
use crate::io::spawn_input_reader;
use crate::state::AppState;
use crate::ui::ui_loop;

/// Centralized channel management
pub struct ChannelSet {
    pub input_to_app: (AsyncSender<AppEvent>, AsyncReceiver<AppEvent>),
}

impl ChannelSet {
    pub fn new() -> Self {
        Self {
            input_to_app: kanal::bounded_async(64),
        }
    }
}

impl Default for ChannelSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Application controller for task spawning and lifecycle
pub struct AppController {
    channels: ChannelSet,
    state: Arc<AppState>,
    cancel_token: CancellationToken,
}

impl AppController {
    pub fn new(state: Arc<AppState>) -> Self {
        Self {
            channels: ChannelSet::new(),
            state,
            cancel_token: CancellationToken::new(),
        }
    }

    pub fn spawn_tasks(&self) -> JoinSet<anyhow::Result<()>> {
        let mut tasks = JoinSet::new();

        // Event loop
        tasks.spawn(event_loop(
            self.state.clone(),
            self.channels.input_to_app.1.clone(),
            self.cancel_token.child_token(),
        ));

        // Renderer
        tasks.spawn(ui_loop(
            self.state.session.subscribe_lookup(),
            self.state.session.subscribe_preferences(),
            self.cancel_token.child_token(),
        ));

        // Stdin reader, detached: it blocks on reads and exits with the process
        spawn_input_reader(self.channels.input_to_app.0.clone_sync());

        tasks
    }

    /// Sender for events that don't come from stdin, e.g. a word given on the command line
    pub fn event_sender(&self) -> AsyncSender<AppEvent> {
        self.channels.input_to_app.0.clone()
    }

    pub fn shutdown(&self) {
        self.cancel_token.cancel();
    }
}
