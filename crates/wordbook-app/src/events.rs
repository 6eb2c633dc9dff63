use std::ops::ControlFlow;
use std::sync::Arc;

use kanal::AsyncReceiver;
use tokio_util::sync::CancellationToken;
use wordbook_types::AppEvent;

use crate::state::AppState;

pub mod play_audio;
pub mod preferences;
pub mod select_synonym;
pub mod text_input;

use play_audio::handle_play_audio;
use preferences::{handle_font_change, handle_theme_toggle};
use select_synonym::handle_synonym_selection;
use text_input::{handle_input_edit, handle_text_input};

/// App's main loop
pub async fn event_loop(
    state: Arc<AppState>,
    input_rx: AsyncReceiver<AppEvent>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    tracing::debug!("[EVENT_LOOP] Starting main loop, waiting for events");
    loop {
        let event = tokio::select! {
            event = input_rx.recv() => event?,
            _ = cancel.cancelled() => break,
        };

        tracing::debug!("[EVENT_LOOP] Event received: {:?}", event);
        if handle_events(&state, event).is_break() {
            tracing::info!("Quit requested");
            break;
        }
    }

    Ok(())
}

fn handle_events(state: &AppState, event: AppEvent) -> ControlFlow<()> {
    let session = &state.session;

    match event {
        AppEvent::TextInput(text) => handle_text_input(session, &text),
        AppEvent::InputEdited => handle_input_edit(session),
        AppEvent::SelectSynonym(synonym) => handle_synonym_selection(session, synonym),
        AppEvent::PlayAudio => handle_play_audio(session),
        AppEvent::ToggleTheme => handle_theme_toggle(session),
        AppEvent::SetFont(name) => handle_font_change(session, &name),
        AppEvent::Quit => return ControlFlow::Break(()),
    }

    ControlFlow::Continue(())
}
