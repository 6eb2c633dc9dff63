use wordbook_core::Session;

pub fn handle_text_input(session: &Session, text: &str) {
    tracing::debug!("TextInput received: {} chars", text.len());

    // lookup runs in the background, its result arrives through the state watch
    if session.submit(text).is_none() {
        tracing::debug!("Input rejected as empty");
    }
}

pub fn handle_input_edit(session: &Session) {
    session.edit_input();
}
