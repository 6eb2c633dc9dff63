use wordbook_core::Session;

pub fn handle_theme_toggle(session: &Session) {
    let theme = session.toggle_theme();
    tracing::debug!("Theme toggled to {}", theme);
}

pub fn handle_font_change(session: &Session, name: &str) {
    match session.set_font_name(name) {
        Ok(font) => tracing::debug!("Font changed to {}", font),
        Err(e) => {
            tracing::warn!("{}", e);
            println!("{e}");
        }
    }
}
