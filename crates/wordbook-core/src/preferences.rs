use tokio::sync::watch;
use wordbook_types::{Font, PreferenceError, Preferences, Theme};

/// Owner of the user's theme and font
pub struct PreferenceStore {
    prefs: watch::Sender<Preferences>,
}

impl PreferenceStore {
    /// `system_theme` is read once at startup, later platform changes are not followed
    pub fn new(system_theme: Theme) -> Self {
        let (prefs, _) = watch::channel(Preferences::seeded(system_theme));
        Self { prefs }
    }

    pub fn current(&self) -> Preferences {
        *self.prefs.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<Preferences> {
        self.prefs.subscribe()
    }

    pub fn toggle_theme(&self) -> Theme {
        let mut theme = Theme::Light;
        self.prefs.send_modify(|prefs| {
            prefs.theme = prefs.theme.toggled();
            theme = prefs.theme;
        });
        tracing::debug!("Theme set to {}", theme);
        theme
    }

    pub fn set_font(&self, font: Font) {
        self.prefs.send_if_modified(|prefs| {
            let changed = prefs.font != font;
            prefs.font = font;
            changed
        });
        tracing::debug!("Font set to {}", font);
    }

    /// Parse and apply a font name, unknown names leave preferences untouched
    pub fn set_font_name(&self, name: &str) -> Result<Font, PreferenceError> {
        let font = name.parse()?;
        self.set_font(font);
        Ok(font)
    }
}
