use std::env;

use wordbook_types::Theme;

/// Color scheme to seed preferences with, read once at startup.
///
/// A configured scheme wins; otherwise the terminal's `COLORFGBG` hint decides.
pub fn system_theme(configured: Option<Theme>) -> Theme {
    configured
        .or_else(|| env::var("COLORFGBG").ok().and_then(|v| theme_from_colorfgbg(&v)))
        .unwrap_or(Theme::Light)
}

/// `COLORFGBG` is "fg;bg" (sometimes "fg;default;bg"); low ANSI indexes are dark backgrounds
fn theme_from_colorfgbg(value: &str) -> Option<Theme> {
    let background: u8 = value.rsplit(';').next()?.trim().parse().ok()?;

    match background {
        0..=6 | 8 => Some(Theme::Dark),
        _ => Some(Theme::Light),
    }
}
