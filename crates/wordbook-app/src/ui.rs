use std::fmt::Write;

use tokio::sync::watch;
use tokio_util::sync::CancellationToken;
use wordbook_types::{Font, LookupState, Preferences, Theme, WordEntry};

const RULE: &str = "────────────────────────────────";

/// Terminal renderer: redraws whenever the lookup state or the preferences change
pub async fn ui_loop(
    mut lookup_rx: watch::Receiver<LookupState>,
    mut prefs_rx: watch::Receiver<Preferences>,
    cancel: CancellationToken,
) -> anyhow::Result<()> {
    println!("{}", render_header(&prefs_rx.borrow_and_update()));
    println!("{}", crate::io::HELP);

    loop {
        tokio::select! {
            changed = lookup_rx.changed() => {
                if changed.is_err() {
                    break;
                }
                let state = lookup_rx.borrow_and_update().clone();
                let prefs = *prefs_rx.borrow();
                print!("{}", render_state(&state, &prefs));
            }
            changed = prefs_rx.changed() => {
                if changed.is_err() {
                    break;
                }
                let prefs = *prefs_rx.borrow_and_update();
                println!("{}", render_header(&prefs));
            }
            _ = cancel.cancelled() => break,
        }
    }

    tracing::debug!("Renderer stopping");
    Ok(())
}

pub fn render_header(prefs: &Preferences) -> String {
    let mode = match prefs.theme {
        Theme::Light => "light",
        Theme::Dark => "dark",
    };
    format!("wordbook  |  {}  |  {} mode", prefs.font, mode)
}

pub fn render_state(state: &LookupState, prefs: &Preferences) -> String {
    match state {
        LookupState::Idle => String::new(),
        LookupState::Loading(query) => format!("Looking up \"{query}\"...\n"),
        LookupState::InvalidInput => "Whoops, can't be empty...\n".to_string(),
        LookupState::NotFound => "\n:(\nNo Definitions Found\nSorry, we couldn't find definitions for the word you were looking for.\n\n".to_string(),
        LookupState::Loaded(entry) => render_entry(entry, prefs),
    }
}

fn render_entry(entry: &WordEntry, prefs: &Preferences) -> String {
    let accent = Accent::for_theme(prefs.theme);
    let mut out = String::new();

    let _ = writeln!(out);
    let _ = writeln!(out, "{}", accent.strong(&headword(&entry.word, prefs.font)));
    if let Some(phonetic) = &entry.phonetic {
        let _ = writeln!(out, "{}", accent.paint(phonetic));
    }
    if entry.phonetics.iter().any(|p| p.audio_url.as_deref().is_some_and(|u| !u.trim().is_empty())) {
        let _ = writeln!(out, "[:play to listen]");
    }

    let mut synonym_number = 0;
    for meaning in &entry.meanings {
        let _ = writeln!(out);
        let _ = writeln!(out, "{} {}", accent.strong(&meaning.part_of_speech), RULE);
        let _ = writeln!(out, "Meaning");
        for definition in &meaning.definitions {
            let _ = writeln!(out, "  {} {}", accent.paint("•"), definition.definition);
            if let Some(example) = &definition.example {
                let _ = writeln!(out, "    \"{example}\"");
            }
        }

        if !meaning.synonyms.is_empty() {
            let listed: Vec<String> = meaning
                .synonyms
                .iter()
                .map(|s| {
                    synonym_number += 1;
                    format!("[{synonym_number}] {}", accent.paint(s))
                })
                .collect();
            let _ = writeln!(out, "Synonyms  {}", listed.join("  "));
        }
    }

    if let Some(source) = entry.primary_source() {
        let _ = writeln!(out);
        let _ = writeln!(out, "{RULE}");
        let _ = writeln!(out, "Source  {source}");
    }
    let _ = writeln!(out);

    out
}

// a terminal can't switch typefaces, mono is the one font we can hint at
fn headword(word: &str, font: Font) -> String {
    match font {
        Font::Mono => format!("`{word}`"),
        Font::SansSerif | Font::Serif => word.to_string(),
    }
}

struct Accent {
    color: &'static str,
}

impl Accent {
    fn for_theme(theme: Theme) -> Self {
        let color = match theme {
            Theme::Light => "\x1b[35m",
            Theme::Dark => "\x1b[95m",
        };
        Self { color }
    }

    fn paint(&self, text: &str) -> String {
        format!("{}{}\x1b[0m", self.color, text)
    }

    fn strong(&self, text: &str) -> String {
        format!("\x1b[1m{}{}\x1b[0m", self.color, text)
    }
}

#[cfg(test)]
mod tests {
    use wordbook_types::{Definition, Meaning, Phonetic};

    use super::*;

    fn prefs() -> Preferences {
        Preferences::seeded(Theme::Light)
    }

    fn strip_ansi(s: &str) -> String {
        let mut out = String::new();
        let mut chars = s.chars();
        while let Some(c) = chars.next() {
            if c == '\x1b' {
                for c in chars.by_ref() {
                    if c == 'm' {
                        break;
                    }
                }
            } else {
                out.push(c);
            }
        }
        out
    }

    fn keyboard() -> WordEntry {
        WordEntry {
            word: "keyboard".to_string(),
            phonetic: Some("/ˈkiːbɔːd/".to_string()),
            phonetics: vec![Phonetic {
                text: Some("/ˈkiːbɔːd/".to_string()),
                audio_url: Some("https://example.org/keyboard.mp3".to_string()),
            }],
            meanings: vec![
                Meaning {
                    part_of_speech: "noun".to_string(),
                    definitions: vec![Definition {
                        definition: "A set of keys used to operate a typewriter or computer.".to_string(),
                        example: None,
                    }],
                    synonyms: vec!["electronic keyboard".to_string()],
                },
                Meaning {
                    part_of_speech: "verb".to_string(),
                    definitions: vec![Definition {
                        definition: "To type on a computer keyboard.".to_string(),
                        example: Some("Keyboarding is the part of this job I hate the most.".to_string()),
                    }],
                    synonyms: vec!["type".to_string(), "key".to_string()],
                },
            ],
            source_urls: vec!["https://en.wiktionary.org/wiki/keyboard".to_string()],
        }
    }

    #[test]
    fn entry_layout() {
        let text = strip_ansi(&render_state(&LookupState::Loaded(keyboard()), &prefs()));

        assert!(text.contains("keyboard\n/ˈkiːbɔːd/\n[:play to listen]"));
        assert!(text.contains("noun "));
        assert!(text.contains("  • A set of keys used to operate a typewriter or computer."));
        assert!(text.contains("    \"Keyboarding is the part of this job I hate the most.\""));
        // numbering continues across meanings, matching :syn <n>
        assert!(text.contains("Synonyms  [1] electronic keyboard"));
        assert!(text.contains("Synonyms  [2] type  [3] key"));
        assert!(text.contains("Source  https://en.wiktionary.org/wiki/keyboard"));
    }

    #[test]
    fn messages_for_other_states() {
        assert_eq!(render_state(&LookupState::Idle, &prefs()), "");
        assert!(render_state(&LookupState::InvalidInput, &prefs()).contains("can't be empty"));
        assert!(render_state(&LookupState::NotFound, &prefs()).contains("No Definitions Found"));
        assert!(
            render_state(&LookupState::Loading("hello".to_string()), &prefs()).contains("\"hello\"")
        );
    }

    #[test]
    fn header_reflects_preferences() {
        let prefs = Preferences {
            theme: Theme::Dark,
            font: Font::SansSerif,
        };
        assert_eq!(render_header(&prefs), "wordbook  |  Sans Serif  |  dark mode");
    }
}
