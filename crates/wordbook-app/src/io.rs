use std::io::BufRead;
use std::thread;

use anyhow::bail;
use kanal::Sender;
use wordbook_types::{AppEvent, SynonymRef};

pub const HELP: &str = "Type a word and press Enter. Commands: :syn <word|n>, :play, :theme, :font <sans|serif|mono>, :help, :quit";

/// Read stdin on a dedicated thread and forward parsed lines to the app.
///
/// Blocking reads stay off the runtime; the thread ends on EOF or when the app hangs up.
pub fn spawn_input_reader(event_tx: Sender<AppEvent>) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(line) => line,
                Err(e) => {
                    tracing::error!("Failed to read input: {}", e);
                    break;
                }
            };

            let events = match parse_line(&line) {
                Ok(events) if events.is_empty() => {
                    println!("{HELP}");
                    continue;
                }
                Ok(events) => events,
                Err(e) => {
                    println!("{e}\n{HELP}");
                    continue;
                }
            };

            for event in events {
                if event_tx.send(event).is_err() {
                    tracing::debug!("App stopped listening for input");
                    return;
                }
            }
        }

        tracing::info!("Input closed");
        let _ = event_tx.send(AppEvent::Quit);
    })
}

/// Turn one line of input into app events, none for a help request
pub fn parse_line(line: &str) -> anyhow::Result<Vec<AppEvent>> {
    let Some(command) = line.trim_start().strip_prefix(':') else {
        // typing in the field then pressing Enter
        if line.is_empty() {
            return Ok(vec![AppEvent::TextInput(String::new())]);
        }
        return Ok(vec![AppEvent::InputEdited, AppEvent::TextInput(line.to_string())]);
    };

    let (name, arg) = match command.split_once(char::is_whitespace) {
        Some((name, arg)) => (name, arg.trim()),
        None => (command.trim(), ""),
    };

    let event = match (name, arg) {
        ("syn", "") => bail!("Usage: :syn <word|n>"),
        ("syn", arg) => AppEvent::SelectSynonym(synonym_ref(arg)),
        ("play", _) => AppEvent::PlayAudio,
        ("theme", _) => AppEvent::ToggleTheme,
        ("font", "") => bail!("Usage: :font <sans|serif|mono>"),
        ("font", arg) => AppEvent::SetFont(arg.to_string()),
        ("quit" | "q", _) => AppEvent::Quit,
        ("help" | "h", _) => return Ok(vec![]),
        (other, _) => bail!("Unknown command: :{other}"),
    };

    Ok(vec![event])
}

// synonyms are numbered from 1 on screen
fn synonym_ref(arg: &str) -> SynonymRef {
    match arg.parse::<usize>() {
        Ok(n) if n >= 1 => SynonymRef::Index(n - 1),
        _ => SynonymRef::Word(arg.to_string()),
    }
}
