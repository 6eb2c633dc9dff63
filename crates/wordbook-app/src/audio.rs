use std::process::Stdio;

use tokio::process::Command;
use wordbook_core::{AudioSink, PlaybackError};

/// Plays clips by handing the URL to an external player process
pub struct CommandSink {
    player: String,
    args: Vec<String>,
}

impl CommandSink {
    pub fn new(player: String, args: Vec<String>) -> Self {
        Self { player, args }
    }
}

impl AudioSink for CommandSink {
    fn start(&self, url: &str) -> Result<(), PlaybackError> {
        let mut child = Command::new(&self.player)
            .args(&self.args)
            .arg(url)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|source| PlaybackError::Spawn {
                player: self.player.clone(),
                source,
            })?;

        // reap in the background, nobody waits for playback to end
        let player = self.player.clone();
        tokio::spawn(async move {
            match child.wait().await {
                Ok(status) if !status.success() => {
                    tracing::warn!("{} exited with {}", player, status);
                }
                Ok(_) => {}
                Err(e) => tracing::warn!("Failed to wait for {}: {}", player, e),
            }
        });

        Ok(())
    }
}

pub struct MutedSink;

impl AudioSink for MutedSink {
    fn start(&self, _url: &str) -> Result<(), PlaybackError> {
        Err(PlaybackError::Disabled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_player_is_spawn_error() {
        let sink = CommandSink::new("wordbook-no-such-player".to_string(), vec![]);
        let err = sink.start("https://example.org/a.mp3").unwrap_err();
        assert!(matches!(err, PlaybackError::Spawn { .. }));
    }

    #[test]
    fn muted_sink_refuses() {
        assert!(matches!(MutedSink.start("x"), Err(PlaybackError::Disabled)));
    }
}
