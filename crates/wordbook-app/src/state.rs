use std::sync::Arc;

use anyhow::Context;
use wordbook_config::Config;
use wordbook_core::{AudioSink, DictionaryClient, DictionarySource, Session};

use crate::audio::{CommandSink, MutedSink};
use crate::platform;

pub struct AppState {
    pub config: Config,
    pub session: Session,
}

impl AppState {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let client = DictionaryClient::new(&config.dictionary.api_url, config.dictionary.timeout())
            .context("Failed to create dictionary client")?;

        let sink: Arc<dyn AudioSink> = if config.audio.enabled {
            Arc::new(CommandSink::new(
                config.audio.player.clone(),
                config.audio.args.clone(),
            ))
        } else {
            tracing::info!("Audio playback disabled");
            Arc::new(MutedSink)
        };

        Ok(Self::with_parts(config, Arc::new(client), sink))
    }

    pub fn with_parts(
        config: Config,
        source: Arc<dyn DictionarySource>,
        sink: Arc<dyn AudioSink>,
    ) -> Self {
        let theme = platform::system_theme(config.ui.color_scheme);
        tracing::debug!("Starting with {} theme", theme);

        Self {
            session: Session::new(source, sink, theme),
            config,
        }
    }
}
