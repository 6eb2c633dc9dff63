use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tokio::signal;
use tracing_subscriber::EnvFilter;
use wordbook_config::Config;
use wordbook_types::AppEvent;

pub mod audio;
pub mod controller;
pub mod events;
pub mod io;
pub mod platform;
pub mod state;
pub mod ui;


use self::controller::AppController;
use self::state::AppState;

/// Look up English words: definitions, examples, synonyms and pronunciation
#[derive(Parser, Debug)]
#[command(name = "wordbook", version)]
struct Args {
    /// JSON config file; without it defaults and WORDBOOK_* environment variables are used
    #[arg(long)]
    config: Option<PathBuf>,

    /// Emit logs as JSON
    #[arg(long)]
    log_json: bool,

    /// Word to look up right away
    word: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();
    init_tracing(args.log_json);

    let config = match &args.config {
        Some(path) => Config::from_json_file(path)?,
        None => Config::new(),
    };
    tracing::debug!("Config: {:?}", config);

    let state = Arc::new(AppState::new(config)?);
    let controller = AppController::new(state);
    let mut tasks = controller.spawn_tasks();

    if let Some(word) = args.word {
        controller.event_sender().send(AppEvent::TextInput(word)).await?;
    }

    tokio::select! {
        result = signal::ctrl_c() => {
            if let Err(e) = result {
                tracing::error!("Failed to listen for ctrl+c: {e}");
            }
            tracing::info!("Shutdown requested");
        }
        Some(result) = tasks.join_next() => {
            match result {
                Ok(Ok(())) => tracing::debug!("Task finished"),
                Ok(Err(e)) => tracing::error!("Task exited with error: {e:#}"),
                Err(e) => tracing::error!("Task panicked: {e}"),
            }
        }
    }

    controller.shutdown();
    while let Some(result) = tasks.join_next().await {
        if let Ok(Err(e)) = result {
            tracing::error!("Task exited with error: {e:#}");
        }
    }

    Ok(())
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(atty::is(atty::Stream::Stderr));

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}
