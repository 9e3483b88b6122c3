mod cli;

use clap::{CommandFactory, Parser};
use cli::{Cli, Commands};
use countdown_core::AppConfig;
use countdown_persistence::{HttpStore, RemoteStore};
use countdown_tui::{App, EventHandler};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Ok(log_path) = std::env::var("COUNTDOWNS_DEBUG_LOG") {
        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        tracing_subscriber::fmt()
            .with_writer(log_file)
            .with_max_level(tracing::Level::DEBUG)
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_max_level(tracing::Level::WARN)
            .init();
    }

    let cli = Cli::parse();

    if let Some(Commands::Completions { shell }) = cli.command {
        clap_complete::generate(shell, &mut Cli::command(), "countdowns", &mut std::io::stdout());
        return Ok(());
    }

    let config = AppConfig::load();
    let endpoint = config.resolve_endpoint(cli.endpoint)?;
    let store = HttpStore::new(endpoint, config.effective_request_timeout())?;
    tracing::info!("Using countdown store at {}", store.endpoint());

    let events = EventHandler::new();
    let (mut app, save_rx) = App::new(events.sender());
    app.run(events, Arc::new(store), save_rx).await?;

    Ok(())
}
