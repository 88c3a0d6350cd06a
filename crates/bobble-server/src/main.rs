//! Bobble word-search game server.
//!
//! Runs the WebSocket server by default. With `BOBBLE_MODE=cli` it rolls a
//! single board, prints it and either checks `BOBBLE_WORD` or lists every
//! word found.

use bobble_core::{Game, WordList};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod config;
mod handler;
mod protocol;
mod server;

use config::{Mode, ServerConfig};
use handler::RequestHandler;
use server::ServerState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = ServerConfig::from_env()?;

    let dictionary = WordList::from_path(&config.wordlist)?;
    info!(
        "Loaded {} words from {}",
        dictionary.len(),
        config.wordlist.display()
    );

    match config.mode {
        Mode::Server => {
            info!("Starting Bobble server...");
            let handler = RequestHandler::new(Arc::new(dictionary), config.limits);
            let state = Arc::new(ServerState::new(handler));
            server::run_server(config.addr, state).await
        }
        Mode::Cli { word } => {
            let mut game = Game::new(config.limits.default_size, dictionary)?;
            info!(size = game.size(), board = %game.board_string(), "Rolled board");
            print!("{}", cli::report(&mut game, word.as_deref()));
            Ok(())
        }
    }
}
