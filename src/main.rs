//! Contact Book - Main entry point
//!
//! Interactive console contact manager: loads the persisted book (or
//! starts empty), then runs the read-route-print session loop over
//! stdin/stdout until an exit command.

use anyhow::Result;
use contact_book::{AddressBook, Config, Session};
use std::io;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration first so its log level can seed the filter
    let config = Config::from_env();

    // Initialize logging (stderr only to keep the prompt clean);
    // RUST_LOG wins, the configured LOG_LEVEL is the fallback
    let fallback = config
        .as_ref()
        .map(|cfg| cfg.log_level.clone())
        .unwrap_or_else(|_| "error".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    // Load the book; a missing or unreadable file starts an empty book
    let book = match AddressBook::load_from_file(&config.data_file) {
        Ok(book) => {
            info!(
                "Loaded {} contact(s) from {}",
                book.len(),
                config.data_file.display()
            );
            book
        }
        Err(e) => {
            warn!(
                "Could not load {}: {} (starting with an empty book)",
                config.data_file.display(),
                e
            );
            AddressBook::new()
        }
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    Session::new(book, &config).run(stdin.lock(), stdout.lock())?;

    info!("Session ended");
    Ok(())
}
