//! Nautilus CLI application entry point
//!
//! Browses an offline document collection from the terminal: random samples,
//! sequential listings, title/author search and the attachment player. Every
//! browsing position is summarized by an ident token that can be handed back
//! with `--ident` to resume.
//!
//! # Usage
//!
//! ```bash
//! # Load the collection once
//! nautilus import collection.json
//!
//! # Random sample (default command)
//! nautilus
//!
//! # Three pages in natural order
//! nautilus browse --sequential -n 3
//!
//! # Search, then resume later
//! nautilus browse -s "jules verne"
//! nautilus browse -i "search--10_jules verne"
//!
//! # Attachments of one document
//! nautilus player 42
//! ```
//!
//! # Configuration
//!
//! Settings live in `~/.config/nautilus/config.toml` on Linux, created with
//! defaults on first run. Logging goes to stderr and honours `RUST_LOG`.

use nautilus::{
    NautilusError,
    cli::{Cli, Commands},
    commands::{self, browse::BrowseOptions},
    completions,
    config::NautilusConfig,
    db::Database,
};
use std::path::Path;
use tracing_subscriber::EnvFilter;

type Result<T> = std::result::Result<T, NautilusError>;

/// Open the database, run `action` on it and flush
fn with_database<T>(path: &Path, action: impl FnOnce(&Database) -> Result<T>) -> Result<T> {
    tracing::debug!("opening database at {}", path.display());
    let db = Database::open(path)?;
    let value = action(&db)?;
    db.flush()?;
    Ok(value)
}

fn init_tracing(debug: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if debug { "debug" } else { "warn" }));

    // A subscriber may already be installed when embedded
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Main entry point
///
/// Loads configuration, parses command-line arguments, and dispatches to the
/// appropriate command handler.
///
/// # Errors
///
/// Returns `NautilusError` if configuration loading fails, the database cannot
/// be opened, or any command handler returns an error.
fn main() -> Result<()> {
    #[cfg(feature = "dynamic-completions")]
    completions::init_dynamic_completions(<Cli as clap::CommandFactory>::command);

    let cli = Cli::parse_args();

    let config_path = match &cli.config {
        Some(path) => path.clone(),
        None => NautilusConfig::config_path()?,
    };
    let config = NautilusConfig::load_from(&config_path)?;

    init_tracing(cli.debug || config.debug);
    tracing::debug!("config loaded from {}", config_path.display());

    let quiet = cli.quiet || config.quiet;
    let command = cli.get_command();

    let db_path = cli.db.clone().unwrap_or_else(|| config.database.clone());

    match command {
        Commands::Completions { shell } => {
            let mut cmd = <Cli as clap::CommandFactory>::command();
            completions::generate_static(shell, &mut cmd, &mut std::io::stdout());
        }
        Commands::Config { command } => {
            commands::config(config, &config_path, &command, quiet)?;
        }
        Commands::Ident { token } => commands::ident(&token, quiet)?,
        Commands::Browse {
            ident,
            search,
            pages,
            page_size,
            sequential,
            seed,
            player,
            about,
        } => {
            let options = BrowseOptions {
                ident,
                search,
                pages,
                page_size,
                sequential,
                seed,
                player,
                about,
            };
            with_database(&db_path, |db| commands::browse(db, &config, &options, quiet))?;
        }
        Commands::Player { id } => {
            with_database(&db_path, |db| commands::player(db, &config, &id))?;
        }
        Commands::Import { path, replace } => {
            let loaded = with_database(&db_path, |db| commands::import(db, &path, replace, quiet))?;
            tracing::info!("imported {loaded} documents");
        }
        Commands::Info => {
            with_database(&db_path, |db| {
                commands::info(db, &db_path, &config, &config_path, quiet)
            })?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use nautilus::Document;
    use nautilus::db::DocumentStore;
    use tempfile::TempDir;

    #[test]
    fn test_with_database_runs_action() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("db");

        let stored = with_database(&path, |db| {
            db.insert(&Document::new("00000", "Log", vec!["log.txt".into()]))?;
            Ok(db.count_all()?)
        })
        .unwrap();

        assert_eq!(stored, 1);
        assert!(path.exists());
    }

    #[test]
    fn test_with_database_returns_action_error() {
        let dir = TempDir::new().unwrap();
        let result: Result<()> = with_database(&dir.path().join("db"), |_| {
            Err(NautilusError::InvalidInput("stop".into()))
        });
        assert!(matches!(result, Err(NautilusError::InvalidInput(_))));
    }
}
