//! Command-line interface definitions and parsing
//!
//! This module defines the CLI structure for nautilus using the `clap` crate.
//!
//! # Commands
//!
//! - **browse**: list documents, search, follow an ident token (default)
//! - **player**: show the attachments of one document
//! - **import**: load a `collection.json` into the database
//! - **ident**: decode an ident token
//! - **info**: database and configuration summary
//! - **config**: read and change settings
//! - **completions**: shell completion scripts
//!
//! # Examples
//!
//! ```
//! use nautilus::cli::{Cli, Commands};
//!
//! let cli = Cli::parse_from_args(["nautilus", "browse", "--search", "verne", "--pages", "2"]);
//! match cli.get_command() {
//!     Commands::Browse { search, pages, .. } => {
//!         assert_eq!(search.as_deref(), Some("verne"));
//!         assert_eq!(pages, 2);
//!     }
//!     _ => unreachable!(),
//! }
//! ```

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::ffi::OsString;
use std::path::PathBuf;

/// Main CLI structure for parsing command-line arguments
#[derive(Parser, Debug)]
#[command(name = "nautilus")]
#[command(about = "Browse an offline document collection", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Suppress informational output (only print results)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,

    /// Verbose logging (overridden by RUST_LOG)
    #[arg(long = "debug", global = true)]
    pub debug: bool,

    /// Database path (overrides config)
    #[arg(long = "db", value_name = "PATH", global = true)]
    pub db: Option<PathBuf>,

    /// Configuration file (defaults to the user config directory)
    #[arg(long = "config", value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,
}

/// Configuration management subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommands {
    /// Set a configuration value
    Set {
        /// Configuration key=value (e.g., page_size=20)
        #[arg(value_name = "KEY=VALUE")]
        setting: String,
    },

    /// Get a configuration value
    Get {
        /// Configuration key to retrieve (e.g., randomize)
        #[arg(value_name = "KEY")]
        #[cfg_attr(
            feature = "dynamic-completions",
            arg(add = clap_complete::engine::ArgValueCompleter::new(crate::completions::complete_config_keys))
        )]
        key: String,
    },
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// List documents (default)
    #[command(visible_alias = "b")]
    Browse {
        /// Resume from an ident token
        #[arg(short = 'i', long = "ident", value_name = "TOKEN")]
        ident: Option<String>,

        /// Search titles and authors
        #[arg(short = 's', long = "search", value_name = "TEXT", conflicts_with = "ident")]
        search: Option<String>,

        /// Number of pages to load
        #[arg(short = 'n', long = "pages", value_name = "N", default_value_t = 1)]
        pages: usize,

        /// Documents per page (overrides config)
        #[arg(long = "page-size", value_name = "N")]
        page_size: Option<usize>,

        /// List in natural order instead of a random sample
        #[arg(long = "sequential")]
        sequential: bool,

        /// Seed for the random sample
        #[arg(long = "seed", value_name = "N")]
        seed: Option<u64>,

        /// Open the player on a document after listing
        #[arg(short = 'p', long = "player", value_name = "ID")]
        player: Option<String>,

        /// Show the about text of the collection
        #[arg(long = "about")]
        about: bool,
    },

    /// Show the attachments of a document
    #[command(visible_alias = "p")]
    Player {
        /// Document id (short numeric ids are zero-padded)
        #[arg(value_name = "ID")]
        id: String,
    },

    /// Load a collection file into the database
    Import {
        /// Path of the collection JSON file
        #[arg(value_name = "FILE")]
        path: PathBuf,

        /// Replace existing documents instead of skipping a populated database
        #[arg(long = "replace")]
        replace: bool,
    },

    /// Decode an ident token
    Ident {
        #[arg(value_name = "TOKEN")]
        token: String,
    },

    /// Show database and configuration details
    Info,

    /// Manage configuration settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

impl Cli {
    /// Parse command line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parse an explicit argument list
    #[must_use]
    pub fn parse_from_args<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Self::parse_from(args)
    }

    /// Get the command, defaulting to Browse if none specified
    #[must_use]
    pub fn get_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Browse {
            ident: None,
            search: None,
            pages: 1,
            page_size: None,
            sequential: false,
            seed: None,
            player: None,
            about: false,
        })
    }
}
