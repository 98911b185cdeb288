//! Info command - database and configuration summary

use crate::{NautilusError, config::NautilusConfig, db::Database};
use colored::Colorize;
use std::path::Path;

type Result<T> = std::result::Result<T, NautilusError>;

/// Execute the info command
///
/// # Errors
/// Returns an error if the database cannot be read
pub fn execute(
    db: &Database,
    db_path: &Path,
    config: &NautilusConfig,
    config_path: &Path,
    quiet: bool,
) -> Result<()> {
    let documents = db.list_all()?;
    let files: usize = documents.iter().map(|d| d.files.len()).sum();

    if quiet {
        println!("{}", documents.len());
        return Ok(());
    }

    if !config.title.is_empty() {
        println!("{}", config.title.bold());
    }
    println!("{:>12}: {}", "database", db_path.display());
    println!("{:>12}: {}", "config", config_path.display());
    println!("{:>12}: {}", "documents", documents.len());
    println!("{:>12}: {files}", "files");
    println!("{:>12}: {}", "page size", config.page_size);
    println!(
        "{:>12}: {}",
        "start",
        if config.randomize { "random" } else { "list" }
    );
    Ok(())
}
