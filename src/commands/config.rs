//! Config command - read and change settings

use crate::{NautilusError, cli::ConfigCommands, config::NautilusConfig};
use std::path::Path;

type Result<T> = std::result::Result<T, NautilusError>;

/// Execute a config subcommand against the file at `path`
///
/// # Errors
///
/// Returns `NautilusError` if the configuration key is invalid, value parsing fails,
/// or configuration save fails.
pub fn execute(
    mut config: NautilusConfig,
    path: &Path,
    command: &ConfigCommands,
    quiet: bool,
) -> Result<()> {
    match command {
        ConfigCommands::Set { setting } => {
            let (key, value) = setting.split_once('=').ok_or_else(|| {
                NautilusError::InvalidInput(
                    "Invalid format. Use: nautilus config set key=value".into(),
                )
            })?;
            let (key, value) = (key.trim(), value.trim());

            config.set_value(key, value)?;
            config.save_to(path)?;
            if !quiet {
                println!("Set {key} = {value}");
            }
        }
        ConfigCommands::Get { key } => {
            let value = config.get_value(key).ok_or_else(|| {
                NautilusError::InvalidInput(format!("Unknown configuration key: '{key}'"))
            })?;
            println!("{value}");
        }
    }
    Ok(())
}
