//! Configuration module for nautilus
//!
//! Manages application configuration: where the document database lives,
//! how many documents a page holds, which fields rows display, the media
//! extension sets and the interface labels.
//! Configuration is stored in the user's config directory.

mod i18n;
mod media;

pub use i18n::I18n;
pub use media::MediaConfig;

use config::{Config, ConfigError, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Documents per page unless configured otherwise
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Keys accepted by [`NautilusConfig::get_value`] and [`NautilusConfig::set_value`]
pub const SETTABLE_KEYS: [&str; 8] = [
    "database",
    "title",
    "page_size",
    "randomize",
    "show_author",
    "show_description",
    "files_prefix",
    "debug",
];

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct NautilusConfig {
    /// Path of the document database
    #[serde(default = "default_database")]
    pub database: PathBuf,

    /// Collection title, shown as the about dialog title
    #[serde(default)]
    pub title: String,

    /// About text of the collection
    #[serde(default)]
    pub about: String,

    /// Number of documents per page
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Start on a random sample instead of the first page
    #[serde(default = "default_true")]
    pub randomize: bool,

    /// Display document authors in rows
    #[serde(default = "default_true")]
    pub show_author: bool,

    /// Display document descriptions in rows
    #[serde(default = "default_true")]
    pub show_description: bool,

    /// Prefix prepended to attachment names to build file paths
    #[serde(default = "default_files_prefix")]
    pub files_prefix: String,

    /// Verbose logging
    #[serde(default)]
    pub debug: bool,

    /// Suppress informational output by default
    #[serde(default)]
    pub quiet: bool,

    /// Media classification settings
    #[serde(default)]
    pub media: MediaConfig,

    /// Interface labels
    #[serde(default)]
    pub i18n: I18n,
}

fn default_database() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("nautilus")
        .join("db")
}

const fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

const fn default_true() -> bool {
    true
}

fn default_files_prefix() -> String {
    "files/".to_string()
}

impl Default for NautilusConfig {
    fn default() -> Self {
        Self {
            database: default_database(),
            title: String::new(),
            about: String::new(),
            page_size: DEFAULT_PAGE_SIZE,
            randomize: true,
            show_author: true,
            show_description: true,
            files_prefix: default_files_prefix(),
            debug: false,
            quiet: false,
            media: MediaConfig::default(),
            i18n: I18n::default(),
        }
    }
}

impl NautilusConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            ConfigError::Message("Could not determine config directory".to_string())
        })?;

        Ok(config_dir.join("nautilus").join("config.toml"))
    }

    /// Load configuration from the default location, creating it if it doesn't exist
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file cannot be read, parsed, or created.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(Self::config_path()?)
    }

    /// Load configuration from a specific file, creating it if it doesn't exist
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file cannot be read, parsed, or created.
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            let default_config = Self::default();
            default_config.save_to(path)?;
            return Ok(default_config);
        }

        let settings = Config::builder()
            .add_source(File::from(path).format(FileFormat::Toml))
            .build()?;

        let config: Self = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to the default location
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the configuration cannot be written.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(Self::config_path()?)
    }

    /// Save configuration to a specific file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config directory cannot be created, the configuration
    /// cannot be serialized to TOML, or the file cannot be written.
    pub fn save_to<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                ConfigError::Message(format!("Failed to create config directory: {e}"))
            })?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))?;

        fs::write(path, toml_string)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        Ok(())
    }

    /// Reject values the browser cannot work with
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `page_size` is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.page_size == 0 {
            return Err(ConfigError::Message(
                "page_size must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Read a scalar setting as a string
    #[must_use]
    pub fn get_value(&self, key: &str) -> Option<String> {
        let value = match key {
            "database" => self.database.display().to_string(),
            "title" => self.title.clone(),
            "page_size" => self.page_size.to_string(),
            "randomize" => self.randomize.to_string(),
            "show_author" => self.show_author.to_string(),
            "show_description" => self.show_description.to_string(),
            "files_prefix" => self.files_prefix.clone(),
            "debug" => self.debug.to_string(),
            _ => return None,
        };
        Some(value)
    }

    /// Update a scalar setting from its string form
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the key is unknown or the value does not parse.
    pub fn set_value(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
            value.parse::<bool>().map_err(|_| {
                ConfigError::Message(format!(
                    "Invalid value for {key}: '{value}'. Use 'true' or 'false'"
                ))
            })
        }

        match key {
            "database" => self.database = PathBuf::from(value),
            "title" => self.title = value.to_string(),
            "page_size" => {
                self.page_size = value.parse::<usize>().map_err(|_| {
                    ConfigError::Message(format!("Invalid value for page_size: '{value}'"))
                })?;
                self.validate()?;
            }
            "randomize" => self.randomize = parse_bool(key, value)?,
            "show_author" => self.show_author = parse_bool(key, value)?,
            "show_description" => self.show_description = parse_bool(key, value)?,
            "files_prefix" => self.files_prefix = value.to_string(),
            "debug" => self.debug = parse_bool(key, value)?,
            _ => {
                return Err(ConfigError::Message(format!(
                    "Unknown configuration key: '{key}'. Available keys: {}",
                    SETTABLE_KEYS.join(", ")
                )));
            }
        }
        Ok(())
    }
}
