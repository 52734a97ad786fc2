//! Core configuration struct and loading logic.
//!
//! This module provides the main [`Config`] struct which aggregates all
//! configuration options for the kanban-md binary.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::Result;
use crate::output::OutputConfig;
use crate::persistence::{find_config_file, read_config_file, write_config_file};

/// The main configuration struct for kanban-md.
///
/// # Examples
///
/// ```
/// use kanban_md_config::{Config, OutputConfig, OutputFormat};
///
/// // Create a default config
/// let config = Config::default();
/// assert_eq!(config.output.indent, 2);
///
/// // Create a custom config
/// let config = Config {
///     output: OutputConfig::only(OutputFormat::Board),
/// };
/// assert!(!config.output.includes(OutputFormat::Simple));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Output settings.
    ///
    /// Controls indentation, which formats are printed and fencing.
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Creates a new default configuration.
    ///
    /// This is equivalent to `Config::default()`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from the default file locations.
    ///
    /// Searches for configuration files in the following order:
    ///
    /// 1. Local: `./kanban-md.json5` or `./kanban-md.json`
    /// 2. User: `~/.config/kanban-md/config.json5` or `~/.config/kanban-md/config.json`
    ///
    /// If no configuration file is found, returns a default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration file is found but cannot be
    /// read, parsed or validated.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use kanban_md_config::Config;
    ///
    /// # fn example() -> kanban_md_config::Result<()> {
    /// let config = Config::load()?;
    /// println!("Indenting by {} spaces", config.output.indent);
    /// # Ok(())
    /// # }
    /// ```
    pub fn load() -> Result<Self> {
        match find_config_file() {
            Some(path) => {
                info!(path = %path.display(), "loading configuration");
                Self::load_from(path)
            }
            None => Ok(Self::default()),
        }
    }

    /// Loads configuration from a specific file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use kanban_md_config::Config;
    ///
    /// # fn example() -> kanban_md_config::Result<()> {
    /// let config = Config::load_from("custom-config.json5")?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn load_from(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let config: Config = read_config_file(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Saves the configuration to a file as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save_to(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        write_config_file(path, self)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if validation fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use kanban_md_config::Config;
    ///
    /// let mut config = Config::default();
    /// assert!(config.validate().is_ok());
    ///
    /// config.output.formats.clear();
    /// assert!(config.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<()> {
        self.output.validate()?;
        Ok(())
    }
}
