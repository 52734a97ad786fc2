//! Configuration management for kanban-md.
//!
//! This crate handles loading, validating, and persisting the settings that
//! control how board documents are printed.
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`config`]: Core configuration struct and loading logic
//! - [`output`]: Indentation, format selection and fencing
//! - [`persistence`]: Config file reading and writing
//! - [`error`]: Error types for configuration operations
//!
//! # Configuration Sources (Priority)
//!
//! Configuration is loaded from the first file found, falling back to
//! built-in defaults:
//!
//! 1. Local config (`./kanban-md.json5` or `./kanban-md.json`)
//! 2. User config (`~/.config/kanban-md/config.json5` or `~/.config/kanban-md/config.json`)
//! 3. Built-in defaults
//!
//! # File Format
//!
//! ```json5
//! {
//!   output: {
//!     indent: 2,                    // spaces per level, at most 16
//!     formats: ["board", "simple"], // printed in this order
//!     fence: true,                  // wrap in ```kanban blocks
//!   },
//! }
//! ```
//!
//! # Examples
//!
//! ```no_run
//! use kanban_md_config::Config;
//!
//! # fn example() -> kanban_md_config::Result<()> {
//! let config = Config::load()?;
//! for format in &config.output.formats {
//!     println!("Will print: {}", format.label());
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod output;
pub mod persistence;

// Re-export primary types at crate root for convenience
pub use config::Config;
pub use error::{ConfigError, Result};
pub use output::{OutputConfig, OutputFormat};
