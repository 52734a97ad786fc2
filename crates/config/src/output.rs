//! Output configuration for printing board documents.
//!
//! This module provides the [`OutputConfig`] type which controls how the
//! sample documents are encoded: indentation width, which formats to print
//! and whether each is wrapped in a ```` ```kanban ```` fence.

use serde::{Deserialize, Serialize};

/// Default indentation width, in spaces.
pub const DEFAULT_INDENT: usize = 2;

/// Largest indentation width accepted by [`OutputConfig::validate`].
pub const MAX_INDENT: usize = 16;

/// A shape the kanban document can be printed in.
///
/// # Examples
///
/// ```
/// use kanban_md_config::OutputFormat;
///
/// let format: OutputFormat = serde_json::from_str("\"simple\"").unwrap();
/// assert_eq!(format, OutputFormat::Simple);
/// assert_eq!(OutputFormat::Board.label(), "board");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// The full board object with columns, metadata and view settings.
    Board,
    /// A bare array of tasks.
    Simple,
}

impl OutputFormat {
    /// Returns the name used for this format in config files.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Board => "board",
            Self::Simple => "simple",
        }
    }
}

/// Configuration for how documents are printed.
///
/// # Examples
///
/// ```
/// use kanban_md_config::{OutputConfig, OutputFormat};
///
/// // Default configuration prints both formats, fenced, indented by 2
/// let config = OutputConfig::default();
/// assert_eq!(config.indent, 2);
/// assert_eq!(config.formats, vec![OutputFormat::Board, OutputFormat::Simple]);
/// assert!(config.fence);
///
/// // Only the bare task array
/// let config = OutputConfig::only(OutputFormat::Simple);
/// assert_eq!(config.formats, vec![OutputFormat::Simple]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Spaces per indentation level.
    #[serde(default = "default_indent")]
    pub indent: usize,

    /// Formats to print, in order.
    #[serde(default = "default_formats")]
    pub formats: Vec<OutputFormat>,

    /// Whether to wrap each document in a `kanban` fenced code block.
    #[serde(default = "default_fence")]
    pub fence: bool,
}

fn default_indent() -> usize {
    DEFAULT_INDENT
}

fn default_formats() -> Vec<OutputFormat> {
    vec![OutputFormat::Board, OutputFormat::Simple]
}

fn default_fence() -> bool {
    true
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            indent: DEFAULT_INDENT,
            formats: default_formats(),
            fence: true,
        }
    }
}

impl OutputConfig {
    /// Creates an output configuration printing a single format.
    #[must_use]
    pub fn only(format: OutputFormat) -> Self {
        Self {
            formats: vec![format],
            ..Self::default()
        }
    }

    /// Returns `true` if `format` is among the formats to print.
    #[must_use]
    pub fn includes(&self, format: OutputFormat) -> bool {
        self.formats.contains(&format)
    }

    /// Validates the output configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the indentation exceeds [`MAX_INDENT`] or no
    /// format is selected.
    pub fn validate(&self) -> crate::Result<()> {
        if self.indent > MAX_INDENT {
            return Err(crate::ConfigError::InvalidOutput {
                reason: format!(
                    "indent {} exceeds maximum of {} spaces",
                    self.indent, MAX_INDENT
                ),
            });
        }

        if self.formats.is_empty() {
            return Err(crate::ConfigError::InvalidOutput {
                reason: "at least one output format is required".to_string(),
            });
        }

        Ok(())
    }
}
