//! Locating, reading and writing kanban-md settings files.
//!
//! Files are read with `serde_json5`, so plain JSON works as well as JSON5
//! with comments and trailing commas. Writes always produce pretty JSON.
//!
//! Lookup order, first existing file wins:
//!
//! 1. `./kanban-md.json5`, then `./kanban-md.json`
//! 2. `<config dir>/kanban-md/config.json5`, then `config.json` next to it

use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use crate::error::{ConfigError, Result};

const LOCAL_FILE_NAMES: [&str; 2] = ["kanban-md.json5", "kanban-md.json"];
const USER_DIR_NAME: &str = "kanban-md";
const USER_FILE_NAMES: [&str; 2] = ["config.json5", "config.json"];

/// Every path the lookup tries, in priority order.
///
/// `config_dir` is the platform configuration directory (`dirs::config_dir`);
/// when it is `None` only the working-directory names are tried.
fn candidate_paths(config_dir: Option<&Path>) -> Vec<PathBuf> {
    let user_dir = config_dir.map(|dir| dir.join(USER_DIR_NAME));

    LOCAL_FILE_NAMES
        .iter()
        .map(PathBuf::from)
        .chain(
            user_dir
                .iter()
                .flat_map(|dir| USER_FILE_NAMES.iter().map(move |name| dir.join(name))),
        )
        .collect()
}

/// Returns the first settings file that exists, if any.
///
/// ```no_run
/// use kanban_md_config::persistence::find_config_file;
///
/// match find_config_file() {
///     Some(path) => println!("settings from {}", path.display()),
///     None => println!("built-in defaults"),
/// }
/// ```
#[must_use]
pub fn find_config_file() -> Option<PathBuf> {
    let found = candidate_paths(dirs::config_dir().as_deref())
        .into_iter()
        .find(|path| path.exists());
    debug!(path = ?found, "config file lookup");
    found
}

/// Reads a JSON or JSON5 settings file into `T`.
///
/// # Errors
///
/// [`ConfigError::ReadFile`] if the file cannot be read and
/// [`ConfigError::ParseJson5`] if its content does not deserialize into `T`.
#[instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn read_config_file<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_json5::from_str(&content)?)
}

/// Writes `value` as pretty JSON, creating missing parent directories.
///
/// # Errors
///
/// [`ConfigError::WriteFile`] on any I/O failure and
/// [`ConfigError::SerializeJson`] if `value` cannot be encoded.
pub fn write_config_file<T: Serialize>(path: impl AsRef<Path>, value: &T) -> Result<()> {
    let path = path.as_ref();
    let write_err = |source: std::io::Error| ConfigError::WriteFile {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty() && !p.exists()) {
        std::fs::create_dir_all(parent).map_err(write_err)?;
    }
    let content = serde_json::to_string_pretty(value)?;
    std::fs::write(path, content).map_err(write_err)
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;
    use crate::{Config, OutputConfig, OutputFormat};

    #[test]
    fn local_names_come_before_user_names() {
        let paths = candidate_paths(Some(Path::new("/home/me/.config")));
        assert_eq!(
            paths,
            [
                PathBuf::from("kanban-md.json5"),
                PathBuf::from("kanban-md.json"),
                PathBuf::from("/home/me/.config/kanban-md/config.json5"),
                PathBuf::from("/home/me/.config/kanban-md/config.json"),
            ]
        );
    }

    #[test]
    fn without_config_dir_only_local_names_are_tried() {
        let paths = candidate_paths(None);
        assert_eq!(
            paths,
            [PathBuf::from("kanban-md.json5"), PathBuf::from("kanban-md.json")]
        );
    }

    #[test]
    fn reads_output_settings_from_commented_json5() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("kanban-md.json5");
        std::fs::write(
            &path,
            "{\n  // paste-ready output\n  output: { indent: 4, formats: ['simple', 'board'], fence: false, },\n}\n",
        )
        .unwrap();

        let config: Config = read_config_file(&path).unwrap();
        assert_eq!(
            config.output,
            OutputConfig {
                indent: 4,
                formats: vec![OutputFormat::Simple, OutputFormat::Board],
                fence: false,
            }
        );
    }

    #[test]
    fn missing_output_keys_fall_back_to_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("kanban-md.json");
        std::fs::write(&path, r#"{ "output": { "fence": false } }"#).unwrap();

        let config: Config = read_config_file(&path).unwrap();
        assert_eq!(config.output.indent, 2);
        assert_eq!(config.output.formats, [OutputFormat::Board, OutputFormat::Simple]);
        assert!(!config.output.fence);
    }

    #[test]
    fn unknown_format_is_a_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("kanban-md.json5");
        std::fs::write(&path, "{ output: { formats: ['markdown'] } }").unwrap();

        let err = read_config_file::<Config>(&path).unwrap_err();
        assert!(matches!(err, ConfigError::ParseJson5(_)), "{err:?}");
    }

    #[test]
    fn missing_file_reports_its_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("absent.json5");

        match read_config_file::<Config>(&path).unwrap_err() {
            ConfigError::ReadFile { path: reported, .. } => assert_eq!(reported, path),
            other => panic!("expected ReadFile, got {other:?}"),
        }
    }

    #[test]
    fn written_settings_are_pretty_json_and_read_back() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("kanban-md").join("config.json");
        let config = Config {
            output: OutputConfig::only(OutputFormat::Simple),
        };

        write_config_file(&path, &config).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("\n  \"output\": {"), "{text}");
        assert!(text.contains("\"simple\""));
        assert_eq!(read_config_file::<Config>(&path).unwrap(), config);
    }
}
