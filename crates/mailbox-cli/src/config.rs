//! Configuration file loading for the terminal front end.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur when loading configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("Failed to read config file {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Failed to parse the configuration file as valid TOML.
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
    /// The configured log level is not one tracing understands.
    #[error("Unknown log level: {0}")]
    InvalidLogLevel(String),
}

/// Settings read from `mailbox.toml`.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CliConfig {
    /// Show the board from Black's side.
    pub flipped: bool,
    /// Draw pieces with Unicode chess glyphs instead of letters.
    pub unicode: bool,
    /// Piece placement to start from instead of the standard position.
    pub start: Option<String>,
    /// Side to move in `start`: "w" or "b".
    pub to_move: String,
    /// Maximum level of log output written to stderr.
    pub log_level: String,
}

impl Default for CliConfig {
    fn default() -> Self {
        CliConfig {
            flipped: false,
            unicode: true,
            start: None,
            to_move: "w".to_string(),
            log_level: "warn".to_string(),
        }
    }
}

impl CliConfig {
    /// Default configuration file name, looked up in the working directory.
    pub const FILE_NAME: &'static str = "mailbox.toml";

    /// Loads configuration from `path`, or from [`Self::FILE_NAME`] when no
    /// path is given. A missing default file yields the defaults; a missing
    /// explicit file is an error.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let (path, explicit) = match path {
            Some(p) => (p.to_path_buf(), true),
            None => (PathBuf::from(Self::FILE_NAME), false),
        };

        if !explicit && !path.exists() {
            return Ok(Self::default());
        }

        let content =
            std::fs::read_to_string(&path).map_err(|source| ConfigError::ReadError {
                path: path.clone(),
                source,
            })?;
        Self::parse(&content)
    }

    /// Parses configuration from TOML text.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: CliConfig = toml::from_str(content)?;
        config.log_level()?;
        Ok(config)
    }

    /// Returns the configured log level.
    pub fn log_level(&self) -> Result<tracing::Level, ConfigError> {
        self.log_level
            .parse()
            .map_err(|_| ConfigError::InvalidLogLevel(self.log_level.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn empty_file_gives_defaults() {
        let config = CliConfig::parse("").unwrap();
        assert_eq!(config, CliConfig::default());
        assert!(config.unicode);
        assert_eq!(config.log_level().unwrap(), tracing::Level::WARN);
    }

    #[test]
    fn parse_all_fields() {
        let config = CliConfig::parse(
            r#"
flipped = true
unicode = false
start = "4k3/8/8/8/8/8/8/4K3"
to_move = "b"
log_level = "debug"
"#,
        )
        .unwrap();
        assert!(config.flipped);
        assert!(!config.unicode);
        assert_eq!(config.start.as_deref(), Some("4k3/8/8/8/8/8/8/4K3"));
        assert_eq!(config.to_move, "b");
        assert_eq!(config.log_level().unwrap(), tracing::Level::DEBUG);
    }

    #[test]
    fn invalid_toml() {
        assert!(matches!(
            CliConfig::parse("flipped = maybe"),
            Err(ConfigError::ParseError(_))
        ));
    }

    #[test]
    fn invalid_log_level() {
        assert!(matches!(
            CliConfig::parse("log_level = \"loud\""),
            Err(ConfigError::InvalidLogLevel(_))
        ));
    }

    #[test]
    fn load_explicit_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "flipped = true").unwrap();
        let config = CliConfig::load(Some(file.path())).unwrap();
        assert!(config.flipped);
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        assert!(matches!(
            CliConfig::load(Some(&path)),
            Err(ConfigError::ReadError { .. })
        ));
    }
}
