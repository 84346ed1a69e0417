use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Prefix for environment overrides, e.g. `BOOKWORM_OUTPUT__FORMAT=json`
const ENV_PREFIX: &str = "BOOKWORM";
/// Optional settings file looked up in the working directory (any format the
/// `config` crate understands, e.g. `bookworm.toml`)
const DEFAULT_CONFIG_NAME: &str = "bookworm";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub puzzle: PuzzleConfig,
    pub output: OutputConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PuzzleConfig {
    /// Puzzle file used when none is given on the command line
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub show_paths: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// "WORD was found." lines
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "bookworm_search=info".to_string(),
        }
    }
}

impl Config {
    /// Layer settings: `.env`, then the settings file, then `BOOKWORM_*` variables.
    ///
    /// An explicit `file` must exist; the default `bookworm.*` file is optional.
    pub fn load(file: Option<&Path>) -> Result<Self> {
        dotenvy::dotenv().ok();

        let file_source = match file {
            Some(path) => ::config::File::from(path).required(true),
            None => ::config::File::with_name(DEFAULT_CONFIG_NAME).required(false),
        };

        ::config::Config::builder()
            .add_source(file_source)
            .add_source(
                ::config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .context("failed to read configuration")?
            .try_deserialize()
            .context("invalid configuration")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.output.format, OutputFormat::Text);
        assert!(!config.output.show_paths);
        assert!(config.puzzle.path.is_none());
        assert_eq!(config.logging.filter, "bookworm_search=info");
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("bookworm-config-{}.toml", std::process::id()));
        std::fs::write(
            &path,
            "[puzzle]\npath = \"boards/today.txt\"\n\n[output]\nformat = \"json\"\nshow_paths = true\n",
        )
        .unwrap();

        let config = Config::load(Some(&path));
        std::fs::remove_file(&path).ok();
        let config = config.unwrap();

        assert_eq!(config.puzzle.path, Some(PathBuf::from("boards/today.txt")));
        assert_eq!(config.output.format, OutputFormat::Json);
        assert!(config.output.show_paths);
        assert_eq!(config.logging.filter, "bookworm_search=info");
    }

    #[test]
    fn test_explicit_file_must_exist() {
        let result = Config::load(Some(Path::new("/nonexistent/bookworm.toml")));
        assert!(result.is_err());
    }
}
