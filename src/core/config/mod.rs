//! core::config
//!
//! Configuration loading and resolution.
//!
//! # Overview
//!
//! Lingo reads an optional `lingo.toml` from the project. Values are
//! resolved in this order (later overrides earlier):
//!
//! 1. Built-in defaults (`locales` directory, base locale `en`)
//! 2. Config file values
//! 3. CLI flags (applied by the command layer, not here)
//!
//! # Config File Locations
//!
//! Searched in order:
//! 1. The `--config <path>` flag, if given (missing file is an error)
//! 2. `lingo.toml` in the working directory or its nearest ancestor
//!
//! A missing config file is not an error (defaults are used); a malformed
//! one is fatal with the path identified.
//!
//! # Example
//!
//! ```no_run
//! use lingo::core::config::Config;
//! use std::path::Path;
//!
//! let config = Config::load(Path::new("."), None).unwrap();
//! println!("base locale: {}", config.base);
//! println!("locales dir: {}", config.locales_dir.display());
//! ```

pub mod schema;

pub use schema::ProjectConfig;

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::types::LocaleName;

/// Name of the project config file.
pub const CONFIG_FILE_NAME: &str = "lingo.toml";

/// Default locales directory, relative to the project root.
const DEFAULT_LOCALES_DIR: &str = "locales";

/// Default base locale.
const DEFAULT_BASE: &str = "en";

/// Errors from configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("invalid config value: {0}")]
    InvalidValue(String),
}

/// Resolved configuration with defaults and file values applied.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// The base/reference locale.
    pub base: LocaleName,
    /// Explicit locale list from the config file, in file order.
    pub locales: Option<Vec<LocaleName>>,
    /// Locales directory, resolved against the config file's directory
    /// (or the working directory when no file was found).
    pub locales_dir: PathBuf,
    /// Path of the config file that was loaded, if any.
    pub path: Option<PathBuf>,
}

impl Config {
    /// Load configuration for the given working directory.
    ///
    /// With `explicit` set, only that file is considered and it must
    /// exist. Otherwise `lingo.toml` is searched in `cwd` and its
    /// ancestors; the nearest match wins, and no match means defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if a config file exists but cannot be read,
    /// parsed, or validated.
    pub fn load(cwd: &Path, explicit: Option<&Path>) -> Result<Config, ConfigError> {
        let found = match explicit {
            Some(path) => {
                let raw = fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
                    path: path.to_path_buf(),
                    source,
                })?;
                Some((path.to_path_buf(), raw))
            }
            None => Self::find_in_ancestors(cwd)?,
        };

        let (project, path) = match found {
            Some((path, raw)) => {
                let project: ProjectConfig =
                    toml::from_str(&raw).map_err(|err| ConfigError::ParseError {
                        path: path.clone(),
                        message: err.to_string(),
                    })?;
                project.validate()?;
                (project, Some(path))
            }
            None => (ProjectConfig::default(), None),
        };

        Self::resolve(project, path, cwd)
    }

    fn find_in_ancestors(cwd: &Path) -> Result<Option<(PathBuf, String)>, ConfigError> {
        for dir in cwd.ancestors() {
            let candidate = dir.join(CONFIG_FILE_NAME);
            match fs::read_to_string(&candidate) {
                Ok(raw) => return Ok(Some((candidate, raw))),
                Err(err) if err.kind() == std::io::ErrorKind::NotFound => continue,
                Err(source) => {
                    return Err(ConfigError::ReadError {
                        path: candidate,
                        source,
                    })
                }
            }
        }
        Ok(None)
    }

    /// Apply defaults and resolve paths.
    fn resolve(
        project: ProjectConfig,
        path: Option<PathBuf>,
        cwd: &Path,
    ) -> Result<Config, ConfigError> {
        let base = LocaleName::new(project.base.as_deref().unwrap_or(DEFAULT_BASE))
            .map_err(|err| ConfigError::InvalidValue(format!("base: {err}")))?;
        let locales = project
            .locales
            .map(|names| {
                names
                    .into_iter()
                    .map(|name| {
                        LocaleName::new(name)
                            .map_err(|err| ConfigError::InvalidValue(format!("locales: {err}")))
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .transpose()?;

        let anchor = path
            .as_deref()
            .and_then(Path::parent)
            .unwrap_or(cwd)
            .to_path_buf();
        let locales_dir = match project.locales_dir {
            Some(dir) if dir.is_absolute() => dir,
            Some(dir) => anchor.join(dir),
            None => anchor.join(DEFAULT_LOCALES_DIR),
        };

        Ok(Config {
            base,
            locales,
            locales_dir,
            path,
        })
    }
}
