//! core::config::schema
//!
//! Configuration file schema.
//!
//! # Project Config
//!
//! Located at `lingo.toml` in the project root (or any ancestor of the
//! working directory; the nearest one wins), or wherever `--config`
//! points.
//!
//! # Validation
//!
//! Config values are validated after parsing to ensure they conform to
//! expected formats (e.g., locale names must be valid file stems).

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::ConfigError;
use crate::core::types::LocaleName;

/// Project configuration as written in `lingo.toml`.
///
/// All fields are optional; defaults apply where a field is absent.
///
/// # Example
///
/// ```toml
/// locales_dir = "src/i18n/locales"
/// base = "en"
/// locales = ["en", "fr", "ar", "de", "es"]
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ProjectConfig {
    /// Directory holding `<locale>.json` files, relative to the config
    /// file's directory unless absolute.
    pub locales_dir: Option<PathBuf>,

    /// The base/reference locale whose key structure is authoritative.
    pub base: Option<String>,

    /// Explicit locale list; report order follows this list. When absent,
    /// locales are discovered from the directory.
    pub locales: Option<Vec<String>>,
}

impl ProjectConfig {
    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(base) = &self.base {
            LocaleName::new(base.clone()).map_err(|err| {
                ConfigError::InvalidValue(format!("base: {err}"))
            })?;
        }

        if let Some(locales) = &self.locales {
            if locales.is_empty() {
                return Err(ConfigError::InvalidValue(
                    "locales: list cannot be empty".into(),
                ));
            }
            for name in locales {
                LocaleName::new(name.clone()).map_err(|err| {
                    ConfigError::InvalidValue(format!("locales: {err}"))
                })?;
            }
        }

        if let Some(dir) = &self.locales_dir {
            if dir.as_os_str().is_empty() {
                return Err(ConfigError::InvalidValue(
                    "locales_dir: path cannot be empty".into(),
                ));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_config() {
        let config: ProjectConfig = toml::from_str(
            r#"
            locales_dir = "src/i18n/locales"
            base = "en"
            locales = ["en", "fr", "ar"]
            "#,
        )
        .unwrap();

        assert_eq!(config.locales_dir, Some(PathBuf::from("src/i18n/locales")));
        assert_eq!(config.base.as_deref(), Some("en"));
        assert_eq!(config.locales.as_ref().map(Vec::len), Some(3));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn empty_config_is_valid() {
        let config: ProjectConfig = toml::from_str("").unwrap();
        assert_eq!(config, ProjectConfig::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let parsed: Result<ProjectConfig, _> = toml::from_str("languages = [\"en\"]");
        assert!(parsed.is_err());
    }

    #[test]
    fn invalid_base_locale_fails_validation() {
        let config: ProjectConfig = toml::from_str("base = \"en.json\"").unwrap();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue(_))
        ));
    }

    #[test]
    fn empty_locale_list_fails_validation() {
        let config: ProjectConfig = toml::from_str("locales = []").unwrap();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue(_))
        ));
    }
}
