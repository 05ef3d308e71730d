//! User configuration loaded from `config.toml`.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Route arithmetic input to the evaluator.
    pub calculator: bool,
    /// Route conversion input to the unit converter.
    pub converter: bool,
    /// Copy the last successful result to the clipboard.
    pub copy_to_clipboard: bool,
    /// Print results as JSON objects.
    pub json: bool,
    /// Default tracing filter when `RUST_LOG` is unset.
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            calculator: true,
            converter: true,
            copy_to_clipboard: false,
            json: false,
            log_level: "warn".to_string(),
        }
    }
}

impl Config {
    /// `$XDG_CONFIG_HOME/quickcalc/config.toml` or the platform equivalent.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("quickcalc").join("config.toml"))
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_toml(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load from an explicit path, or from the default location.
    ///
    /// An explicit path must exist. A missing default file yields defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::load_from_file(path);
        }

        match Self::default_path() {
            Some(path) if path.exists() => Self::load_from_file(path),
            _ => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_is_default() {
        assert_eq!(Config::from_toml("").unwrap(), Config::default());
    }

    #[test]
    fn test_partial_override() {
        let config = Config::from_toml("converter = false\nlog_level = \"debug\"\n").unwrap();
        assert!(config.calculator);
        assert!(!config.converter);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_malformed() {
        assert!(Config::from_toml("calculator = \"yes\"").is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "json = true").unwrap();
        writeln!(file, "copy_to_clipboard = true").unwrap();

        let config = Config::load(Some(file.path())).unwrap();
        assert!(config.json);
        assert!(config.copy_to_clipboard);
    }

    #[test]
    fn test_missing_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        let err = Config::load(Some(&missing)).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
