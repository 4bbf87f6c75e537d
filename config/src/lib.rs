//! Configuration for Breaker.
//!
//! ```toml
//! [app]
//! ascii_only = false
//! high_contrast = false
//!
//! [fallback]
//! title = "Uh oh!"
//! message = "Something's gone wrong. Try refreshing the page."
//! ```

use serde::Deserialize;
use std::{
    env, fs,
    path::{Path, PathBuf},
};
use thiserror::Error;

/// Overrides the default `~/.breaker/config.toml` location.
pub const CONFIG_PATH_ENV: &str = "BREAKER_CONFIG";

#[derive(Debug, Default, Deserialize)]
pub struct BreakerConfig {
    pub app: Option<AppConfig>,
    pub fallback: Option<FallbackConfig>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config at {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl ConfigError {
    pub fn path(&self) -> &Path {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct AppConfig {
    /// Use ASCII-only glyphs for button brackets and separators.
    #[serde(default)]
    pub ascii_only: bool,
    /// Enable a high-contrast color palette.
    #[serde(default)]
    pub high_contrast: bool,
}

/// Copy shown by the boundary after it contains a fault.
#[derive(Debug, Default, Deserialize)]
pub struct FallbackConfig {
    pub title: Option<String>,
    pub message: Option<String>,
}

impl BreakerConfig {
    /// Load from the default location. A missing file is `Ok(None)`.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        match config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(None),
        }
    }

    pub fn load_from(path: &Path) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            return Ok(None);
        }

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read config at {:?}: {}", path, err);
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
        };

        match toml::from_str(&content) {
            Ok(config) => Ok(Some(config)),
            Err(err) => {
                tracing::warn!("Failed to parse config at {:?}: {}", path, err);
                Err(ConfigError::Parse {
                    path: path.to_path_buf(),
                    source: err,
                })
            }
        }
    }

    #[must_use]
    pub fn path() -> Option<PathBuf> {
        config_path()
    }

    #[must_use]
    pub fn ascii_only(&self) -> bool {
        self.app.as_ref().is_some_and(|app| app.ascii_only)
    }

    #[must_use]
    pub fn high_contrast(&self) -> bool {
        self.app.as_ref().is_some_and(|app| app.high_contrast)
    }

    /// Configured fallback title, ignoring blank values.
    #[must_use]
    pub fn fallback_title(&self) -> Option<&str> {
        self.fallback
            .as_ref()
            .and_then(|f| f.title.as_deref())
            .filter(|s| !s.trim().is_empty())
    }

    /// Configured fallback message, ignoring blank values.
    #[must_use]
    pub fn fallback_message(&self) -> Option<&str> {
        self.fallback
            .as_ref()
            .and_then(|f| f.message.as_deref())
            .filter(|s| !s.trim().is_empty())
    }
}

#[must_use]
pub fn config_path() -> Option<PathBuf> {
    if let Ok(path) = env::var(CONFIG_PATH_ENV)
        && !path.trim().is_empty()
    {
        return Some(PathBuf::from(path));
    }
    dirs::home_dir().map(|home| home.join(".breaker").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::{BreakerConfig, ConfigError};

    #[test]
    fn missing_file_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = BreakerConfig::load_from(&dir.path().join("config.toml")).unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn empty_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "").unwrap();

        let config = BreakerConfig::load_from(&path).unwrap().unwrap();
        assert!(!config.ascii_only());
        assert!(!config.high_contrast());
        assert_eq!(config.fallback_title(), None);
        assert_eq!(config.fallback_message(), None);
    }

    #[test]
    fn full_file_is_parsed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            r#"
[app]
ascii_only = true
high_contrast = true

[fallback]
title = "Oops"
message = "Press r to refresh."
"#,
        )
        .unwrap();

        let config = BreakerConfig::load_from(&path).unwrap().unwrap();
        assert!(config.ascii_only());
        assert!(config.high_contrast());
        assert_eq!(config.fallback_title(), Some("Oops"));
        assert_eq!(config.fallback_message(), Some("Press r to refresh."));
    }

    #[test]
    fn blank_fallback_values_are_ignored() {
        let config: BreakerConfig = toml::from_str(
            r#"
[fallback]
title = "   "
"#,
        )
        .unwrap();
        assert_eq!(config.fallback_title(), None);
    }

    #[test]
    fn invalid_toml_reports_parse_error_with_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[app\nascii_only = yes").unwrap();

        let err = BreakerConfig::load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert_eq!(err.path(), path.as_path());
        assert!(err.to_string().starts_with("failed to parse config at"));
    }
}
