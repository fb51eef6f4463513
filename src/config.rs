//! Mainframe configuration.
//!
//! Loaded from `~/.mainframe/config.toml` unless `--config` names another
//! file. The default file is optional; every key has a default.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::engine::EngineOptions;

/// Mainframe configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct Config {
    /// Pause before the next step's briefing appears, in milliseconds.
    pub briefing_delay_ms: u64,

    /// Pause before the completion message appears, in milliseconds.
    pub completion_delay_ms: u64,

    /// Directory of generated mission plans (`<domain>.json`).
    /// Domains without a plan use the built-in table.
    pub missions_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            briefing_delay_ms: 1000,
            completion_delay_ms: 1000,
            missions_dir: None,
        }
    }
}

impl Config {
    /// Load config from `explicit`, or from the default path.
    ///
    /// A missing default file yields defaults. A missing explicit file is
    /// an error.
    pub fn load(explicit: Option<&Path>) -> Result<Self, String> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => match Self::path() {
                Some(path) if path.exists() => path,
                _ => return Ok(Self::default()),
            },
        };

        let contents = fs::read_to_string(&path)
            .map_err(|e| format!("failed to read {}: {e}", path.display()))?;

        toml::from_str(&contents).map_err(|e| format!("invalid config at {}: {e}", path.display()))
    }

    /// The config file path: `~/.mainframe/config.toml`.
    pub fn path() -> Option<PathBuf> {
        Self::home_dir().map(|h| h.join("config.toml"))
    }

    /// `~/.mainframe`.
    pub fn home_dir() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".mainframe"))
    }

    pub fn engine_options(&self) -> EngineOptions {
        EngineOptions {
            briefing_delay: Duration::from_millis(self.briefing_delay_ms),
            completion_delay: Duration::from_millis(self.completion_delay_ms),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use tempfile::TempDir;

    #[test]
    fn empty_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "").unwrap();

        assert_eq!(Config::load(Some(&path)).unwrap(), Config::default());
    }

    #[test]
    fn keys_are_kebab_case() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            "briefing-delay-ms = 250\nmissions-dir = \"/srv/missions\"\n",
        )
        .unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.briefing_delay_ms, 250);
        assert_eq!(config.completion_delay_ms, 1000);
        assert_eq!(config.missions_dir, Some(PathBuf::from("/srv/missions")));
        assert_eq!(
            config.engine_options().briefing_delay,
            Duration::from_millis(250)
        );
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let err = Config::load(Some(&dir.path().join("nope.toml"))).unwrap_err();
        assert!(err.contains("failed to read"));
    }

    #[test]
    fn unknown_key_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "default-identity = \"x\"\n").unwrap();

        let err = Config::load(Some(&path)).unwrap_err();
        assert!(err.starts_with("invalid config"));
    }
}
