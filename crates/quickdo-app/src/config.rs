//! Project configuration for quickdo.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, anyhow};
use serde::Deserialize;

const CONFIG_DIR: &str = "quickdo";
const CONFIG_FILE: &str = "config.toml";
const STORAGE_FILE: &str = "tasks.json";

/// Top-level project configuration loaded from `config.toml`.
///
/// The same file also carries the `[tui.keybindings]` tables consumed by the
/// binary crate; unknown keys are ignored here.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ProjectConfig {
    /// Snapshot file override. Relative paths resolve against the working
    /// directory.
    #[serde(default)]
    pub storage: Option<PathBuf>,
}

impl ProjectConfig {
    /// Default configuration file path.
    ///
    /// On Linux/macOS: `~/.config/quickdo/config.toml`
    /// On Windows: `%APPDATA%\quickdo\config.toml`
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
    }

    /// Load from `path`, or from the default location when `None`.
    ///
    /// A missing file (or an unresolvable default location) yields the
    /// default configuration.
    ///
    /// # Errors
    /// Returns an error when an existing file cannot be read or parsed.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(config_path) = path.map(Path::to_path_buf).or_else(Self::default_path) else {
            return Ok(Self::default());
        };
        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&config_path)
            .with_context(|| format!("failed to read {}", config_path.display()))?;
        let config: Self = toml::from_str(&contents)
            .with_context(|| format!("failed to parse {}", config_path.display()))?;
        Ok(config)
    }

    /// Resolve the snapshot file path.
    ///
    /// Precedence: explicit override, then the configured `storage` value,
    /// then `<data_dir>/quickdo/tasks.json`.
    ///
    /// # Errors
    /// Returns an error when no override is given and the platform data
    /// directory cannot be determined.
    pub fn storage_path(&self, override_path: Option<&Path>) -> Result<PathBuf> {
        if let Some(path) = override_path {
            return Ok(path.to_path_buf());
        }
        if let Some(path) = &self.storage {
            return Ok(path.clone());
        }
        dirs::data_dir()
            .map(|dir| dir.join(CONFIG_DIR).join(STORAGE_FILE))
            .ok_or_else(|| anyhow!("failed to resolve the user data directory"))
    }
}
