//! Engine configuration
//!
//! Stored as RON. Every field has a default, so a config file only needs the
//! values it changes:
//!
//! ```ron
//! (
//!     window: (title: "Krystal", width: 800, height: 600),
//!     max_layer: 4,
//! )
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Config file name looked up in the working directory
pub const CONFIG_FILE: &str = "krystal.ron";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: ron::error::SpannedError,
    },
}

/// Window settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    /// Whether Esc closes the window
    pub escape_closes: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: String::from("Krystal"),
            width: 640,
            height: 480,
            escape_closes: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub window: WindowConfig,
    /// Number of draw layers
    pub max_layer: u32,
    /// Directory holding `.spr` sprite files
    pub sprite_dir: PathBuf,
    /// Directory holding `.wav`/`.ogg` sounds
    pub sound_dir: PathBuf,
    /// Extra `tracing` filter directives, e.g. `"krystal=trace"`
    pub log_filter: Option<String>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            max_layer: 3,
            sprite_dir: PathBuf::from("sprites"),
            sound_dir: PathBuf::from("sounds"),
            log_filter: None,
        }
    }
}

impl EngineConfig {
    pub fn from_ron(text: &str) -> Result<Self, ron::error::SpannedError> {
        ron::from_str(text)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_ron(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load `path`, falling back to defaults when it is missing or invalid
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(ConfigError::Io { source, .. })
                if source.kind() == std::io::ErrorKind::NotFound =>
            {
                Self::default()
            }
            Err(e) => {
                tracing::warn!(error = %e, "using default config");
                Self::default()
            }
        }
    }

    /// First existing config file: working directory, then the user config dir
    pub fn default_path() -> Option<PathBuf> {
        let local = PathBuf::from(CONFIG_FILE);
        if local.exists() {
            return Some(local);
        }
        dirs::config_dir()
            .map(|dir| dir.join("krystal").join(CONFIG_FILE))
            .filter(|path| path.exists())
    }

    pub fn to_ron(&self) -> Result<String, ron::Error> {
        ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::new())
    }
}
