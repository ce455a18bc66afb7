use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{BoardError, Result};

const CONFIG_FILENAME: &str = ".ticketrail.json";
const DEFAULT_TICK_RATE_MS: u64 = 100;

/// Configuration for ticketrail, read from .ticketrail.json in the working
/// directory. Order data itself is never persisted; this only tunes the
/// session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BoardConfig {
    /// Event poll interval for the board loop, in milliseconds
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,

    /// Demo orders to seed when no --demo flag is given
    #[serde(default)]
    pub demo_orders: usize,

    /// Capture mouse input for drag-and-drop
    #[serde(default = "default_mouse")]
    pub mouse: bool,
}

fn default_tick_rate_ms() -> u64 {
    DEFAULT_TICK_RATE_MS
}

fn default_mouse() -> bool {
    true
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: DEFAULT_TICK_RATE_MS,
            demo_orders: 0,
            mouse: true,
        }
    }
}

impl BoardConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        Self::load_file(config_dir.as_ref().join(CONFIG_FILENAME))
    }

    /// Load config from an explicit file path, or return defaults if not found
    pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(BoardError::Io)?;
        let config: BoardConfig =
            serde_json::from_str(&content).map_err(BoardError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(BoardError::Io)?;
        }

        let path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(BoardError::Serialization)?;
        fs::write(path, content).map_err(BoardError::Io)?;
        Ok(())
    }
}
