use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::data::loader::TextEncoding;

/// Name of the optional settings file looked up in the working directory.
pub const CONFIG_FILE: &str = "talent-pool.json";

pub const DEFAULT_DATA_PATH: &str = "Technical Support.csv";

/// Startup settings. Every field may be omitted from the JSON file.
///
/// ```json
/// { "data_path": "exports/Technical Support.csv", "encoding": "latin1" }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Candidate CSV loaded at startup.
    pub data_path: PathBuf,
    pub encoding: TextEncoding,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            encoding: TextEncoding::default(),
        }
    }
}

impl AppConfig {
    /// Read settings from `path`, or fall back to defaults if it does not exist.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::info!("No {} found, using defaults", path.display());
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let config: AppConfig = serde_json::from_str(&text)
            .with_context(|| format!("parsing {}", path.display()))?;
        log::info!("Loaded settings from {}", path.display());
        Ok(config)
    }
}
