//! Configuration for the Strand CLI.
//!
//! Settings come from `strand.toml` in the working directory, falling back
//! to the user config dir. Command-line flags win over the file.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Strand CLI configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub run: RunConfig,
    #[serde(default)]
    pub viruses: VirusConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Emit machine-readable JSON instead of colored summaries.
    #[serde(default)]
    pub json: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunConfig {
    /// Use the multi-environment block path by default.
    #[serde(default)]
    pub blocks: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VirusConfig {
    /// Virus library loaded when `--viruses` is not given.
    #[serde(default)]
    pub library: Option<PathBuf>,
}

impl Config {
    /// Load the nearest config file, or defaults when none exists.
    pub fn load() -> Result<Self> {
        match Self::find() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    fn find() -> Option<PathBuf> {
        let local = PathBuf::from("strand.toml");
        if local.exists() {
            return Some(local);
        }
        let user = dirs::config_dir()?.join("strand").join("strand.toml");
        user.exists().then_some(user)
    }

    fn load_from(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        toml::from_str(&text).with_context(|| format!("Invalid config: {}", path.display()))
    }
}
