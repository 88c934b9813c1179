//! Configuration file handling.
//!
//! The config file is optional. It lives at
//! `<config dir>/timeline-days/config.toml` unless a path is given
//! explicitly; command-line flags take precedence over it.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::partition::{PartitionOptions, SliceOrder};

/// Output written when no `--output` flag is given.
pub const DEFAULT_OUTPUT: &str = "timeline_by_day.json";

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub output: OutputConfig,
}

/// `[output]` section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Embed full point arrays in path summaries
    pub include_timeline_points: bool,
    /// Indent the output document
    pub pretty: bool,
    /// Ordering of slices within a day
    pub slice_order: SliceOrder,
    /// File written when `--output` is not given
    pub default_output: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            include_timeline_points: false,
            pretty: true,
            slice_order: SliceOrder::default(),
            default_output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

impl Config {
    /// Default location of the config file.
    pub fn config_path() -> Result<PathBuf> {
        let dir = dirs::config_dir().context("Could not determine config directory")?;
        Ok(Self::path_in(&dir))
    }

    fn path_in(config_dir: &Path) -> PathBuf {
        config_dir.join("timeline-days").join("config.toml")
    }

    /// Load from the default location, falling back to defaults when the
    /// file does not exist or there is no config directory.
    pub fn load() -> Result<Self> {
        Self::load_default_in(dirs::config_dir())
    }

    fn load_default_in(config_dir: Option<PathBuf>) -> Result<Self> {
        let Some(dir) = config_dir else {
            tracing::debug!("No config directory, using defaults");
            return Ok(Self::default());
        };
        let path = Self::path_in(&dir);
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }
        Self::load_from(&path)
    }

    /// Load from an explicit path. The file must exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config = Self::from_toml_str(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))?;
        tracing::debug!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Partition options implied by this config alone.
    pub fn partition_options(&self) -> PartitionOptions {
        PartitionOptions {
            include_timeline_points: self.output.include_timeline_points,
            slice_order: self.output.slice_order,
        }
    }
}
