//! Unpacking configuration
//!
//! Settings can come from a TOML file and are then overridden by
//! command-line flags. Every job receives its paths explicitly through
//! this struct; nothing is read from globals.

use log::info;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::pvr::errors::{AtlasError, AtlasResult};

/// Default directory scanned for descriptors
pub const DEFAULT_SOURCE_ROOT: &str = "resources";

/// Default directory receiving the unpacked sprites
pub const DEFAULT_OUTPUT_ROOT: &str = "out";

/// Default descriptor file extension
pub const DEFAULT_DESCRIPTOR_EXTENSION: &str = "spr";

/// Settings for a batch or single-sprite run
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UnpackConfig {
    /// Directory scanned for descriptors
    pub source_root: PathBuf,
    /// Directory receiving the PNG output, mirroring the source layout
    pub output_root: PathBuf,
    /// Descriptor file extension, without the dot
    pub descriptor_extension: String,
    /// Which frame of each descriptor to extract
    pub frame_index: usize,
    /// Skip remaining jobs once one fails
    pub fail_fast: bool,
    /// Worker threads; None uses one per core
    pub threads: Option<usize>,
}

impl Default for UnpackConfig {
    fn default() -> Self {
        UnpackConfig {
            source_root: PathBuf::from(DEFAULT_SOURCE_ROOT),
            output_root: PathBuf::from(DEFAULT_OUTPUT_ROOT),
            descriptor_extension: DEFAULT_DESCRIPTOR_EXTENSION.to_string(),
            frame_index: 0,
            fail_fast: false,
            threads: None,
        }
    }
}

impl UnpackConfig {
    /// Parses a configuration from TOML text
    ///
    /// Missing keys keep their defaults.
    pub fn from_toml(text: &str) -> AtlasResult<Self> {
        let config: UnpackConfig = toml::from_str(text)
            .map_err(|e| AtlasError::ConfigError(format!("Invalid configuration: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads a configuration file
    pub fn load(path: &Path) -> AtlasResult<Self> {
        info!("Loading configuration from {}", path.display());
        let text = fs::read_to_string(path).map_err(|e| {
            AtlasError::ConfigError(format!("Cannot read {}: {}", path.display(), e))
        })?;
        Self::from_toml(&text)
    }

    /// Checks values that deserialization alone cannot
    pub fn validate(&self) -> AtlasResult<()> {
        if self.descriptor_extension.is_empty() || self.descriptor_extension.starts_with('.') {
            return Err(AtlasError::ConfigError(format!(
                "Descriptor extension must be non-empty and given without a dot, got '{}'",
                self.descriptor_extension
            )));
        }
        if self.threads == Some(0) {
            return Err(AtlasError::ConfigError("Thread count must be at least 1".to_string()));
        }
        Ok(())
    }
}
