use crate::logging;
use crate::source::reader::{
    FileLocator, ResourceLocator, SearchPathLocator, SourceMapReader, DEFAULT_RESOURCE,
};
use crate::{Result, SourceMapError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Default configuration file name
pub const DEFAULT_CONFIG_FILE: &str = ".srcmap.toml";

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub source_map: SourceMapConfig,
    #[serde(default)]
    pub derive: DeriveConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct SourceMapConfig {
    /// Resource name looked up on the search path
    #[serde(default)]
    pub resource: Option<String>,
    /// Ordered root directories to search for the resource
    #[serde(default)]
    pub search_paths: Vec<PathBuf>,
    /// Explicit source map file; takes precedence over the search path
    #[serde(default)]
    pub file: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct DeriveConfig {
    /// Default source root prefix for `derive`
    #[serde(default)]
    pub source_root: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct OutputConfig {
    /// Default output format for `dump` ("text" or "json")
    #[serde(default)]
    pub format: Option<String>,
}

impl Config {
    /// Load configuration from a file in the current directory
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new(DEFAULT_CONFIG_FILE))
    }

    /// Load configuration from `path`, falling back to defaults when it doesn't exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }
        Self::load_file(path)
    }

    /// Load configuration from `path`, which must exist
    pub fn load_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            SourceMapError::Config(format!("Failed to read config file {:?}: {}", path, e))
        })?;

        let config = Self::parse(&content).map_err(|e| {
            SourceMapError::Config(format!("Failed to parse TOML config from {:?}: {}", path, e))
        })?;

        logging::log_config_loaded(&path.display().to_string());
        Ok(config)
    }

    pub fn parse(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Load default config if file is missing or unreadable
    pub fn load_or_default() -> Self {
        match Self::load() {
            Ok(config) => config,
            Err(e) => {
                warn!("Warning: Failed to load config: {}. Using defaults.", e);
                Config::default()
            }
        }
    }

    pub fn resource_name(&self) -> &str {
        self.source_map
            .resource
            .as_deref()
            .unwrap_or(DEFAULT_RESOURCE)
    }

    /// Locator described by this config. An explicit file wins over the
    /// search path; with neither set the current directory is searched.
    pub fn locator(&self) -> Box<dyn ResourceLocator> {
        if let Some(file) = &self.source_map.file {
            return Box::new(FileLocator::new(file.clone()));
        }
        if self.source_map.search_paths.is_empty() {
            Box::new(SearchPathLocator::new(["."]))
        } else {
            Box::new(SearchPathLocator::new(
                self.source_map.search_paths.iter().cloned(),
            ))
        }
    }

    pub fn reader(&self) -> SourceMapReader {
        SourceMapReader::with_resource(self.locator(), self.resource_name())
    }
}
