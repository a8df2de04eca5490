//! Configuration for FeatureBoard
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;

/// Main configuration for a FeatureBoard instance
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Storage Configuration
    // -------------------------------------------------------------------------
    /// Directory holding the data file
    /// Internal structure:
    ///   {data_dir}/
    ///     └── features.json    (the whole feature collection)
    pub data_dir: PathBuf,

    /// Write the sample features when no data file exists yet
    pub seed_on_first_run: bool,

    // -------------------------------------------------------------------------
    // Network Configuration
    // -------------------------------------------------------------------------
    /// HTTP listen address
    pub listen_addr: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./data"),
            seed_on_first_run: true,
            listen_addr: "127.0.0.1:5000".to_string(),
        }
    }
}

impl Config {
    /// Name of the data file inside `data_dir` (not configurable)
    pub const DATA_FILENAME: &'static str = "features.json";

    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Full path of the JSON data file
    pub fn data_file(&self) -> PathBuf {
        self.data_dir.join(Self::DATA_FILENAME)
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the data directory
    pub fn data_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.data_dir = path.into();
        self
    }

    /// Enable or disable first-run seeding
    pub fn seed_on_first_run(mut self, seed: bool) -> Self {
        self.config.seed_on_first_run = seed;
        self
    }

    /// Set the HTTP listen address
    pub fn listen_addr(mut self, addr: impl Into<String>) -> Self {
        self.config.listen_addr = addr.into();
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
