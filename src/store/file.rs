//! File Store
//!
//! Loads and saves the feature list from/to a single JSON file.

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::Result;
use crate::feature::{seed_features, Feature};

/// Whole-collection JSON file store
///
/// Holds no state besides its path: every `load` re-reads the file and every
/// `save` rewrites it. Callers that mutate must serialise their
/// load → mutate → save cycles themselves (see `FeatureBoard`).
#[derive(Debug, Clone)]
pub struct FeatureStore {
    /// Path of the JSON data file
    path: PathBuf,

    /// Seed sample features when the file is missing
    seed_on_first_run: bool,
}

impl FeatureStore {
    /// Suffix of the scratch file used while replacing the data file
    const TMP_SUFFIX: &'static str = "tmp";

    /// Create a store for the data file described by `config`
    ///
    /// Touches nothing on disk; the file is created on first `load`.
    pub fn new(config: &Config) -> Self {
        Self {
            path: config.data_file(),
            seed_on_first_run: config.seed_on_first_run,
        }
    }

    /// Create a store backed by an explicit file path (seeding enabled)
    pub fn at_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            seed_on_first_run: true,
        }
    }

    /// Load the persisted collection
    ///
    /// If the data file does not exist, the seed set (or an empty list when
    /// seeding is disabled) is persisted first and returned.
    /// Unparseable content is an error, never silently replaced.
    pub fn load(&self) -> Result<Vec<Feature>> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return self.initialize(),
            Err(e) => return Err(e.into()),
        };

        let features: Vec<Feature> = serde_json::from_slice(&bytes)?;
        tracing::debug!("Loaded {} features from {}", features.len(), self.path.display());

        Ok(features)
    }

    /// Replace the persisted collection with `features`
    ///
    /// Steps:
    /// 1. Create the containing directory if absent
    /// 2. Write pretty-printed JSON to a sibling temp file
    /// 3. Rename the temp file over the data file
    pub fn save(&self, features: &[Feature]) -> Result<()> {
        // Step 1: Make sure the directory exists
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        // Step 2: Serialize and write the scratch file
        let json = serde_json::to_vec_pretty(features)?;
        let tmp_path = self.tmp_path();
        {
            let mut file = fs::File::create(&tmp_path)?;
            file.write_all(&json)?;
            file.sync_all()?;
        }

        // Step 3: Swap it in
        fs::rename(&tmp_path, &self.path)?;

        tracing::debug!("Saved {} features to {}", features.len(), self.path.display());
        Ok(())
    }

    /// Write the initial collection for a missing data file
    fn initialize(&self) -> Result<Vec<Feature>> {
        let features = if self.seed_on_first_run {
            seed_features()
        } else {
            Vec::new()
        };

        tracing::info!(
            "No data file at {}, initializing with {} features",
            self.path.display(),
            features.len()
        );

        self.save(&features)?;
        Ok(features)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Path of the JSON data file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the data file exists yet
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    fn tmp_path(&self) -> PathBuf {
        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".");
        tmp.push(Self::TMP_SUFFIX);
        PathBuf::from(tmp)
    }
}
