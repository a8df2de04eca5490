//! Board Module
//!
//! Coordinates the store and the validator into the four feature operations.
//!
//! ## Responsibilities
//! - Reject empty bodies before any storage access; field rules before any save
//! - Run each load → mutate → save cycle under one lock
//! - Look features up by id (linear scan, ids are unique)

use std::path::Path;

use parking_lot::Mutex;

use crate::config::Config;
use crate::error::{FeatureError, Result, ValidationError};
use crate::feature::Feature;
use crate::store::FeatureStore;
use crate::validate::{CreateFeature, UpdateFeature};

/// The feature board
///
/// ## Concurrency Model
///
/// Every operation (including `list`, which may seed the data file) holds
/// `write_lock` for its whole load → mutate → save cycle, so two mutations
/// in this process can never both read the same pre-mutation collection.
/// Separate processes sharing one data file are not coordinated.
pub struct FeatureBoard {
    /// Board configuration
    config: Config,

    /// Whole-collection JSON store
    store: FeatureStore,

    /// Serializes load → mutate → save cycles
    write_lock: Mutex<()>,
}

impl FeatureBoard {
    /// Open a board with the given config
    ///
    /// The data file itself is created lazily by the first operation.
    pub fn open(config: Config) -> Result<Self> {
        if config.data_dir.as_os_str().is_empty() {
            return Err(FeatureError::Config("data_dir must not be empty".to_string()));
        }

        let store = FeatureStore::new(&config);
        tracing::debug!("Board opened on {}", store.path().display());

        Ok(Self {
            config,
            store,
            write_lock: Mutex::new(()),
        })
    }

    /// Open with a path (convenience method)
    ///
    /// Uses default config with the specified data directory
    pub fn open_path(path: &Path) -> Result<Self> {
        Self::open(Config::builder().data_dir(path).build())
    }

    /// Return the whole collection in insertion order
    pub fn list(&self) -> Result<Vec<Feature>> {
        let _guard = self.write_lock.lock();
        self.store.load()
    }

    /// Create a feature in the backlog
    ///
    /// Steps:
    /// 1. Validate input (no storage access on rejection)
    /// 2. Load, append, save under the lock
    pub fn create(&self, input: CreateFeature) -> Result<Feature> {
        // Step 1: Validate
        let feature = input.validate()?.into_feature();

        // Step 2: Append and persist
        let _guard = self.write_lock.lock();
        let mut features = self.store.load()?;
        features.push(feature.clone());
        self.store.save(&features)?;

        tracing::info!("Created feature {} ({:?})", feature.id, feature.title);
        Ok(feature)
    }

    /// Apply a partial update to the feature with `id`
    ///
    /// Check order:
    /// 1. Empty body → `NoData` (before any storage access)
    /// 2. Unknown id → `NotFound`
    /// 3. Field rules (blank title, unknown status)
    ///
    /// Nothing is saved unless all three pass.
    pub fn update(&self, id: &str, input: UpdateFeature) -> Result<Feature> {
        // Step 1: Reject bodies with no recognized field
        if input.is_empty() {
            return Err(ValidationError::NoData.into());
        }

        // Step 2: Look the feature up
        let _guard = self.write_lock.lock();
        let mut features = self.store.load()?;

        let feature = features
            .iter_mut()
            .find(|f| f.id == id)
            .ok_or_else(|| FeatureError::NotFound { id: id.to_string() })?;

        // Step 3: Validate fields, then apply and persist
        let patch = input.validate()?;
        patch.apply(feature);
        let updated = feature.clone();
        self.store.save(&features)?;

        tracing::info!("Updated feature {} (status={})", updated.id, updated.status);
        Ok(updated)
    }

    /// Remove the feature with `id`
    pub fn delete(&self, id: &str) -> Result<()> {
        let _guard = self.write_lock.lock();
        let mut features = self.store.load()?;

        let position = features
            .iter()
            .position(|f| f.id == id)
            .ok_or_else(|| FeatureError::NotFound { id: id.to_string() })?;

        features.remove(position);
        self.store.save(&features)?;

        tracing::info!("Deleted feature {}", id);
        Ok(())
    }

    // =========================================================================
    // Accessors (for testing and debugging)
    // =========================================================================

    /// Get the data file path
    pub fn data_file(&self) -> &Path {
        self.store.path()
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}
