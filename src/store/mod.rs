//! Store Module
//!
//! Persists the whole feature collection as one JSON document.
//!
//! ## Responsibilities
//! - Load the full collection on every request (no cache)
//! - Seed the sample features when no data file exists
//! - Replace the whole file on every save (no partial writes, no merge)
//!
//! ## File Format
//! ```text
//! {data_dir}/features.json
//! [
//!   {
//!     "id": "…",
//!     "title": "…",
//!     "description": "…",
//!     "status": "backlog"
//!   },
//!   ...
//! ]
//! ```
//!
//! Writes go to `features.json.tmp` first and are renamed over the data
//! file, so a reader sees either the previous or the new collection.

mod file;

pub use file::FeatureStore;
