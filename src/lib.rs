//! # FeatureBoard
//!
//! A small kanban-style feature tracker:
//! - One JSON file holding the whole feature collection
//! - Seed data written on first run
//! - Typed validation of every mutation
//! - REST API over HTTP (list / create / update / delete)
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      HTTP Server                             │
//! │              (axum router, JSON bodies)                      │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                      FeatureBoard                            │
//! │        (validate → lock → load → mutate → save)              │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌─────────────┐
//!   │  Validator  │          │    Store    │
//!   │ (pure, no   │          │ (JSON file, │
//!   │  I/O)       │          │  seeding)   │
//!   └─────────────┘          └─────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod feature;
pub mod validate;
pub mod store;
pub mod board;
pub mod network;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{FeatureError, Result, ValidationError};
pub use config::Config;
pub use feature::{Feature, Status};
pub use board::FeatureBoard;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of FeatureBoard
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
