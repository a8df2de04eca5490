//! Feature Module
//!
//! The single entity managed by the board.
//!
//! ## Wire / File Shape
//! ```text
//! {
//!   "id":          "5b0c…-uuid",   server-assigned, immutable
//!   "title":       "Dark Mode",    non-empty, trimmed
//!   "description": "",             trimmed, may be empty
//!   "status":      "inProgress"    backlog | todo | inProgress | done
//! }
//! ```

mod status;
mod seed;

pub use status::{Status, ParseStatusError};
pub use seed::seed_features;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A kanban-style work item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feature {
    /// Unique identifier (UUID v4 string for features created here)
    pub id: String,

    /// Short name shown on the card
    pub title: String,

    /// Free-form details
    #[serde(default)]
    pub description: String,

    /// Column the feature sits in
    pub status: Status,
}

impl Feature {
    /// Create a feature with a freshly generated id in the backlog
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::with_status(title, description, Status::Backlog)
    }

    /// Create a feature with a freshly generated id and the given status
    pub fn with_status(
        title: impl Into<String>,
        description: impl Into<String>,
        status: Status,
    ) -> Self {
        Self {
            id: generate_id(),
            title: title.into(),
            description: description.into(),
            status,
        }
    }
}

/// Generate a new random feature id
pub fn generate_id() -> String {
    Uuid::new_v4().to_string()
}
