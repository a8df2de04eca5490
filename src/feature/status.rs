//! Status definitions
//!
//! The fixed set of columns a feature can sit in.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Feature status (board column)
///
/// Transitions are unconstrained: any status may move to any other.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Status {
    #[default]
    Backlog,
    Todo,
    InProgress,
    Done,
}

impl Status {
    /// All statuses in board order
    pub const ALL: [Status; 4] = [Status::Backlog, Status::Todo, Status::InProgress, Status::Done];

    /// Wire spelling of the status
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Backlog => "backlog",
            Status::Todo => "todo",
            Status::InProgress => "inProgress",
            Status::Done => "done",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string is not one of the four status spellings
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown status: {0:?}")]
pub struct ParseStatusError(pub String);

impl FromStr for Status {
    type Err = ParseStatusError;

    /// Parse the exact wire spelling (case-sensitive)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Status::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| ParseStatusError(s.to_string()))
    }
}
