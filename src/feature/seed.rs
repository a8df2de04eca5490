//! Sample features written on first run

use super::{Feature, Status};

const SEED: [(&str, &str, Status); 4] = [
    (
        "User Authentication",
        "Implement login and signup functionality with OAuth support",
        Status::Backlog,
    ),
    (
        "Dashboard Analytics",
        "Create interactive charts and metrics visualization",
        Status::Todo,
    ),
    (
        "Dark Mode Support",
        "Add theme toggling between light and dark modes",
        Status::InProgress,
    ),
    (
        "Search Functionality",
        "Implement full-text search with filters and sorting",
        Status::Backlog,
    ),
];

/// Build the seed set, each feature with a fresh id
pub fn seed_features() -> Vec<Feature> {
    SEED.iter()
        .map(|(title, description, status)| Feature::with_status(*title, *description, *status))
        .collect()
}
