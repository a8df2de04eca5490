//! Request validation
//!
//! Turns loosely-typed request bodies into typed, trimmed input.
//!
//! ## Rules
//! - Create: `title` required and non-blank; `description` optional (`""`)
//! - Update: at least one of `title` / `description` / `status`;
//!   `title` non-blank when present; `status` one of the four spellings
//!
//! Validation never touches storage, so a rejected request cannot leave a
//! partial change behind.

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ValidationError;
use crate::feature::{Feature, Status};

// =============================================================================
// Request Bodies
// =============================================================================

/// Body of `POST /api/features`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateFeature {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Body of `PUT /api/features/{id}`
///
/// Each field is optional; only supplied fields change. `status` stays a raw
/// string here so an unknown value is reported as "Invalid status" instead
/// of a body parse failure.
///
/// `title` and `status` distinguish a missing key (`None`) from an explicit
/// `null` (`Some(None)`); a null is present and fails its field rule.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateFeature {
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub title: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub status: Option<Option<String>>,
}

/// Any value for a key that is there, `null` included
fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

// =============================================================================
// Validated Input
// =============================================================================

/// Validated create input (already trimmed)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewFeature {
    pub title: String,
    pub description: String,
}

impl NewFeature {
    /// Materialize as a backlog feature with a fresh id
    pub fn into_feature(self) -> Feature {
        Feature::new(self.title, self.description)
    }
}

/// Validated partial update (already trimmed)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeaturePatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<Status>,
}

impl FeaturePatch {
    /// Apply the supplied fields to `feature`, leaving the rest untouched
    pub fn apply(self, feature: &mut Feature) {
        if let Some(title) = self.title {
            feature.title = title;
        }
        if let Some(description) = self.description {
            feature.description = description;
        }
        if let Some(status) = self.status {
            feature.status = status;
        }
    }
}

// =============================================================================
// Validation
// =============================================================================

impl CreateFeature {
    pub fn validate(self) -> Result<NewFeature, ValidationError> {
        let title = self
            .title
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or(ValidationError::TitleRequired)?;

        let description = self.description.as_deref().unwrap_or("").trim();

        Ok(NewFeature {
            title: title.to_string(),
            description: description.to_string(),
        })
    }
}

impl UpdateFeature {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.status.is_none()
    }

    pub fn validate(self) -> Result<FeaturePatch, ValidationError> {
        if self.is_empty() {
            return Err(ValidationError::NoData);
        }

        let title = match self.title {
            Some(title) => {
                let title = title.as_deref().map(str::trim).unwrap_or("");
                if title.is_empty() {
                    return Err(ValidationError::EmptyTitle);
                }
                Some(title.to_string())
            }
            None => None,
        };

        let description = self.description.map(|d| d.trim().to_string());

        let status = self
            .status
            .map(|s| {
                s.as_deref()
                    .and_then(|s| s.parse::<Status>().ok())
                    .ok_or(ValidationError::InvalidStatus)
            })
            .transpose()?;

        Ok(FeaturePatch {
            title,
            description,
            status,
        })
    }
}
