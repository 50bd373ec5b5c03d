//! Animal shelter records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use pawhub_core::{Email, ShelterId};

use super::{AdminRecord, Patchable};

/// A registered animal shelter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shelter {
    /// Unique shelter ID.
    pub id: ShelterId,
    /// Shelter name.
    pub name: String,
    /// Contact email address.
    pub email: Email,
    /// City the shelter operates in.
    pub city: String,
    /// Whether the shelter has passed verification.
    pub is_verified: bool,
    /// Whether the shelter is featured on the landing page.
    pub is_featured: bool,
    /// Number of pets currently listed by the shelter.
    pub pet_count: u32,
    /// When the shelter registered.
    pub created_at: DateTime<Utc>,
}

/// Partial update for a shelter's flag fields.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct ShelterPatch {
    /// New verified flag value, if changed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_verified: Option<bool>,
    /// New featured flag value, if changed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_featured: Option<bool>,
}

impl ShelterPatch {
    /// Patch only the verified flag.
    #[must_use]
    pub const fn verified(value: bool) -> Self {
        Self {
            is_verified: Some(value),
            is_featured: None,
        }
    }

    /// Patch only the featured flag.
    #[must_use]
    pub const fn featured(value: bool) -> Self {
        Self {
            is_verified: None,
            is_featured: Some(value),
        }
    }
}

impl AdminRecord for Shelter {
    type Id = ShelterId;

    fn id(&self) -> ShelterId {
        self.id
    }
}

impl Patchable for Shelter {
    type Patch = ShelterPatch;

    fn apply(&mut self, patch: &ShelterPatch) {
        if let Some(is_verified) = patch.is_verified {
            self.is_verified = is_verified;
        }
        if let Some(is_featured) = patch.is_featured {
            self.is_featured = is_featured;
        }
    }
}
