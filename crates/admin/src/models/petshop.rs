//! Pet shop records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use pawhub_core::PetshopId;

use super::{AdminRecord, Patchable};

/// A registered pet shop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Petshop {
    /// Unique pet shop ID.
    pub id: PetshopId,
    /// Shop name.
    pub name: String,
    /// City the shop operates in.
    pub city: String,
    /// Whether the shop has passed verification.
    pub is_verified: bool,
    /// Whether the shop is featured on the landing page.
    pub is_featured: bool,
    /// When the shop registered.
    pub created_at: DateTime<Utc>,
}

/// Partial update for a pet shop's flag fields.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct PetshopPatch {
    /// New verified flag value, if changed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_verified: Option<bool>,
    /// New featured flag value, if changed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_featured: Option<bool>,
}

impl PetshopPatch {
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

impl AdminRecord for Petshop {
    type Id = PetshopId;

    fn id(&self) -> PetshopId {
        self.id
    }
}

impl Patchable for Petshop {
    type Patch = PetshopPatch;

    fn apply(&mut self, patch: &PetshopPatch) {
        if let Some(is_verified) = patch.is_verified {
            self.is_verified = is_verified;
        }
        if let Some(is_featured) = patch.is_featured {
            self.is_featured = is_featured;
        }
    }
}
