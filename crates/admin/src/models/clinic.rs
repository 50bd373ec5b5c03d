//! Veterinary clinic records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use pawhub_core::ClinicId;

use super::{AdminRecord, Patchable};

/// A registered veterinary clinic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Clinic {
    /// Unique clinic ID.
    pub id: ClinicId,
    /// Clinic name.
    pub name: String,
    /// City the clinic operates in.
    pub city: String,
    /// Whether the clinic has passed verification.
    pub is_verified: bool,
    /// When the clinic registered.
    pub created_at: DateTime<Utc>,
}

/// Partial update for a clinic's flag fields.
///
/// Clinics carry a single toggleable flag.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct ClinicPatch {
    /// New verified flag value, if changed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_verified: Option<bool>,
}

impl ClinicPatch {
    /// Patch the verified flag.
    #[must_use]
    pub const fn verified(value: bool) -> Self {
        Self {
            is_verified: Some(value),
        }
    }
}

impl AdminRecord for Clinic {
    type Id = ClinicId;

    fn id(&self) -> ClinicId {
        self.id
    }
}

impl Patchable for Clinic {
    type Patch = ClinicPatch;

    fn apply(&mut self, patch: &ClinicPatch) {
        if let Some(is_verified) = patch.is_verified {
            self.is_verified = is_verified;
        }
    }
}
