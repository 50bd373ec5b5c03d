//! Platform user records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use pawhub_core::{Email, UserId};

use super::{AdminRecord, Patchable};

/// A platform user as seen from the admin console.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminUser {
    /// Unique user ID.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Account email address.
    pub email: Email,
    /// Whether the user has admin privileges.
    pub is_admin: bool,
    /// Whether the user has a pro subscription.
    pub is_pro: bool,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
}

/// Partial update for a user's flag fields.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct UserPatch {
    /// New admin flag value, if changed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_admin: Option<bool>,
    /// New pro flag value, if changed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_pro: Option<bool>,
}

impl UserPatch {
    /// Patch only the admin flag.
    #[must_use]
    pub const fn admin(value: bool) -> Self {
        Self {
            is_admin: Some(value),
            is_pro: None,
        }
    }

    /// Patch only the pro flag.
    #[must_use]
    pub const fn pro(value: bool) -> Self {
        Self {
            is_admin: None,
            is_pro: Some(value),
        }
    }
}

impl AdminRecord for AdminUser {
    type Id = UserId;

    fn id(&self) -> UserId {
        self.id
    }
}

impl Patchable for AdminUser {
    type Patch = UserPatch;

    fn apply(&mut self, patch: &UserPatch) {
        if let Some(is_admin) = patch.is_admin {
            self.is_admin = is_admin;
        }
        if let Some(is_pro) = patch.is_pro {
            self.is_pro = is_pro;
        }
    }
}
