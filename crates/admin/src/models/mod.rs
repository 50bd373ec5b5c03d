//! Record types for the admin list views.
//!
//! Each entity kind the console manages has a record struct here, plus a
//! patch struct carrying only its toggleable flag fields. Transactions
//! and platform stats are read-only from the console's perspective and
//! therefore implement [`AdminRecord`] but not [`Patchable`].

pub mod clinic;
pub mod petshop;
pub mod shelter;
pub mod stats;
pub mod transaction;
pub mod user;

pub use clinic::{Clinic, ClinicPatch};
pub use petshop::{Petshop, PetshopPatch};
pub use shelter::{Shelter, ShelterPatch};
pub use stats::PlatformStats;
pub use transaction::{Transaction, TransactionStatus};
pub use user::{AdminUser, UserPatch};

use serde::Serialize;

/// A record managed by one of the admin list views.
///
/// The id is stable for the record's lifetime and unique within its
/// kind's current page.
pub trait AdminRecord: Clone + Send + Sync + 'static {
    /// Typed identifier for this kind.
    type Id: Copy + PartialEq + Send + Sync;

    /// The record's identifier.
    fn id(&self) -> Self::Id;
}

/// An [`AdminRecord`] whose boolean flag fields can be toggled.
///
/// The patch type serializes only the fields that are actually set, so
/// a mutation request carries exactly the changed flags and never the
/// full record.
pub trait Patchable: AdminRecord {
    /// Partial update carrying only changed flag fields.
    type Patch: Serialize + Clone + Send + Sync;

    /// Merge the patch into the record, leaving unset fields untouched.
    fn apply(&mut self, patch: &Self::Patch);
}
