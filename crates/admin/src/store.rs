//! In-memory resource state for the admin session.
//!
//! [`AdminStore`] is the process-wide container every mounted view reads
//! from. It holds one [`ResourceCell`] per entity kind, the stats cell,
//! and the single shared error slot. It performs no I/O; all writes come
//! from the access facade in [`crate::console`].
//!
//! Every operation takes one lock for its duration and nothing here is
//! async, so each store operation is atomic with respect to the others.
//! Overlapping requests for the same kind therefore resolve to whichever
//! response lands last.

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::models::{
    AdminRecord, AdminUser, Clinic, Patchable, Petshop, PlatformStats, Shelter, Transaction,
};
use crate::view::ListSnapshot;

/// State held for one entity kind.
#[derive(Debug)]
struct SliceState<T> {
    items: Vec<T>,
    total: u64,
    loading: bool,
    selected: Option<T>,
}

impl<T> Default for SliceState<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            total: 0,
            loading: false,
            selected: None,
        }
    }
}

/// Reactive state cell for one entity kind.
///
/// All operations are synchronous, total, and infallible: malformed
/// input degrades to a no-op rather than an error.
#[derive(Debug)]
pub struct ResourceCell<T: AdminRecord> {
    state: RwLock<SliceState<T>>,
}

impl<T: AdminRecord> Default for ResourceCell<T> {
    fn default() -> Self {
        Self {
            state: RwLock::new(SliceState::default()),
        }
    }
}

impl<T: AdminRecord> ResourceCell<T> {
    // A poisoned lock means some caller panicked mid-read; the state
    // itself is still structurally sound, so keep serving it.
    fn read(&self) -> RwLockReadGuard<'_, SliceState<T>> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, SliceState<T>> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Replace the page and total wholesale.
    pub fn set_collection(&self, records: Vec<T>, total: u64) {
        let mut state = self.write();
        state.items = records;
        state.total = total;
    }

    /// Remove the record with the given id, preserving the order of the
    /// rest and decrementing the total when something was removed.
    ///
    /// Returns whether a record was removed; an absent id is a no-op.
    pub fn remove_record(&self, id: T::Id) -> bool {
        let mut state = self.write();
        let before = state.items.len();
        state.items.retain(|record| record.id() != id);
        let removed = state.items.len() < before;
        if removed {
            state.total = state.total.saturating_sub(1);
        }
        removed
    }

    /// Set the loading flag for this kind.
    pub fn set_loading(&self, loading: bool) {
        self.write().loading = loading;
    }

    /// Whether a request for this kind is outstanding.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.read().loading
    }

    /// The current page of records, in server-returned order.
    #[must_use]
    pub fn items(&self) -> Vec<T> {
        self.read().items.clone()
    }

    /// The server-side total for the current filter.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.read().total
    }

    /// Select a record for detail inspection.
    pub fn set_selected(&self, record: Option<T>) {
        self.write().selected = record;
    }

    /// Clear the detail selection.
    pub fn clear_selected(&self) {
        self.write().selected = None;
    }

    /// The currently selected record, if any.
    #[must_use]
    pub fn selected(&self) -> Option<T> {
        self.read().selected.clone()
    }

    /// The view-binding triple for this kind.
    #[must_use]
    pub fn snapshot(&self) -> ListSnapshot<T> {
        let state = self.read();
        ListSnapshot {
            items: state.items.clone(),
            total: state.total,
            is_loading: state.loading,
        }
    }

    fn clear(&self) {
        *self.write() = SliceState::default();
    }
}

impl<T: Patchable> ResourceCell<T> {
    /// Merge a patch into the record with the given id, in place,
    /// preserving its position.
    ///
    /// Returns whether a record was patched; an absent id is a no-op.
    pub fn update_record(&self, id: T::Id, patch: &T::Patch) -> bool {
        let mut state = self.write();
        match state.items.iter_mut().find(|record| record.id() == id) {
            Some(record) => {
                record.apply(patch);
                true
            }
            None => false,
        }
    }
}

/// State held for the stats singleton.
#[derive(Debug, Default)]
struct StatsState {
    stats: Option<PlatformStats>,
    loading: bool,
}

/// Reactive cell for the stats singleton (fetch-only, no collection).
#[derive(Debug, Default)]
pub struct StatsCell {
    state: RwLock<StatsState>,
}

impl StatsCell {
    fn read(&self) -> RwLockReadGuard<'_, StatsState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, StatsState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Replace the stats wholesale.
    pub fn set(&self, stats: PlatformStats) {
        self.write().stats = Some(stats);
    }

    /// The current stats, if fetched.
    #[must_use]
    pub fn get(&self) -> Option<PlatformStats> {
        self.read().stats.clone()
    }

    /// Set the loading flag.
    pub fn set_loading(&self, loading: bool) {
        self.write().loading = loading;
    }

    /// Whether a stats request is outstanding.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.read().loading
    }

    fn clear(&self) {
        *self.write() = StatsState::default();
    }
}

/// Process-wide state for one admin session.
#[derive(Debug, Default)]
pub struct AdminStore {
    users: ResourceCell<AdminUser>,
    shelters: ResourceCell<Shelter>,
    petshops: ResourceCell<Petshop>,
    clinics: ResourceCell<Clinic>,
    transactions: ResourceCell<Transaction>,
    stats: StatsCell,
    error: RwLock<Option<String>>,
}

impl AdminStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// User list state.
    #[must_use]
    pub fn users(&self) -> &ResourceCell<AdminUser> {
        &self.users
    }

    /// Shelter list state.
    #[must_use]
    pub fn shelters(&self) -> &ResourceCell<Shelter> {
        &self.shelters
    }

    /// Pet shop list state.
    #[must_use]
    pub fn petshops(&self) -> &ResourceCell<Petshop> {
        &self.petshops
    }

    /// Clinic list state.
    #[must_use]
    pub fn clinics(&self) -> &ResourceCell<Clinic> {
        &self.clinics
    }

    /// Transaction list state (read-only kind).
    #[must_use]
    pub fn transactions(&self) -> &ResourceCell<Transaction> {
        &self.transactions
    }

    /// Platform stats state.
    #[must_use]
    pub fn stats(&self) -> &StatsCell {
        &self.stats
    }

    /// The shared error slot: the latest operation's message, if any.
    ///
    /// One slot for the whole session; the most recent operation always
    /// overwrites it, whatever kind it touched.
    #[must_use]
    pub fn error(&self) -> Option<String> {
        self.error
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub(crate) fn set_error(&self, message: String) {
        *self.error.write().unwrap_or_else(PoisonError::into_inner) = Some(message);
    }

    pub(crate) fn clear_error(&self) {
        *self.error.write().unwrap_or_else(PoisonError::into_inner) = None;
    }

    /// Session teardown: empty every slice, zero every total, reset
    /// loading flags and selections, drop stats and any error.
    pub fn clear_all(&self) {
        self.users.clear();
        self.shelters.clear();
        self.petshops.clear();
        self.clinics.clear();
        self.transactions.clear();
        self.stats.clear();
        self.clear_error();
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use pawhub_core::{Email, ShelterId};
    use rust_decimal::Decimal;

    use crate::models::{ShelterPatch, TransactionStatus};
    use pawhub_core::TransactionId;

    use super::*;

    fn shelter(id: i64, name: &str) -> Shelter {
        Shelter {
            id: ShelterId::new(id),
            name: name.to_string(),
            email: Email::parse("shelter@example.com").unwrap(),
            city: "Porto".to_string(),
            is_verified: false,
            is_featured: false,
            pet_count: 3,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_set_collection_replaces_wholesale() {
        let cell = ResourceCell::<Shelter>::default();
        cell.set_collection(vec![shelter(1, "A")], 1);
        cell.set_collection(vec![shelter(2, "B"), shelter(3, "C")], 40);

        let snapshot = cell.snapshot();
        assert_eq!(snapshot.items.len(), 2);
        assert_eq!(snapshot.total, 40);
        assert_eq!(snapshot.items[0].id, ShelterId::new(2));
    }

    #[test]
    fn test_update_record_preserves_position_and_other_fields() {
        let cell = ResourceCell::<Shelter>::default();
        cell.set_collection(vec![shelter(1, "A"), shelter(2, "B"), shelter(3, "C")], 3);

        assert!(cell.update_record(ShelterId::new(2), &ShelterPatch::verified(true)));

        let items = cell.items();
        assert_eq!(items[1].id, ShelterId::new(2));
        assert!(items[1].is_verified);
        assert!(!items[1].is_featured);
        assert_eq!(items[1].name, "B");
        assert!(!items[0].is_verified);
        assert!(!items[2].is_verified);
    }

    #[test]
    fn test_update_record_absent_id_is_noop() {
        let cell = ResourceCell::<Shelter>::default();
        cell.set_collection(vec![shelter(1, "A")], 1);

        assert!(!cell.update_record(ShelterId::new(99), &ShelterPatch::verified(true)));
        assert_eq!(cell.items().len(), 1);
        assert!(!cell.items()[0].is_verified);
    }

    #[test]
    fn test_empty_patch_changes_nothing() {
        let cell = ResourceCell::<Shelter>::default();
        cell.set_collection(vec![shelter(1, "A")], 1);
        let before = cell.items();

        assert!(cell.update_record(ShelterId::new(1), &ShelterPatch::default()));
        assert_eq!(cell.items(), before);
    }

    #[test]
    fn test_remove_record_splices_and_decrements_total() {
        let cell = ResourceCell::<Shelter>::default();
        cell.set_collection(vec![shelter(1, "A"), shelter(2, "B"), shelter(3, "C")], 25);

        assert!(cell.remove_record(ShelterId::new(2)));
        let snapshot = cell.snapshot();
        assert_eq!(snapshot.total, 24);
        assert_eq!(
            snapshot.items.iter().map(|s| s.id.as_i64()).collect::<Vec<_>>(),
            vec![1, 3]
        );
    }

    #[test]
    fn test_remove_record_absent_id_leaves_total_alone() {
        let cell = ResourceCell::<Shelter>::default();
        cell.set_collection(vec![shelter(1, "A")], 5);

        assert!(!cell.remove_record(ShelterId::new(99)));
        assert_eq!(cell.total(), 5);
        assert_eq!(cell.items().len(), 1);
    }

    #[test]
    fn test_remove_record_total_never_negative() {
        let cell = ResourceCell::<Shelter>::default();
        cell.set_collection(vec![shelter(1, "A")], 0);

        assert!(cell.remove_record(ShelterId::new(1)));
        assert_eq!(cell.total(), 0);
    }

    #[test]
    fn test_selected_lifecycle_independent_of_collection() {
        let cell = ResourceCell::<Shelter>::default();
        cell.set_selected(Some(shelter(7, "Solo")));
        cell.set_collection(Vec::new(), 0);
        assert_eq!(cell.selected().map(|s| s.id), Some(ShelterId::new(7)));

        cell.clear_selected();
        assert!(cell.selected().is_none());
    }

    #[test]
    fn test_clear_all_resets_everything() {
        let store = AdminStore::new();
        store.shelters().set_collection(vec![shelter(1, "A")], 30);
        store.shelters().set_loading(true);
        store.shelters().set_selected(Some(shelter(1, "A")));
        store.transactions().set_collection(
            vec![Transaction {
                id: TransactionId::new(1),
                buyer_name: "Ana".to_string(),
                seller_name: "A".to_string(),
                amount: Decimal::new(1000, 2),
                status: TransactionStatus::Completed,
                created_at: Utc::now(),
            }],
            1,
        );
        store.stats().set(PlatformStats {
            total_users: 10,
            total_shelters: 1,
            total_petshops: 0,
            total_clinics: 0,
            total_transactions: 1,
            total_revenue: Decimal::new(1000, 2),
        });
        store.set_error("boom".to_string());

        store.clear_all();

        assert!(store.shelters().items().is_empty());
        assert_eq!(store.shelters().total(), 0);
        assert!(!store.shelters().is_loading());
        assert!(store.shelters().selected().is_none());
        assert!(store.transactions().items().is_empty());
        assert!(store.stats().get().is_none());
        assert!(store.error().is_none());
    }

    #[test]
    fn test_error_slot_last_write_wins() {
        let store = AdminStore::new();
        store.set_error("first".to_string());
        store.set_error("second".to_string());
        assert_eq!(store.error().as_deref(), Some("second"));

        store.clear_error();
        assert!(store.error().is_none());
    }
}
