//! View binding contract.
//!
//! Every list view renders from the same triple: the current page of
//! records, the server-side total, and the loading flag. The display
//! rules that all six views share (empty state, count labels, when to
//! show pagination) live here so no view reimplements them.

/// Fixed page size for every admin list view.
pub const PAGE_SIZE: u32 = 20;

/// Point-in-time copy of one kind's list state.
#[derive(Debug, Clone)]
pub struct ListSnapshot<T> {
    /// Current page of records, in server-returned order.
    pub items: Vec<T>,
    /// Full matching count on the server, independent of `items.len()`.
    pub total: u64,
    /// Whether a request for this kind is outstanding.
    pub is_loading: bool,
}

impl<T> ListSnapshot<T> {
    /// Whether the current page has no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether pagination controls should render.
    ///
    /// Only when the total exceeds one full page.
    #[must_use]
    pub fn show_pagination(&self) -> bool {
        self.total > u64::from(PAGE_SIZE)
    }

    /// Pluralized count label, e.g. "1 shelter" / "42 shelters".
    #[must_use]
    pub fn count_label(&self, singular: &str, plural: &str) -> String {
        if self.total == 1 {
            format!("1 {singular}")
        } else {
            format!("{} {plural}", self.total)
        }
    }
}
