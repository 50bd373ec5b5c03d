//! Aggregate platform statistics.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Platform-wide totals shown on the admin dashboard.
///
/// A singleton: fetched whole, never mutated from the console.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlatformStats {
    /// Total registered users.
    pub total_users: u64,
    /// Total registered shelters.
    pub total_shelters: u64,
    /// Total registered pet shops.
    pub total_petshops: u64,
    /// Total registered clinics.
    pub total_clinics: u64,
    /// Total recorded transactions.
    pub total_transactions: u64,
    /// Lifetime transaction volume.
    pub total_revenue: Decimal,
}
