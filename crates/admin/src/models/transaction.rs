//! Adoption-fee transaction records.
//!
//! Transactions are read-only from the console: they have no toggleable
//! flags and cannot be deleted, so [`Transaction`] implements
//! [`AdminRecord`] but not `Patchable`.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use pawhub_core::TransactionId;

use super::AdminRecord;

/// Settlement state of a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionStatus {
    /// Payment authorized but not yet captured.
    Pending,
    /// Payment captured.
    Completed,
    /// Payment returned to the buyer.
    Refunded,
}

/// A completed or in-flight adoption-fee payment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique transaction ID.
    pub id: TransactionId,
    /// Name of the adopting user.
    pub buyer_name: String,
    /// Name of the shelter or shop that received the payment.
    pub seller_name: String,
    /// Payment amount.
    pub amount: Decimal,
    /// Settlement state.
    pub status: TransactionStatus,
    /// When the payment was initiated.
    pub created_at: DateTime<Utc>,
}

impl AdminRecord for Transaction {
    type Id = TransactionId;

    fn id(&self) -> TransactionId {
        self.id
    }
}
