//! Journal line type: one signed posting in a manual journal.

use serde::{Deserialize, Serialize};

use crate::normalize::round_cents;

/// One row of the exported journal.
///
/// Amounts follow ledger sign convention: negative = credit, positive = debit.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JournalLine {
    pub narration: String,
    /// Day/month/year text exactly as it appeared on the orders
    pub date: String,
    pub description: String,
    pub account_code: String,
    pub tax_rate: String,
    /// Held at two-place precision
    pub amount: f64,
}

impl JournalLine {
    /// Create a line; description mirrors the narration.
    pub fn new(
        narration: impl Into<String>,
        date: impl Into<String>,
        account_code: impl Into<String>,
        tax_rate: impl Into<String>,
        amount: f64,
    ) -> Self {
        let narration = narration.into();
        Self {
            description: narration.clone(),
            narration,
            date: date.into(),
            account_code: account_code.into(),
            tax_rate: tax_rate.into(),
            amount: round_cents(amount),
        }
    }

    pub fn is_credit(&self) -> bool {
        self.amount < 0.0
    }

    pub fn is_debit(&self) -> bool {
        self.amount > 0.0
    }

    /// Amount as written to the journal file, e.g. `-105.00`
    pub fn amount_text(&self) -> String {
        format!("{:.2}", self.amount)
    }
}
