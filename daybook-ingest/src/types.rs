use serde::{Deserialize, Serialize};

/// One order row from a store export, kept as raw text.
///
/// Money fields are normalized later; a malformed cell is not an ingest error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderRecord {
    pub billing_country: String,
    /// `dd/mm/yyyy`
    pub created_at: String,
    pub subtotal: String,
    pub shipping: String,
    pub discount: String,
    pub taxes: String,
    pub total: String,
    pub payment_method: String,
}
