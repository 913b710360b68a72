//! daybook-core: journal types, the fixed chart of accounts, and amount normalization

pub mod chart;
pub mod date;
pub mod error;
pub mod journal;
pub mod normalize;

pub use chart::{Chart, PaymentRoute, TaxRate};
pub use date::{narration_date, parse_order_date, ORDER_DATE_FORMAT};
pub use error::{DaybookError, Result};
pub use journal::JournalLine;
pub use normalize::{normalize_amount, round_cents};
