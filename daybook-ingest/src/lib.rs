//! daybook-ingest: order export reading and journal file writing.

pub mod journal_csv;
pub mod orders_csv;
pub mod types;

pub use journal_csv::{write_journal, write_journal_csv, JOURNAL_HEADERS};
pub use orders_csv::{parse_orders_csv, read_orders_csv};
pub use types::OrderRecord;
