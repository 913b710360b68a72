//! Order date handling: exports carry day/month/year text.

use chrono::NaiveDate;

/// Format of the `Created at` column and of the journal `*Date` column.
pub const ORDER_DATE_FORMAT: &str = "%d/%m/%Y";

/// Parse a `dd/mm/yyyy` order date. Surrounding whitespace is ignored.
pub fn parse_order_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), ORDER_DATE_FORMAT).ok()
}

/// Dotted form used inside narrations, e.g. `01.03.2025`.
pub fn narration_date(date: NaiveDate) -> String {
    date.format("%d.%m.%Y").to_string()
}
