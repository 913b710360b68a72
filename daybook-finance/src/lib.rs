//! daybook-finance: payment routing, daily aggregation, journal building and
//! month orchestration

pub mod aggregate;
pub mod journal_builder;
pub mod month;
pub mod payment_rules;
pub mod summary;

pub use aggregate::{aggregate, DailyTotals};
pub use journal_builder::{build_journal, BalanceCheck, DayJournal, BALANCE_TOLERANCE};
pub use month::{group_by_date, output_file_name, run, DayReport, FailedDate, MonthJournal};
pub use payment_rules::{map_payment_account, match_payment, MatchKind};
pub use summary::{account_totals, preview, MonthSummary, Preview, MONTH_BALANCE_TOLERANCE};
