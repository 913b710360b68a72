//! Month orchestration: filter a month's orders, build each day's journal in
//! calendar order and concatenate them.
//!
//! A failing day is skipped and reported; the rest of the month still posts.

use chrono::{Datelike, NaiveDate};
use daybook_core::{parse_order_date, Chart, DaybookError, JournalLine, Result};
use daybook_ingest::OrderRecord;
use serde::Serialize;
use std::collections::BTreeMap;

use crate::aggregate::{aggregate, DailyTotals};
use crate::journal_builder::{build_journal, DayJournal};

/// Per-day progress line
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayReport {
    pub date: String,
    pub order_count: usize,
    pub international_count: usize,
    pub line_count: usize,
    pub tax: f64,
    pub line_sum: f64,
    pub balanced: bool,
}

/// A date whose journal could not be built
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FailedDate {
    pub date: String,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MonthJournal {
    pub month: u32,
    pub year: i32,
    /// Grouped by date, dates ascending
    pub lines: Vec<JournalLine>,
    /// Days that produced at least one line, ascending
    pub days: Vec<DayReport>,
    pub failed: Vec<FailedDate>,
    /// Dates with orders but nothing to post (every amount zero or negative)
    pub empty_dates: Vec<String>,
    /// Orders that fell inside the month
    pub matched_orders: usize,
}

impl MonthJournal {
    pub fn processed_dates(&self) -> impl Iterator<Item = &str> {
        self.days.iter().map(|d| d.date.as_str())
    }
}

/// Default output name, e.g. `monthly_journal_03_2025.csv`
pub fn output_file_name(month: u32, year: i32) -> String {
    format!("monthly_journal_{month:02}_{year}.csv")
}

/// Group in-period orders by their exact date text, chronologically.
///
/// Keyed by parsed date first so `02/03` sorts before `10/03`; the text breaks
/// ties when the same day is written two ways (`1/3/2025`, `01/03/2025`).
pub fn group_by_date(
    records: &[OrderRecord],
    month: u32,
    year: i32,
) -> BTreeMap<(NaiveDate, String), Vec<&OrderRecord>> {
    let mut groups: BTreeMap<(NaiveDate, String), Vec<&OrderRecord>> = BTreeMap::new();

    for rec in records {
        let created_at = rec.created_at.trim();
        if created_at.is_empty() {
            continue;
        }
        let Some(date) = parse_order_date(created_at) else {
            tracing::debug!(created_at, "skipping order with unparseable date");
            continue;
        };
        if date.month() == month && date.year() == year {
            groups
                .entry((date, created_at.to_string()))
                .or_default()
                .push(rec);
        }
    }

    groups
}

fn process_date(date: &str, records: &[&OrderRecord], chart: &Chart) -> Result<(DailyTotals, DayJournal)> {
    let totals = aggregate(records.iter().copied(), chart);
    totals.ensure_finite(date)?;
    let journal = build_journal(date, &totals, chart)?;
    tracing::info!(
        date,
        orders = totals.order_count,
        international = totals.international_count,
        lines = journal.lines.len(),
        "processed day"
    );
    Ok((totals, journal))
}

/// Build the whole month's journal.
pub fn run(records: &[OrderRecord], month: u32, year: i32, chart: &Chart) -> Result<MonthJournal> {
    let groups = group_by_date(records, month, year);
    let matched_orders: usize = groups.values().map(Vec::len).sum();
    tracing::info!(month, year, orders = matched_orders, days = groups.len(), "grouped orders");

    if groups.is_empty() {
        return Err(DaybookError::NoOrdersInPeriod { month, year });
    }

    let mut lines = Vec::new();
    let mut days = Vec::new();
    let mut failed = Vec::new();
    let mut empty_dates = Vec::new();

    for ((_, date), rows) in &groups {
        match process_date(date, rows, chart) {
            Ok((_, journal)) if journal.lines.is_empty() => {
                tracing::info!(date = %date, "no postable amounts");
                empty_dates.push(date.clone());
            }
            Ok((totals, journal)) => {
                days.push(DayReport {
                    date: journal.date.clone(),
                    order_count: totals.order_count,
                    international_count: totals.international_count,
                    line_count: journal.lines.len(),
                    tax: journal.balance.tax,
                    line_sum: journal.balance.line_sum,
                    balanced: journal.balance.balanced,
                });
                lines.extend(journal.lines);
            }
            Err(e) => {
                tracing::warn!(date = %date, error = %e, "skipping date");
                failed.push(FailedDate {
                    date: date.clone(),
                    reason: e.to_string(),
                });
            }
        }
    }

    if lines.is_empty() {
        return Err(DaybookError::NoJournalLines);
    }

    Ok(MonthJournal {
        month,
        year,
        lines,
        days,
        failed,
        empty_dates,
        matched_orders,
    })
}
