//! Month-level reporting: totals by account, overall net, output preview.

use daybook_core::JournalLine;
use serde::Serialize;
use std::collections::BTreeMap;

use crate::month::{FailedDate, MonthJournal};

/// Month net below this is reported as balanced
pub const MONTH_BALANCE_TOLERANCE: f64 = 1.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthSummary {
    pub month: u32,
    pub year: i32,
    pub line_count: usize,
    pub day_count: usize,
    pub order_count: usize,
    pub first_date: Option<String>,
    pub last_date: Option<String>,
    /// Account code -> net amount, sorted by account code
    pub account_totals: BTreeMap<String, f64>,
    /// Sum of positive lines
    pub debit_total: f64,
    /// Sum of negative lines
    pub credit_total: f64,
    pub net_total: f64,
    pub balanced: bool,
    /// Days whose lines did not net to recorded tax
    pub unbalanced_days: Vec<String>,
    pub failed_dates: Vec<FailedDate>,
    pub empty_dates: Vec<String>,
}

/// Net amount per account code
pub fn account_totals(lines: &[JournalLine]) -> BTreeMap<String, f64> {
    let mut totals: BTreeMap<String, f64> = BTreeMap::new();
    for line in lines {
        *totals.entry(line.account_code.clone()).or_insert(0.0) += line.amount;
    }
    totals
}

impl MonthSummary {
    pub fn from_month(month: &MonthJournal) -> Self {
        let account_totals = account_totals(&month.lines);
        let net_total: f64 = account_totals.values().sum();
        let debit_total: f64 = month.lines.iter().filter(|l| l.is_debit()).map(|l| l.amount).sum();
        let credit_total: f64 = month.lines.iter().filter(|l| l.is_credit()).map(|l| l.amount).sum();

        Self {
            month: month.month,
            year: month.year,
            line_count: month.lines.len(),
            day_count: month.days.len(),
            order_count: month.matched_orders,
            first_date: month.processed_dates().next().map(str::to_string),
            last_date: month.processed_dates().last().map(str::to_string),
            account_totals,
            debit_total,
            credit_total,
            net_total,
            balanced: net_total.abs() < MONTH_BALANCE_TOLERANCE,
            unbalanced_days: month
                .days
                .iter()
                .filter(|d| !d.balanced)
                .map(|d| d.date.clone())
                .collect(),
            failed_dates: month.failed.clone(),
            empty_dates: month.empty_dates.clone(),
        }
    }
}

/// How the first lines of the output file break down by date
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Preview {
    /// (date, lines shown for that date)
    pub groups: Vec<(String, usize)>,
    /// Lines beyond the preview window
    pub remaining: usize,
}

pub fn preview(lines: &[JournalLine], limit: usize) -> Preview {
    let mut groups: Vec<(String, usize)> = Vec::new();
    for line in lines.iter().take(limit) {
        match groups.last_mut() {
            Some((date, count)) if *date == line.date => *count += 1,
            _ => groups.push((line.date.clone(), 1)),
        }
    }
    Preview {
        groups,
        remaining: lines.len().saturating_sub(limit),
    }
}
