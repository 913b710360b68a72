//! Console report printed after a conversion.

use daybook_core::Chart;
use daybook_finance::{preview, MonthJournal, MonthSummary};
use std::path::Path;

pub fn print_days(month: &MonthJournal, currency: &str) {
    println!("Processing {:02}/{} day by day", month.month, month.year);
    println!("{}", "-".repeat(60));
    for d in &month.days {
        let mark = if d.balanced { "ok" } else { "!!" };
        println!(
            "[{mark}] {} | orders={} (intl {}) | lines={} | tax {:.2} {currency} | balance {:.2}",
            d.date, d.order_count, d.international_count, d.line_count, d.tax, d.line_sum
        );
    }
    for f in &month.failed {
        println!("[skipped] {} | {}", f.date, f.reason);
    }
    for date in &month.empty_dates {
        println!("[empty] {date} | nothing to post");
    }
}

pub fn print_summary(month: &MonthJournal, summary: &MonthSummary, output: &Path, currency: &str, preview_lines: usize) {
    println!("\nMonthly conversion complete");
    println!("{}", "=".repeat(60));
    println!("Output: {}", output.display());
    println!("Journal lines: {}", summary.line_count);
    println!("Days processed: {} ({} orders)", summary.day_count, summary.order_count);
    if let (Some(first), Some(last)) = (&summary.first_date, &summary.last_date) {
        println!("Date range: {first} to {last}");
    }

    println!("\nSummary by account");
    println!("{}", "-".repeat(60));
    for (account, total) in &summary.account_totals {
        println!("{account:<45} {total:>12.2} {currency}");
    }

    println!("\nDebits {:.2} {currency} | Credits {:.2} {currency}", summary.debit_total, summary.credit_total);
    println!("Net of all lines: {:.2} {currency}", summary.net_total);
    if summary.balanced {
        println!("Month is balanced");
    } else {
        println!("Month imbalance: {:.2} {currency}", summary.net_total);
    }
    if !summary.unbalanced_days.is_empty() {
        println!("Days not netting to tax: {}", summary.unbalanced_days.join(", "));
    }
    if !summary.failed_dates.is_empty() {
        println!("Days skipped: {}", summary.failed_dates.len());
    }

    let p = preview(&month.lines, preview_lines);
    println!("\nFile layout (first {} lines)", preview_lines);
    for (date, count) in &p.groups {
        println!("  {date}: {count} lines");
    }
    if p.remaining > 0 {
        println!("  ... and {} more lines", p.remaining);
    }
}

pub fn print_chart(chart: &Chart) {
    println!("Payment routing (exact label first, then first substring hit)");
    for (i, r) in chart.payment_routes.iter().enumerate() {
        println!("  {:>2}. {:<40} -> {}", i + 1, r.label, r.account);
    }
    println!("  default -> {}", chart.default_payment_account);

    println!("\nPosting accounts");
    println!("  revenue   {}", chart.revenue_account);
    println!("  shipping  {}", chart.shipping_account);
    println!("  discount  {}", chart.discount_account);

    println!("\nAll account codes");
    for code in chart.account_codes() {
        println!("  {code}");
    }

    println!("\nTax rates");
    println!("  standard    {}", chart.standard_vat_label);
    println!("  zero-rated  {}", chart.zero_rated_label);
    println!("  exempt      {}", chart.exempt_label);
}
