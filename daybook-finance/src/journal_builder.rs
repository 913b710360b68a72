//! Builds one day's manual journal from its aggregates.
//!
//! Line order within a day: taxable revenue, shipping, payment clearing,
//! discount, zero-rated revenue. A category is posted only when its amount
//! is strictly positive.

use daybook_core::{narration_date, parse_order_date, Chart, DaybookError, JournalLine, Result, TaxRate};
use serde::Serialize;

use crate::aggregate::DailyTotals;
use crate::payment_rules::map_payment_account;

/// Allowed gap between a day's line sum and its recorded tax
pub const BALANCE_TOLERANCE: f64 = 0.01;

/// Advisory comparison of the posted lines against recorded tax
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BalanceCheck {
    pub tax: f64,
    pub line_sum: f64,
    pub balanced: bool,
}

impl BalanceCheck {
    pub fn new(tax: f64, lines: &[JournalLine]) -> Self {
        let line_sum: f64 = lines.iter().map(|l| l.amount).sum();
        Self {
            tax,
            line_sum,
            balanced: (line_sum - tax).abs() < BALANCE_TOLERANCE,
        }
    }

    pub fn difference(&self) -> f64 {
        self.line_sum - self.tax
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DayJournal {
    pub date: String,
    pub lines: Vec<JournalLine>,
    pub balance: BalanceCheck,
}

/// `Shopify Sales 01.03.2025` for `01/03/2025`
pub fn narration_for(date: &str, chart: &Chart) -> Result<String> {
    let parsed = parse_order_date(date).ok_or_else(|| DaybookError::InvalidDate(date.to_string()))?;
    Ok(format!("{} {}", chart.narration_prefix, narration_date(parsed)))
}

/// Emit the ordered journal lines for one date and check them against tax.
pub fn build_journal(date: &str, totals: &DailyTotals, chart: &Chart) -> Result<DayJournal> {
    let narration = narration_for(date, chart)?;
    let line = |account: &str, rate: TaxRate, amount: f64| {
        JournalLine::new(narration.as_str(), date, account, chart.tax_label(rate), amount)
    };

    let mut lines = Vec::new();

    let taxable = totals.taxable_revenue();
    if taxable > 0.0 {
        lines.push(line(chart.revenue_account, TaxRate::Standard, -taxable));
    }

    if totals.shipping > 0.0 {
        lines.push(line(chart.shipping_account, TaxRate::ZeroRated, -totals.shipping));
    }

    for (method, amount) in &totals.payment_totals {
        if *amount > 0.0 {
            let account = map_payment_account(method, chart);
            lines.push(line(account, TaxRate::Exempt, *amount));
        }
    }

    if totals.discount > 0.0 {
        lines.push(line(chart.discount_account, TaxRate::Standard, totals.discount));
    }

    if totals.zero_tax_revenue > 0.0 {
        lines.push(line(chart.revenue_account, TaxRate::ZeroRated, -totals.zero_tax_revenue));
    }

    let balance = BalanceCheck::new(totals.taxes, &lines);
    if balance.balanced {
        tracing::info!(date, tax = balance.tax, line_sum = balance.line_sum, "day balanced");
    } else {
        tracing::warn!(
            date,
            tax = balance.tax,
            line_sum = balance.line_sum,
            difference = balance.difference(),
            "journal lines do not net to recorded tax"
        );
    }

    Ok(DayJournal {
        date: date.to_string(),
        lines,
        balance,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn totals() -> DailyTotals {
        DailyTotals {
            subtotal: 300.0,
            shipping: 20.0,
            discount: 10.0,
            taxes: 10.5,
            total: 330.5,
            payment_totals: vec![("Stripe".into(), 330.5)],
            zero_tax_revenue: 100.0,
            order_count: 3,
            international_count: 1,
        }
    }

    fn summary(j: &DayJournal) -> Vec<(&str, &str, String)> {
        j.lines
            .iter()
            .map(|l| (l.account_code.as_str(), l.tax_rate.as_str(), l.amount_text()))
            .collect()
    }

    #[test]
    fn test_all_categories_in_order() {
        let j = build_journal("01/03/2025", &totals(), &Chart::default()).unwrap();
        assert_eq!(j.lines.len(), 5);
        assert_eq!(
            summary(&j),
            vec![
                ("208 - Revenue - Shopify", "Output VAT 5% (5%)", "-210.00".to_string()),
                ("203 - Revenue - Shipping Retail", "Zero Rated Output VAT (0%)", "-20.00".to_string()),
                ("102 - Stripe Account", "Tax Exempt (0%)", "330.50".to_string()),
                ("205B - Sales Discount [Shopify]", "Output VAT 5% (5%)", "10.00".to_string()),
                ("208 - Revenue - Shopify", "Zero Rated Output VAT (0%)", "-100.00".to_string()),
            ]
        );
        for l in &j.lines {
            assert_eq!(l.narration, "Shopify Sales 01.03.2025");
            assert_eq!(l.description, l.narration);
            assert_eq!(l.date, "01/03/2025");
        }
    }

    #[test]
    fn test_consistent_day_balances_to_tax() {
        // 200 taxable at 5% minus 10 discount, 100 zero-rated, 20 shipping
        let j = build_journal("01/03/2025", &totals(), &Chart::default()).unwrap();
        assert!(j.balance.balanced, "{:?}", j.balance);
        assert!((j.balance.line_sum - 10.5).abs() < BALANCE_TOLERANCE);
    }

    #[test]
    fn test_non_positive_categories_emit_nothing() {
        let t = DailyTotals {
            subtotal: 100.0,
            shipping: 0.0,
            discount: 0.0,
            taxes: 5.0,
            total: 105.0,
            payment_totals: vec![("Stripe".into(), 105.0), ("Tabby".into(), 0.0), ("Cash".into(), -3.0)],
            zero_tax_revenue: 0.0,
            order_count: 1,
            international_count: 0,
        };
        let j = build_journal("02/03/2025", &t, &Chart::default()).unwrap();
        let accounts: Vec<_> = j.lines.iter().map(|l| l.account_code.as_str()).collect();
        assert_eq!(accounts, vec!["208 - Revenue - Shopify", "102 - Stripe Account"]);
        assert!(j.balance.balanced);
    }

    #[test]
    fn test_payment_lines_keep_first_appearance_order() {
        let mut t = totals();
        t.payment_totals = vec![
            ("Tabby".into(), 100.0),
            ("Cash on Delivery (COD)".into(), 200.0),
            ("Stripe".into(), 30.5),
        ];
        let j = build_journal("01/03/2025", &t, &Chart::default()).unwrap();
        let payments: Vec<_> = j
            .lines
            .iter()
            .filter(|l| l.tax_rate == "Tax Exempt (0%)")
            .map(|l| l.account_code.as_str())
            .collect();
        assert_eq!(
            payments,
            vec!["112 - Tabby", "110 - Cash on Delivery", "102 - Stripe Account"]
        );
        assert_eq!(j.lines.len(), 7);
    }

    #[test]
    fn test_discount_on_zero_rated_orders_trips_balance_flag() {
        // discount actually belonged to an export order; formula still posts it as taxable
        let t = DailyTotals {
            subtotal: 100.0,
            shipping: 0.0,
            discount: 10.0,
            taxes: 0.0,
            total: 90.0,
            payment_totals: vec![("Stripe".into(), 90.0)],
            zero_tax_revenue: 100.0,
            order_count: 1,
            international_count: 1,
        };
        let j = build_journal("03/03/2025", &t, &Chart::default()).unwrap();
        assert!(!j.balance.balanced);
        assert!((j.balance.difference() - (-10.0)).abs() < 1e-9);
    }

    #[test]
    fn test_empty_day_has_no_lines() {
        let j = build_journal("04/03/2025", &DailyTotals::default(), &Chart::default()).unwrap();
        assert!(j.lines.is_empty());
        assert!(j.balance.balanced);
    }

    #[test]
    fn test_invalid_date_is_error() {
        let err = build_journal("2025-03-01", &totals(), &Chart::default()).unwrap_err();
        assert_eq!(err, DaybookError::InvalidDate("2025-03-01".into()));
    }
}
