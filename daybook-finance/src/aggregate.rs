//! Per-date accumulation of order money fields.

use daybook_core::{normalize_amount, Chart, DaybookError, Result};
use daybook_ingest::OrderRecord;
use serde::Serialize;

/// Sums over every order that shares one order date
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DailyTotals {
    pub subtotal: f64,
    pub shipping: f64,
    pub discount: f64,
    pub taxes: f64,
    pub total: f64,
    /// Payment method -> summed order total, in order of first appearance
    pub payment_totals: Vec<(String, f64)>,
    /// Subtotal of orders that carried no tax
    pub zero_tax_revenue: f64,
    pub order_count: usize,
    pub international_count: usize,
}

impl DailyTotals {
    fn add_payment(&mut self, method: &str, amount: f64) {
        match self.payment_totals.iter_mut().find(|(m, _)| m == method) {
            Some((_, sum)) => *sum += amount,
            None => self.payment_totals.push((method.to_string(), amount)),
        }
    }

    /// Revenue at the standard rate. Discounts are assumed to sit on taxable orders.
    pub fn taxable_revenue(&self) -> f64 {
        self.subtotal - self.zero_tax_revenue + self.discount
    }

    /// Reject totals that overflowed while summing.
    pub fn ensure_finite(&self, date: &str) -> Result<()> {
        let fields = [
            ("subtotal", self.subtotal),
            ("shipping", self.shipping),
            ("discount", self.discount),
            ("taxes", self.taxes),
            ("total", self.total),
            ("zero-tax revenue", self.zero_tax_revenue),
        ];
        let payments = self.payment_totals.iter().map(|(_, v)| ("payment", *v));

        for (field, value) in fields.into_iter().chain(payments) {
            if !value.is_finite() {
                return Err(DaybookError::NonFiniteTotal {
                    date: date.to_string(),
                    field,
                });
            }
        }
        Ok(())
    }
}

/// Single pass over one date's orders.
pub fn aggregate<'a>(records: impl IntoIterator<Item = &'a OrderRecord>, chart: &Chart) -> DailyTotals {
    let mut totals = DailyTotals::default();

    for rec in records {
        let subtotal = normalize_amount(&rec.subtotal);
        let shipping = normalize_amount(&rec.shipping);
        let discount = normalize_amount(&rec.discount);
        let taxes = normalize_amount(&rec.taxes);
        let total = normalize_amount(&rec.total);

        totals.subtotal += subtotal;
        totals.shipping += shipping;
        totals.discount += discount;
        totals.taxes += taxes;
        totals.total += total;
        totals.order_count += 1;

        let method = rec.payment_method.trim();
        if !method.is_empty() {
            totals.add_payment(method, total);
        }

        if taxes == 0.0 && subtotal > 0.0 {
            totals.zero_tax_revenue += subtotal;
        }

        if chart.is_international(&rec.billing_country) {
            totals.international_count += 1;
        }
    }

    totals
}
