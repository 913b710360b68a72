//! The fixed chart the journals post into: ledger account codes, tax-rate
//! labels and the payment-method routing table.
//!
//! Built once at startup and passed by reference. Not user-configurable.

use serde::{Deserialize, Serialize};

/// One row of the payment routing table: a known payment-method label and
/// the clearing account it settles into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PaymentRoute {
    pub label: &'static str,
    pub account: &'static str,
}

const fn route(label: &'static str, account: &'static str) -> PaymentRoute {
    PaymentRoute { label, account }
}

/// Routing table. Order is significant: substring matching takes the first hit.
pub const SHOPIFY_UAE_PAYMENT_ROUTES: &[PaymentRoute] = &[
    route("Stripe", "102 - Stripe Account"),
    route("Cash on Delivery (COD)", "110 - Cash on Delivery"),
    route("Cash on Delivery (COD) + custom", "110 - Cash on Delivery"),
    route("Cash on Delivery (COD) + Bank Deposit", "110 - Cash on Delivery"),
    route("Tamara Split Payments", "111 - Tamara"),
    route("Tamara", "111 - Tamara"),
    route("Tabby", "112 - Tabby"),
    route("Custom (POS)", "113 - POS Account"),
    route("Card", "102 - Card Account"),
    route("Cash", "101 - Cash Account"),
];

/// Tax treatment of a journal line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaxRate {
    #[serde(rename = "standard")]
    Standard,
    #[serde(rename = "zero-rated")]
    ZeroRated,
    #[serde(rename = "exempt")]
    Exempt,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Chart {
    pub revenue_account: &'static str,
    pub shipping_account: &'static str,
    pub discount_account: &'static str,
    /// Clearing account for payment methods nothing in the table matches
    pub default_payment_account: &'static str,
    pub standard_vat_label: &'static str,
    pub zero_rated_label: &'static str,
    pub exempt_label: &'static str,
    /// Narration is `<prefix> dd.mm.yyyy`
    pub narration_prefix: &'static str,
    /// Billing country of domestic orders
    pub home_country: &'static str,
    pub payment_routes: &'static [PaymentRoute],
}

impl Chart {
    /// Shopify store selling in the UAE (5% VAT), posting into Xero.
    pub const fn shopify_uae() -> Self {
        Self {
            revenue_account: "208 - Revenue - Shopify",
            shipping_account: "203 - Revenue - Shipping Retail",
            discount_account: "205B - Sales Discount [Shopify]",
            default_payment_account: "102 - Stripe Account",
            standard_vat_label: "Output VAT 5% (5%)",
            zero_rated_label: "Zero Rated Output VAT (0%)",
            exempt_label: "Tax Exempt (0%)",
            narration_prefix: "Shopify Sales",
            home_country: "AE",
            payment_routes: SHOPIFY_UAE_PAYMENT_ROUTES,
        }
    }

    /// Ledger label for a tax treatment
    pub fn tax_label(&self, rate: TaxRate) -> &'static str {
        match rate {
            TaxRate::Standard => self.standard_vat_label,
            TaxRate::ZeroRated => self.zero_rated_label,
            TaxRate::Exempt => self.exempt_label,
        }
    }

    /// Every distinct account code the chart can post to, in first-use order.
    pub fn account_codes(&self) -> Vec<&'static str> {
        let mut out = vec![
            self.revenue_account,
            self.shipping_account,
            self.discount_account,
            self.default_payment_account,
        ];
        for r in self.payment_routes {
            if !out.contains(&r.account) {
                out.push(r.account);
            }
        }
        out
    }

    pub fn is_international(&self, billing_country: &str) -> bool {
        let c = billing_country.trim();
        !c.is_empty() && c != self.home_country
    }
}

impl Default for Chart {
    fn default() -> Self {
        Self::shopify_uae()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tax_labels() {
        let chart = Chart::default();
        assert_eq!(chart.tax_label(TaxRate::Standard), "Output VAT 5% (5%)");
        assert_eq!(chart.tax_label(TaxRate::ZeroRated), "Zero Rated Output VAT (0%)");
        assert_eq!(chart.tax_label(TaxRate::Exempt), "Tax Exempt (0%)");
    }

    #[test]
    fn test_route_table_order() {
        let labels: Vec<_> = SHOPIFY_UAE_PAYMENT_ROUTES.iter().map(|r| r.label).collect();
        assert_eq!(labels.first(), Some(&"Stripe"));
        assert_eq!(labels.last(), Some(&"Cash"));
        // "Tamara Split Payments" must be consulted before "Tamara"
        let split = labels.iter().position(|l| *l == "Tamara Split Payments").unwrap();
        let plain = labels.iter().position(|l| *l == "Tamara").unwrap();
        assert!(split < plain);
    }

    #[test]
    fn test_account_codes_are_unique() {
        let codes = Chart::default().account_codes();
        let mut sorted = codes.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), codes.len());
        assert!(codes.contains(&"113 - POS Account"));
    }

    #[test]
    fn test_is_international() {
        let chart = Chart::default();
        assert!(!chart.is_international("AE"));
        assert!(!chart.is_international(" AE "));
        assert!(!chart.is_international(""));
        assert!(chart.is_international("SA"));
    }
}
