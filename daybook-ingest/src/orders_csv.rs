//! Parse Shopify order exports (CSV) into raw order records.
//!
//! Shopify pads several headers with spaces (` Subtotal `, ` Created at `) and
//! spreadsheet tools add a BOM, so columns are located by trimmed name.
//! Columns beyond the ones listed below are ignored; missing ones read as empty.

use anyhow::{Context, Result};
use csv::StringRecord;
use std::io::Read;
use std::path::Path;

use crate::types::OrderRecord;

const CREATED_AT: &str = "Created at";
const BILLING_COUNTRY: &str = "Billing Country";
const SUBTOTAL: &str = "Subtotal";
const SHIPPING: &str = "Shipping";
const DISCOUNT: &str = "Discount Amount";
const TAXES: &str = "Taxes";
const TOTAL: &str = "Total";
const PAYMENT_METHOD: &str = "Payment Method";

/// Column positions resolved from the header row
struct Columns {
    created_at: Option<usize>,
    billing_country: Option<usize>,
    subtotal: Option<usize>,
    shipping: Option<usize>,
    discount: Option<usize>,
    taxes: Option<usize>,
    total: Option<usize>,
    payment_method: Option<usize>,
}

impl Columns {
    fn resolve(headers: &StringRecord) -> Self {
        let names: Vec<&str> = headers
            .iter()
            .map(|h| h.trim_start_matches('\u{feff}').trim())
            .collect();
        // last occurrence wins when a header repeats
        let find = |name: &str| names.iter().rposition(|h| *h == name);

        Self {
            created_at: find(CREATED_AT),
            billing_country: find(BILLING_COUNTRY),
            subtotal: find(SUBTOTAL),
            shipping: find(SHIPPING),
            discount: find(DISCOUNT),
            taxes: find(TAXES),
            total: find(TOTAL),
            payment_method: find(PAYMENT_METHOD),
        }
    }

    fn missing(&self) -> Vec<&'static str> {
        [
            (CREATED_AT, self.created_at),
            (BILLING_COUNTRY, self.billing_country),
            (SUBTOTAL, self.subtotal),
            (SHIPPING, self.shipping),
            (DISCOUNT, self.discount),
            (TAXES, self.taxes),
            (TOTAL, self.total),
            (PAYMENT_METHOD, self.payment_method),
        ]
        .into_iter()
        .filter(|(_, idx)| idx.is_none())
        .map(|(name, _)| name)
        .collect()
    }
}

fn cell(record: &StringRecord, idx: Option<usize>) -> String {
    idx.and_then(|i| record.get(i)).unwrap_or("").to_string()
}

/// Parse an order export from any reader.
pub fn parse_orders_csv<R: Read>(reader: R) -> Result<Vec<OrderRecord>> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .has_headers(true)
        .from_reader(reader);

    let headers = rdr.headers().context("reading header row")?.clone();
    let cols = Columns::resolve(&headers);
    let missing = cols.missing();
    if !missing.is_empty() {
        tracing::warn!(?missing, "order export is missing columns; treating them as empty");
    }

    let mut orders = Vec::new();
    for (i, result) in rdr.records().enumerate() {
        // header is line 1
        let record = result.with_context(|| format!("reading order row {}", i + 2))?;
        orders.push(OrderRecord {
            billing_country: cell(&record, cols.billing_country),
            created_at: cell(&record, cols.created_at),
            subtotal: cell(&record, cols.subtotal),
            shipping: cell(&record, cols.shipping),
            discount: cell(&record, cols.discount),
            taxes: cell(&record, cols.taxes),
            total: cell(&record, cols.total),
            payment_method: cell(&record, cols.payment_method),
        });
    }

    tracing::debug!(rows = orders.len(), "parsed order export");
    Ok(orders)
}

/// Read an order export file.
pub fn read_orders_csv(path: impl AsRef<Path>) -> Result<Vec<OrderRecord>> {
    let path = path.as_ref();
    let file = std::fs::File::open(path).with_context(|| format!("opening {}", path.display()))?;
    parse_orders_csv(file).with_context(|| format!("reading {}", path.display()))
}
