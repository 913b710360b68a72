//! Deterministic routing of free-text payment methods to clearing accounts.
//!
//! Priority: exact label > first substring hit in table order > default account.

use daybook_core::{Chart, PaymentRoute};

/// How a payment method was resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    Exact,
    Substring,
    Default,
}

/// Resolve `method` against an ordered route table.
///
/// Returns `None` only when nothing matches; callers fall back to the
/// chart's default account.
pub fn match_payment<'r>(method: &str, routes: &'r [PaymentRoute]) -> Option<(&'r PaymentRoute, MatchKind)> {
    let method = method.trim();

    if let Some(r) = routes.iter().find(|r| r.label == method) {
        return Some((r, MatchKind::Exact));
    }

    // Combined labels like "Tabby + Gift card" still land on a known channel
    let lowered = method.to_lowercase();
    routes
        .iter()
        .find(|r| lowered.contains(&r.label.to_lowercase()))
        .map(|r| (r, MatchKind::Substring))
}

/// Map a payment method label to its clearing account. Never fails.
pub fn map_payment_account(method: &str, chart: &Chart) -> &'static str {
    match match_payment(method, chart.payment_routes) {
        Some((route, kind)) => {
            tracing::trace!(method, account = route.account, ?kind, "payment method routed");
            route.account
        }
        None => {
            tracing::debug!(
                method,
                account = chart.default_payment_account,
                kind = ?MatchKind::Default,
                "unknown payment method, using default account"
            );
            chart.default_payment_account
        }
    }
}
