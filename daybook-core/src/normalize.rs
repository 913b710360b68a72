//! Lenient conversion of export cell text into amounts.
//!
//! Order exports are messy: blank cells, `-` placeholders, `nan` from
//! spreadsheet round-trips, thousands separators. None of these are errors.

/// Convert a raw cell into an amount. Anything unparseable becomes `0.0`.
///
/// `NaN`/`inf` spellings and out-of-range exponents parse as non-finite
/// floats; those are not amounts either and also become `0.0`.
pub fn normalize_amount(raw: &str) -> f64 {
    let s = raw.trim();
    if s.is_empty() || s == "-" || s == "nan" {
        return 0.0;
    }
    s.replace(',', "")
        .parse()
        .ok()
        .filter(|v: &f64| v.is_finite())
        .unwrap_or(0.0)
}

/// Round to the two-place precision amounts are posted at.
///
/// Goes through the same formatting the journal output uses so a posted
/// amount and its rendered text never disagree.
pub fn round_cents(amount: f64) -> f64 {
    format!("{amount:.2}").parse().unwrap_or(amount)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_is_zero() {
        for raw in ["", "   ", "-", "nan", " nan ", "abc", "12abc", "1.2.3", "$5"] {
            assert_eq!(normalize_amount(raw), 0.0, "input {raw:?}");
        }
    }

    #[test]
    fn test_non_finite_spellings_are_zero() {
        for raw in ["NaN", "NAN", "inf", "-inf", "Infinity", "-Infinity", "1e999", "-1e999"] {
            assert_eq!(normalize_amount(raw), 0.0, "input {raw:?}");
        }
    }

    #[test]
    fn test_thousands_separators() {
        assert_eq!(normalize_amount("1,234.50"), 1234.50);
        assert_eq!(normalize_amount(" 12,345,678.90 "), 12345678.90);
    }

    #[test]
    fn test_plain_and_signed_numbers() {
        assert_eq!(normalize_amount("100"), 100.0);
        assert_eq!(normalize_amount("0.00"), 0.0);
        assert_eq!(normalize_amount("-15.25"), -15.25);
    }

    #[test]
    fn test_round_cents() {
        assert_eq!(round_cents(104.999), 105.0);
        assert_eq!(round_cents(-10.0), -10.0);
        assert_eq!(round_cents(0.1 + 0.2), 0.3);
    }
}
