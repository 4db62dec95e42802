use rust_decimal::Decimal;
use std::str::FromStr;

/// Parse a weight column value in kg.
///
/// Handles formats like:
/// - "264.541" -> 264.541
/// - "12,5" -> 12.5 (decimal comma, only when no dot is present)
/// - "1.2e3" -> 1200
///
/// Negative or unparseable values return None.
pub fn parse_weight(s: &str) -> Option<Decimal> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    let normalized = if s.contains(',') && !s.contains('.') {
        s.replace(',', ".")
    } else {
        s.to_string()
    };

    Decimal::from_str(&normalized)
        .or_else(|_| Decimal::from_scientific(&normalized))
        .ok()
        .filter(|d| !d.is_sign_negative())
}

/// Parse a weight, coercing malformed values to zero.
pub fn weight_or_zero(s: &str) -> Decimal {
    parse_weight(s).unwrap_or(Decimal::ZERO)
}

/// Numeric value of a component label for sorting; a tube marker is ignored.
pub fn component_sort_value(label: &str) -> Option<Decimal> {
    let cleaned = label.replace('*', "");
    let cleaned = cleaned.trim();
    if cleaned.is_empty() || !cleaned.chars().all(|c| c.is_ascii_digit() || c == '.') {
        return None;
    }
    Decimal::from_str(cleaned).ok()
}
