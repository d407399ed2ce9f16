//! Arithmetic and price formatting helpers

/// Add two numbers
pub fn sum(a: f64, b: f64) -> f64 {
    a + b
}

/// Format a price with exactly two fractional digits.
///
/// Rounds half away from zero, the conventional interpretation for prices:
/// `19.9996` renders as `"20.00"`, the tie `0.125` as `"0.13"`.
pub fn format_price(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    format!("{:.2}", rounded)
}
