//! Display formatting for amounts

/// Render an amount with exactly two decimals
///
/// Exact ties at the third decimal round away from zero, matching the
/// `toFixed(2)` output the booking sheet has always shown.
pub fn format_total(total: f64) -> String {
    // avoid printing "-0.00"
    let total = if total == 0.0 { 0.0 } else { total };

    // an odd number of eighths is an exact tie at the third decimal
    let eighths = total * 8.0;
    if total.is_finite() && eighths.fract() == 0.0 && eighths.abs() % 2.0 == 1.0 {
        let cents = (eighths.abs() as i128 * 25 + 1) / 2;
        let sign = if total < 0.0 { "-" } else { "" };
        return format!("{}{}.{:02}", sign, cents / 100, cents % 100);
    }

    format!("{:.2}", total)
}

/// Amount prefixed with a currency symbol, e.g. `₦70.00`
pub fn display_amount(currency_symbol: &str, amount: f64) -> String {
    format!("{}{}", currency_symbol, format_total(amount))
}
