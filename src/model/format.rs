//! Display helpers for amounts.

/// Formats an amount as Indonesian Rupiah without fraction digits, the way the
/// `id-ID` locale does: `Rp`, a non-breaking space, `.` as thousands separator.
///
/// The amount is rounded half away from zero.
///
/// ```rust
/// use sales_orders::model::format_idr;
///
/// assert_eq!(format_idr(100_000.0), "Rp\u{a0}100.000");
/// assert_eq!(format_idr(-1234.5), "-Rp\u{a0}1.235");
/// ```
pub fn format_idr(amount: f64) -> String {
    if !amount.is_finite() {
        return format!("Rp\u{a0}{amount}");
    }
    let rounded = amount.round();
    let digits = format!("{:.0}", rounded.abs());

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }

    if rounded < 0.0 {
        format!("-Rp\u{a0}{grouped}")
    } else {
        format!("Rp\u{a0}{grouped}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands_with_dots() {
        assert_eq!(format_idr(0.0), "Rp\u{a0}0");
        assert_eq!(format_idr(999.0), "Rp\u{a0}999");
        assert_eq!(format_idr(1_000.0), "Rp\u{a0}1.000");
        assert_eq!(format_idr(1_234_567.0), "Rp\u{a0}1.234.567");
    }

    #[test]
    fn rounds_half_away_from_zero() {
        assert_eq!(format_idr(0.5), "Rp\u{a0}1");
        assert_eq!(format_idr(1_999.49), "Rp\u{a0}1.999");
        assert_eq!(format_idr(-0.4), "Rp\u{a0}0");
        assert_eq!(format_idr(-2_500.5), "-Rp\u{a0}2.501");
    }
}
