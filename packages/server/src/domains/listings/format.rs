//! Number formatting helpers for listing copy.

/// Format a price with thousands separators and no decimal places.
pub fn format_price(price: f64) -> String {
    format_thousands(price.round() as i64)
}

/// Format an integer with thousands separators.
pub fn format_thousands(value: i64) -> String {
    let negative = value < 0;
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if negative {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Display a bathroom count, dropping the fraction when whole
/// (2.0 -> "2", 2.5 -> "2.5").
pub fn format_bathrooms(count: f64) -> String {
    if count.fract() == 0.0 {
        format!("{}", count as i64)
    } else {
        format!("{}", count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1_000), "1,000");
        assert_eq!(format_thousands(1_800), "1,800");
        assert_eq!(format_thousands(500_000), "500,000");
        assert_eq!(format_thousands(1_250_000), "1,250,000");
        assert_eq!(format_thousands(-42_000), "-42,000");
    }

    #[test]
    fn test_format_price_rounds_to_whole_dollars() {
        assert_eq!(format_price(500_000.0), "500,000");
        assert_eq!(format_price(499_999.6), "500,000");
    }

    #[test]
    fn test_format_bathrooms() {
        assert_eq!(format_bathrooms(2.0), "2");
        assert_eq!(format_bathrooms(2.5), "2.5");
        assert_eq!(format_bathrooms(0.0), "0");
    }
}
