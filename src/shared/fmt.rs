//! Number formatting for quote and chart display.
//!
//! Everything renders with a fixed two decimal places and no thousands
//! separators, matching what the site shows.

/// `$123.45`
pub fn price(value: f64) -> String {
    format!("${:.2}", value)
}

/// `+1.23` / `-1.23`. Zero renders as `+0.00`.
pub fn signed(value: f64) -> String {
    if value >= 0.0 {
        format!("+{:.2}", value)
    } else {
        format!("{:.2}", value)
    }
}

/// A ratio shown as a percentage: `0.0123` → `1.23%`.
pub fn ratio_percent(ratio: f64) -> String {
    format!("{:.2}%", ratio * 100.0)
}

/// Plain two-decimal value, used on chart axes.
pub fn fixed2(value: f64) -> String {
    format!("{:.2}", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price() {
        assert_eq!(price(189.3), "$189.30");
        assert_eq!(price(0.0), "$0.00");
        assert_eq!(price(1234.567), "$1234.57");
    }

    #[test]
    fn test_signed() {
        assert_eq!(signed(1.234), "+1.23");
        assert_eq!(signed(0.0), "+0.00");
        assert_eq!(signed(-2.5), "-2.50");
    }

    #[test]
    fn test_ratio_percent() {
        assert_eq!(ratio_percent(0.0123), "1.23%");
        assert_eq!(ratio_percent(-0.05), "-5.00%");
    }
}
