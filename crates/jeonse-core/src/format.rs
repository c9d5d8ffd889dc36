/// Groups digits by thousands: `1234567` becomes `1,234,567`.
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

pub fn format_ratio(ratio: Option<f64>) -> String {
    ratio.map(format_ratio_value).unwrap_or_else(|| "-".to_string())
}

pub(crate) fn format_ratio_value(ratio: f64) -> String {
    format!("{ratio:.1}%")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thousands_grouping() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1000), "1,000");
        assert_eq!(format_thousands(10_000), "10,000");
        assert_eq!(format_thousands(123_456), "123,456");
        assert_eq!(format_thousands(1_234_567), "1,234,567");
        assert_eq!(format_thousands(u64::MAX), "18,446,744,073,709,551,615");
    }

    #[test]
    fn ratio_text() {
        assert_eq!(format_ratio(Some(80.0)), "80.0%");
        assert_eq!(format_ratio(Some(56.7)), "56.7%");
        assert_eq!(format_ratio(None), "-");
    }
}
