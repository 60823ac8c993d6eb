use chrono::{DateTime, Local};

/// `1234567` → `"1,234,567"`.
pub fn format_number(value: impl Into<u64>) -> String {
    let digits = value.into().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

pub fn format_count(value: usize) -> String {
    format_number(value as u64)
}

pub fn format_timestamp(at: &DateTime<Local>) -> String {
    at.format("%Y-%m-%d %H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thousands_are_separated() {
        assert_eq!(format_number(0u64), "0");
        assert_eq!(format_number(999u64), "999");
        assert_eq!(format_number(1000u64), "1,000");
        assert_eq!(format_number(1_234_567u64), "1,234,567");
        assert_eq!(format_count(100_000), "100,000");
    }
}
