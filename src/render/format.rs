//! Display formatting for amounts and dates

use chrono::NaiveDate;

/// `$1,234,567`
pub fn currency(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    out.push('$');

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    out
}

/// Y axis tick: `$0.4B`, `$1.8B`
pub fn billions(amount: u64) -> String {
    format!("${:.1}B", amount as f64 / 1_000_000_000.0)
}

/// Table date: `01/24/2025`
pub fn table_date(date: NaiveDate) -> String {
    date.format("%m/%d/%Y").to_string()
}

/// X axis tick: `01/24`
pub fn tick_date(date: NaiveDate) -> String {
    date.format("%m/%d").to_string()
}

/// Escape text for HTML and SVG output
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency() {
        assert_eq!(currency(0), "$0");
        assert_eq!(currency(999), "$999");
        assert_eq!(currency(1_000), "$1,000");
        assert_eq!(currency(1_600_000), "$1,600,000");
        assert_eq!(currency(565_000_000), "$565,000,000");
    }

    #[test]
    fn test_billions() {
        assert_eq!(billions(0), "$0.0B");
        assert_eq!(billions(420_000_000), "$0.4B");
        assert_eq!(billions(1_799_600_000), "$1.8B");
    }

    #[test]
    fn test_dates() {
        let date = NaiveDate::from_ymd_opt(2025, 2, 3).unwrap();
        assert_eq!(table_date(date), "02/03/2025");
        assert_eq!(tick_date(date), "02/03");
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & Jerry's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
        );
    }
}
