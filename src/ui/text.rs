use unicode_width::UnicodeWidthChar;

pub fn align_right(text: &str, width: usize) -> String {
    let extra: usize = text
        .chars()
        .filter_map(|c| c.width_cjk().and_then(|w| w.checked_sub(1)))
        .sum();
    format!(
        "{text:>width$}",
        width = width.checked_sub(extra).unwrap_or(width)
    )
}

/// Whole-dollar display with thousands separators, e.g. `$ 12,340`.
pub fn money(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if amount < 0 {
        format!("-$ {grouped}")
    } else {
        format!("$ {grouped}")
    }
}

/// Shortened magnitude display for wide numbers: 2300 -> `2.3K`.
pub fn unit(number: i64, precision: usize) -> String {
    let n = number as f64;
    if n.abs() >= 1e9 {
        format!("{:.precision$}B", n / 1e9)
    } else if n.abs() >= 1e6 {
        format!("{:.precision$}M", n / 1e6)
    } else if n.abs() >= 1e3 {
        format!("{:.precision$}K", n / 1e3)
    } else {
        number.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::{align_right, money, unit};

    #[test]
    fn test_align_right() {
        assert_eq!(align_right("text", 3), "text");
        assert_eq!(align_right("text", 10), "      text");
    }

    #[test]
    fn test_money() {
        assert_eq!(money(0), "$ 0");
        assert_eq!(money(7), "$ 7");
        assert_eq!(money(1234), "$ 1,234");
        assert_eq!(money(1_234_567), "$ 1,234,567");
        assert_eq!(money(-950), "-$ 950");
    }

    #[test]
    fn test_unit() {
        assert_eq!(unit(12, 0), "12");
        assert_eq!(unit(2300, 0), "2K");
        assert_eq!(unit(2300, 1), "2.3K");
        assert_eq!(unit(78_232_300, 2), "78.23M");
        assert_eq!(unit(29_278_232_300, 0), "29B");
    }
}
