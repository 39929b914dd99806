//! 数値の変換と表示フォーマット

/// CSVセルの文字列を整数に変換
///
/// 受け付ける形式:
/// - 前後の空白
/// - 先頭の `+` / `-`
/// - 3桁区切りのカンマ（`1,200`）
/// - 小数表記（`1200.0`、小数部は0方向へ切り捨て）
///
/// 空文字・`NaN`・数値以外は `None`
pub fn parse_integer(text: &str) -> Option<i64> {
    let cleaned = strip_grouping(text.trim())?;
    if cleaned.is_empty() {
        return None;
    }

    let unsigned = match cleaned.strip_prefix('+') {
        Some(rest) if rest.starts_with(['+', '-']) => return None,
        Some(rest) => rest,
        None => cleaned.as_str(),
    };
    if let Ok(value) = unsigned.parse::<i64>() {
        return Some(value);
    }

    // "1200.0" のような浮動小数表記（pandasの欠損混じり列はこうなる）
    let is_decimal = unsigned
        .trim_start_matches('-')
        .chars()
        .all(|c| c.is_ascii_digit() || c == '.');
    if !is_decimal {
        return None;
    }

    let value = unsigned.parse::<f64>().ok()?;
    if !value.is_finite() || value.abs() >= i64::MAX as f64 {
        return None;
    }
    Some(value.trunc() as i64)
}

/// 3桁区切りのカンマを外す
///
/// 先頭グループは1〜3桁、以降は3桁ちょうど。小数部にカンマは不可。
fn strip_grouping(text: &str) -> Option<String> {
    if !text.contains(',') {
        return Some(text.to_string());
    }

    let body = text.trim_start_matches(['+', '-']);
    let sign = &text[..text.len() - body.len()];
    let (int_part, frac) = match body.split_once('.') {
        Some((int_part, frac)) => (int_part, Some(frac)),
        None => (body, None),
    };
    if frac.is_some_and(|f| f.contains(',')) {
        return None;
    }

    let is_digits = |g: &str| g.bytes().all(|b| b.is_ascii_digit());
    let mut groups = int_part.split(',');
    let first = groups.next()?;
    if !(1..=3).contains(&first.len()) || !is_digits(first) {
        return None;
    }
    if !groups.all(|g| g.len() == 3 && is_digits(g)) {
        return None;
    }

    let mut cleaned = format!("{}{}", sign, int_part.replace(',', ""));
    if let Some(frac) = frac {
        cleaned.push('.');
        cleaned.push_str(frac);
    }
    Some(cleaned)
}

/// 3桁区切り（`1234567` → `1,234,567`）
pub fn format_grouped(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    if value < 0 {
        grouped.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

/// ゲーム数表示（`8,123G`）
pub fn format_games(games: i64) -> String {
    format!("{}G", format_grouped(games))
}

/// 差枚表示（常に `+` を付ける: `+1,200枚`）
pub fn format_diff(diff: i64) -> String {
    format!("+{}枚", format_grouped(diff))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain() {
        assert_eq!(parse_integer("1200"), Some(1200));
        assert_eq!(parse_integer("  42 "), Some(42));
        assert_eq!(parse_integer("-350"), Some(-350));
        assert_eq!(parse_integer("0"), Some(0));
    }

    #[test]
    fn test_parse_signed_and_grouped() {
        assert_eq!(parse_integer("+1,200"), Some(1200));
        assert_eq!(parse_integer("-12,345"), Some(-12345));
        assert_eq!(parse_integer("1,234,567"), Some(1_234_567));
    }

    #[test]
    fn test_parse_float_text() {
        assert_eq!(parse_integer("1200.0"), Some(1200));
        assert_eq!(parse_integer("99.9"), Some(99));
        assert_eq!(parse_integer("-5.5"), Some(-5));
        assert_eq!(parse_integer("1,200.0"), Some(1200));
    }

    #[test]
    fn test_parse_invalid() {
        assert_eq!(parse_integer(""), None);
        assert_eq!(parse_integer("   "), None);
        assert_eq!(parse_integer("NaN"), None);
        assert_eq!(parse_integer("inf"), None);
        assert_eq!(parse_integer("abc"), None);
        assert_eq!(parse_integer("12枚"), None);
        assert_eq!(parse_integer("1e5"), None);
        assert_eq!(parse_integer("++5"), None);
        assert_eq!(parse_integer("+-5"), None);
    }

    #[test]
    fn test_parse_malformed_grouping() {
        assert_eq!(parse_integer("1,2,3"), None);
        assert_eq!(parse_integer(",5"), None);
        assert_eq!(parse_integer("12,,"), None);
        assert_eq!(parse_integer("1,000,"), None);
        assert_eq!(parse_integer("1234,567"), None);
        assert_eq!(parse_integer("1,20"), None);
        assert_eq!(parse_integer("1.0,00"), None);
        assert_eq!(parse_integer("-,100"), None);
        assert_eq!(parse_integer("++1,000"), None);
    }

    #[test]
    fn test_format_grouped() {
        assert_eq!(format_grouped(0), "0");
        assert_eq!(format_grouped(999), "999");
        assert_eq!(format_grouped(1000), "1,000");
        assert_eq!(format_grouped(1_234_567), "1,234,567");
        assert_eq!(format_grouped(-4500), "-4,500");
        assert_eq!(format_grouped(i64::MIN), "-9,223,372,036,854,775,808");
    }

    #[test]
    fn test_format_units() {
        assert_eq!(format_games(8123), "8,123G");
        assert_eq!(format_games(512), "512G");
        assert_eq!(format_diff(1200), "+1,200枚");
        assert_eq!(format_diff(0), "+0枚");
    }
}
