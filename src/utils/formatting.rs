//! Formatting utilities used for CLI and export outputs.

use unicode_width::UnicodeWidthStr;

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

pub fn strip_ansi(s: &str) -> String {
    let re = regex::Regex::new(r"\x1B\[[0-9;]*[mK]").unwrap();
    re.replace_all(s, "").into_owned()
}

/// Terminal columns a string occupies once printed: ANSI codes are
/// invisible, CJK text is two columns per char.
pub fn visible_width(s: &str) -> usize {
    UnicodeWidthStr::width(strip_ansi(s).as_str())
}

/// Pad to `width` terminal columns, not chars. format!("{:<w$}") alone
/// would misalign the table on CJK or colored cells.
pub fn pad_right(s: &str, width: usize) -> String {
    let w = visible_width(s);
    if w >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - w))
    }
}

pub fn pad_left(s: &str, width: usize) -> String {
    let w = visible_width(s);
    if w >= width {
        s.to_string()
    } else {
        format!("{}{}", " ".repeat(width - w), s)
    }
}

/// 58000 → "58,000"
pub fn thousands(n: i64) -> String {
    let raw = n.abs().to_string();
    let mut out = String::new();
    for (i, c) in raw.chars().enumerate() {
        if i > 0 && (raw.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    if n < 0 { format!("-{out}") } else { out }
}

/// Truncate to `max` terminal columns, appending "..." when cut.
pub fn truncate_width(s: &str, max: usize) -> String {
    if UnicodeWidthStr::width(s) <= max {
        return s.to_string();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let cw = UnicodeWidthStr::width(c.to_string().as_str());
        if used + cw > max.saturating_sub(3) {
            break;
        }
        used += cw;
        out.push(c);
    }
    out.push_str("...");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thousands_grouping() {
        assert_eq!(thousands(0), "0");
        assert_eq!(thousands(86), "86");
        assert_eq!(thousands(4200), "4,200");
        assert_eq!(thousands(58000), "58,000");
        assert_eq!(thousands(1234567), "1,234,567");
    }

    #[test]
    fn cjk_padding_is_column_aware() {
        // 已完成 = 6 terminal columns
        assert_eq!(pad_right("已完成", 8), "已完成  ");
        assert_eq!(pad_left("已完成", 8), "  已完成");
    }
}
