use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const DEFAULT_PREVIEW_WIDTH: usize = 48;

const ELLIPSIS: &str = "[\u{2026}]";
const QUOTE_BEGIN: char = '\u{201E}';
const QUOTE_END: char = '\u{201C}';

/// Cuts `text` at its first line break and to at most `max_width` columns,
/// marking shortened text with `[…]`.
pub fn shorten(text: &str, max_width: usize) -> String {
    let first_line = text.split(['\n', '\r']).next().unwrap_or_default();
    let mut shortened = first_line.len() != text.len();

    let mut out = String::with_capacity(first_line.len());
    if first_line.width() <= max_width {
        out.push_str(first_line);
    } else {
        let mut width = 0;
        for c in first_line.chars() {
            width += c.width().unwrap_or(0);
            if width > max_width {
                break;
            }
            out.push(c);
        }
        shortened = true;
    }

    if shortened {
        out.push_str(ELLIPSIS);
    }
    out
}

/// Wraps `text` in „low-high“ quotes.
pub fn quote(text: &str) -> String {
    format!("{QUOTE_BEGIN}{text}{QUOTE_END}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_is_unchanged() {
        assert_eq!(shorten("Start game", DEFAULT_PREVIEW_WIDTH), "Start game");
    }

    #[test]
    fn test_cut_at_line_break() {
        assert_eq!(shorten("line1\nline2", DEFAULT_PREVIEW_WIDTH), "line1[\u{2026}]");
    }

    #[test]
    fn test_cut_at_width() {
        assert_eq!(shorten("abcdefgh", 5), "abcde[\u{2026}]");
    }

    #[test]
    fn test_wide_characters_count_double() {
        assert_eq!(shorten("日本語テキスト", 6), "日本語[\u{2026}]");
    }

    #[test]
    fn test_quote() {
        assert_eq!(quote("Hello"), "\u{201E}Hello\u{201C}");
    }
}
