use std::ops::Range;

use unicode_width::UnicodeWidthStr;

/// Display width in terminal cells. Tabs count as 4 cells.
pub fn display_width(s: &str) -> usize {
    s.split('\t')
        .enumerate()
        .map(|(i, part)| {
            let w = UnicodeWidthStr::width(part);
            if i > 0 { w + 4 } else { w }
        })
        .sum()
}

/// Convert byte offset to display column (terminal cells).
pub fn byte_offset_to_display_col(s: &str, byte_offset: usize) -> usize {
    let clamped = byte_offset.min(s.len());
    display_width(&s[..clamped])
}

/// A line of `^` under `span` of `s`, padded so it lines up when printed
/// directly below `s`. Always at least one caret.
pub fn caret_line(s: &str, span: &Range<usize>) -> String {
    let start = byte_offset_to_display_col(s, span.start);
    let end = byte_offset_to_display_col(s, span.end);
    let width = end.saturating_sub(start).max(1);
    format!("{}{}", " ".repeat(start), "^".repeat(width))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_width_ascii_and_wide() {
        assert_eq!(display_width("today"), 5);
        assert_eq!(display_width("会議"), 4);
        assert_eq!(display_width("a\tb"), 6);
    }

    #[test]
    fn test_caret_line_ascii() {
        assert_eq!(caret_line("call mom today", &(9..14)), "         ^^^^^");
    }

    #[test]
    fn test_caret_line_after_wide_chars() {
        // "会議 " is 7 bytes but 5 cells
        let s = "会議 today";
        assert_eq!(caret_line(s, &(7..12)), "     ^^^^^");
    }

    #[test]
    fn test_caret_line_empty_span() {
        assert_eq!(caret_line("abc", &(3..3)), "   ^");
    }
}
