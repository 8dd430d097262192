//! Column helpers shared by the text renderers.

use unicode_width::UnicodeWidthStr;

/// Left-aligns `text` in a column of `width` terminal cells.
///
/// Player names carry accented characters (`Stützle`, `Lindström`), so the
/// padding is computed from display width rather than byte length. Longer
/// text is returned unchanged.
pub fn pad_right(text: &str, width: usize) -> String {
    let used = text.width();
    if used >= width {
        text.to_string()
    } else {
        format!("{text}{}", " ".repeat(width - used))
    }
}

/// A horizontal rule of `len` copies of `ch`.
pub fn rule(ch: char, len: usize) -> String {
    std::iter::repeat_n(ch, len).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pad_right_counts_display_width() {
        assert_eq!(pad_right("DAL", 6), "DAL   ");
        assert_eq!(pad_right("Stützle", 9), "Stützle  ");
        assert_eq!(pad_right("Tim Stützle", 4), "Tim Stützle");
    }

    #[test]
    fn test_rule() {
        assert_eq!(rule('-', 5), "-----");
        assert!(rule('=', 0).is_empty());
    }
}
