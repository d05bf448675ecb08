use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const MIN_COL_WIDTH: u16 = 4;
pub const MAX_COL_WIDTH: u16 = 40;
pub const PADDING: u16 = 2;

/// Column widths fitting the header and every cell, clamped to
/// `MIN_COL_WIDTH..=MAX_COL_WIDTH`.
pub fn column_widths<S: AsRef<str>>(headers: &[S], rows: &[Vec<String>]) -> Vec<u16> {
    headers
        .iter()
        .enumerate()
        .map(|(i, header)| {
            let widest_cell = rows
                .iter()
                .filter_map(|row| row.get(i))
                .map(|cell| cell.width())
                .max()
                .unwrap_or(0);
            let content = header.as_ref().width().max(widest_cell) as u16;
            (content + PADDING).clamp(MIN_COL_WIDTH, MAX_COL_WIDTH)
        })
        .collect()
}

/// Cuts `s` to at most `max_width` display columns, ending in `…` when cut.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w + 1 > max_width {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn widths_fit_header_and_cells() {
        let headers = ["id", "name"];
        let rows = vec![vec!["1".to_string(), "a longer name".to_string()]];

        assert_eq!(column_widths(&headers, &rows), vec![4, 15]);
    }

    #[test]
    fn widths_are_capped() {
        let rows = vec![vec!["x".repeat(100)]];

        assert_eq!(column_widths(&["c"], &rows), vec![MAX_COL_WIDTH]);
    }

    #[test]
    fn short_text_is_untouched() {
        assert_eq!(truncate_to_width("sales", 10), "sales");
    }

    #[test]
    fn long_text_ends_with_ellipsis() {
        assert_eq!(truncate_to_width("transactions", 6), "trans…");
    }

    #[test]
    fn wide_characters_count_double() {
        assert_eq!(truncate_to_width("売上データ", 5), "売上…");
    }
}
