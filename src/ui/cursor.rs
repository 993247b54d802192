use crate::ui::ansi;

/// Index of the wrapped line holding logical position `cursor`.
///
/// Lengths are measured with styling stripped, so only typed characters
/// count. A cursor at or past the end of the text maps to `lines.len()`.
pub fn find_cursor_line<S: AsRef<str>>(lines: &[S], cursor: usize) -> usize {
    let mut seen = 0;
    for (index, line) in lines.iter().enumerate() {
        seen += ansi::visible_len(line.as_ref());
        if cursor < seen {
            return index;
        }
    }
    lines.len()
}
