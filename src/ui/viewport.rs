use crate::ui::ansi;

/// Lines kept on screen: one above the cursor line and one below, or the
/// first three while the cursor is still on the first line.
pub const WINDOW_LINES: usize = 3;

/// The lines to show around `cursor_line`, clamped to what exists.
pub fn lines_around_cursor<S>(lines: &[S], cursor_line: usize) -> &[S] {
    let (low, high) = if cursor_line == 0 {
        (0, WINDOW_LINES)
    } else {
        (cursor_line - 1, cursor_line + WINDOW_LINES - 1)
    };
    let high = high.min(lines.len());
    let low = low.min(high);
    &lines[low..high]
}

/// Mean visible width of every line but the last, which is usually short.
/// A single line is measured on its own.
pub fn average_line_len<S: AsRef<str>>(lines: &[S]) -> usize {
    let measured = match lines {
        [] => return 0,
        [only] => std::slice::from_ref(only),
        [init @ .., _] => init,
    };
    let total: usize = measured.iter().map(|l| ansi::visible_len(l.as_ref())).sum();
    total / measured.len()
}

/// Left padding that centers a block of `avg_line_len` columns.
pub fn indent_width(term_width: u16, avg_line_len: usize) -> usize {
    (usize::from(term_width) / 2).saturating_sub(avg_line_len / 2)
}

/// Prefixes every line of `block` with `width` spaces.
pub fn indent(block: &str, width: usize) -> String {
    let pad = " ".repeat(width);
    block
        .split('\n')
        .map(|line| format!("{pad}{line}"))
        .collect::<Vec<_>>()
        .join("\n")
}
