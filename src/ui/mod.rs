pub mod ansi;
pub mod colorize;
pub mod components;
pub mod cursor;
pub mod layout;
pub mod terminal;
pub mod theme;
pub mod viewport;
pub mod wrap;

/// Text of every row of a rendered buffer.
#[cfg(test)]
pub(crate) fn buffer_rows(buf: &ratatui::buffer::Buffer) -> Vec<String> {
    let area = buf.area;
    (area.top()..area.bottom())
        .map(|y| {
            (area.left()..area.right())
                .map(|x| buf[(x, y)].symbol())
                .collect()
        })
        .collect()
}
