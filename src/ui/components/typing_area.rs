use tracing::trace;

use crate::session::typing_test::TypingTest;
use crate::ui::colorize::colorize;
use crate::ui::cursor::find_cursor_line;
use crate::ui::terminal::TermSize;
use crate::ui::theme::Palette;
use crate::ui::viewport::{average_line_len, indent_width, lines_around_cursor};
use crate::ui::wrap::{line_limit, wrap_styled};

/// The few wrapped lines of the target text around the cursor.
pub struct TypingArea<'a> {
    test: &'a TypingTest,
    palette: &'a Palette,
    line_width_cap: usize,
}

/// A rendered window plus the padding that centers it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WordWindow {
    pub lines: Vec<String>,
    pub indent: usize,
    pub cursor_line: usize,
    pub total_lines: usize,
}

impl<'a> TypingArea<'a> {
    pub fn new(test: &'a TypingTest, palette: &'a Palette, line_width_cap: usize) -> Self {
        Self {
            test,
            palette,
            line_width_cap,
        }
    }

    pub fn render(&self, size: TermSize) -> WordWindow {
        let limit = line_limit(size.width, self.line_width_cap);
        let paragraph = colorize(
            &self.test.target,
            &self.test.input,
            &self.test.mistakes,
            self.palette,
        );
        let lines = wrap_styled(&paragraph, limit);
        let cursor_line = find_cursor_line(&lines, self.test.cursor());
        let indent = indent_width(size.width, average_line_len(&lines));

        trace!(
            width = size.width,
            limit,
            cursor = self.test.cursor(),
            cursor_line,
            total_lines = lines.len(),
            "typing area"
        );

        WordWindow {
            lines: lines_around_cursor(&lines, cursor_line).to_vec(),
            indent,
            cursor_line,
            total_lines: lines.len(),
        }
    }
}
