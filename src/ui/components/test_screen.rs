use std::time::Instant;

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::text::Line;
use ratatui::widgets::{Paragraph, Widget};

use crate::session::clock::RunClock;
use crate::session::typing_test::TypingTest;
use crate::ui::ansi;
use crate::ui::components::typing_area::TypingArea;
use crate::ui::layout::vertical_offset;
use crate::ui::terminal::TermSize;
use crate::ui::theme::{Palette, Style};
use crate::ui::viewport::indent;

pub const RESTART_HINT: &str = "ctrl+r to restart";

/// Clock line, word window and, before the first keystroke, the restart hint.
pub struct TestScreen<'a> {
    test: &'a TypingTest,
    clock: &'a RunClock,
    palette: &'a Palette,
    line_width_cap: usize,
    size: TermSize,
    now: Instant,
}

impl<'a> TestScreen<'a> {
    pub fn new(
        test: &'a TypingTest,
        clock: &'a RunClock,
        palette: &'a Palette,
        line_width_cap: usize,
        size: TermSize,
        now: Instant,
    ) -> Self {
        Self {
            test,
            clock,
            palette,
            line_width_cap,
            size,
            now,
        }
    }

    /// The blank rows above the clock, the clock and the indented word
    /// window, as one styled string.
    pub fn frame(&self) -> String {
        let window =
            TypingArea::new(self.test, self.palette, self.line_width_cap).render(self.size);

        let clock_style = if self.clock.is_running() {
            Style::RunningIndicator
        } else {
            Style::StoppedIndicator
        };
        let clock = self.palette.paint(clock_style, &self.clock.view(self.now));

        let mut frame = "\n".repeat(vertical_offset(self.size.height));
        frame.push_str(&indent(&clock, window.indent));
        frame.push_str("\n\n");
        frame.push_str(&indent(&window.lines.join("\n"), window.indent));
        frame
    }
}

impl Widget for TestScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let frame = self.frame();
        let rows = frame.split('\n').count() as u16;
        let [words, _, hint] = Layout::vertical([
            Constraint::Length(rows),
            Constraint::Length(2),
            Constraint::Length(1),
        ])
        .areas(area);

        Paragraph::new(ansi::to_text(&frame)).render(words, buf);
        if !self.clock.is_running() {
            Paragraph::new(Line::styled(RESTART_HINT, self.palette.style(Style::Pending)))
                .alignment(Alignment::Center)
                .render(hint, buf);
        }
    }
}
