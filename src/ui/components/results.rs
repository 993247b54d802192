use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use crate::session::clock::format_secs;
use crate::session::result::TestResult;
use crate::ui::layout::middle_band;
use crate::ui::theme::{Palette, Style};

/// Score summary shown after a run.
pub struct ResultsView<'a> {
    result: &'a TestResult,
    palette: &'a Palette,
}

impl<'a> ResultsView<'a> {
    pub fn new(result: &'a TestResult, palette: &'a Palette) -> Self {
        Self { result, palette }
    }

    fn value(&self, text: String) -> Span<'static> {
        Span::styled(text, self.palette.style(Style::Accent))
    }

    fn lines(&self) -> Vec<Line<'static>> {
        let r = self.result;

        let headline = Line::from(vec![
            Span::raw("wpm: "),
            Span::styled(r.wpm.to_string(), self.palette.style(Style::RunningIndicator)),
        ]);
        let rates = Line::from(vec![
            Span::raw("accuracy: "),
            self.value(format!("{:.1}", r.accuracy)),
            Span::raw(" raw: "),
            self.value(r.raw_wpm.to_string()),
            Span::raw(" cpm: "),
            self.value(r.cpm.to_string()),
        ]);

        let mut details = vec![
            Span::raw("time: "),
            self.value(format_secs(r.elapsed.as_secs())),
        ];
        if let Some(count) = r.word_count {
            details.push(Span::raw(" cnt: "));
            details.push(self.value(count.to_string()));
        }
        details.push(Span::raw(" words: "));
        details.push(self.value(r.corpus.to_string()));

        vec![headline, Line::from(""), rates, Line::from(details)]
    }
}

impl Widget for ResultsView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines = self.lines();
        let band = middle_band(area, lines.len() as u16);
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(band, buf);
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::generator::corpus::CorpusKey;
    use crate::ui::buffer_rows;

    fn result(word_count: Option<usize>) -> TestResult {
        TestResult {
            wpm: 62,
            raw_wpm: 70,
            cpm: 310,
            accuracy: 96.24,
            elapsed: Duration::from_secs(60),
            corpus: CorpusKey::Frankenstein,
            word_count,
        }
    }

    fn rendered(result: &TestResult) -> Vec<String> {
        let palette = Palette::default();
        let area = Rect::new(0, 0, 100, 30);
        let mut buf = Buffer::empty(area);
        ResultsView::new(result, &palette).render(area, &mut buf);
        buffer_rows(&buf)
    }

    #[test]
    fn test_word_count_run_shows_count() {
        let rows = rendered(&result(Some(50)));
        // Four rows centered in thirty.
        assert_eq!(rows[13].trim(), "wpm: 62");
        assert_eq!(rows[14].trim(), "");
        assert_eq!(rows[15].trim(), "accuracy: 96.2 raw: 70 cpm: 310");
        assert_eq!(rows[16].trim(), "time: 1m0s cnt: 50 words: frankenstein");
    }

    #[test]
    fn test_timer_run_omits_count() {
        let rows = rendered(&result(None));
        assert_eq!(rows[16].trim(), "time: 1m0s words: frankenstein");
        assert!(rows.iter().all(|row| !row.contains("cnt:")));
    }

    #[test]
    fn test_lines_are_centered() {
        let rows = rendered(&result(None));
        let headline = &rows[13];
        let left = headline.len() - headline.trim_start().len();
        let right = headline.len() - headline.trim_end().len();
        assert!(left.abs_diff(right) <= 1);
    }
}
