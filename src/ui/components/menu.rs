use std::time::Duration;

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use crate::config::Config;
use crate::generator::corpus::CorpusKey;
use crate::session::clock::format_secs;
use crate::session::settings::{
    RunMode, RunSettings, TIME_OPTIONS, WORD_COUNT_OPTIONS, nearest_option,
};
use crate::ui::layout::middle_band;
use crate::ui::theme::{Palette, Style};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunKind {
    Timer,
    WordCount,
}

impl RunKind {
    fn label(self) -> &'static str {
        match self {
            RunKind::Timer => "Timer run",
            RunKind::WordCount => "Word count run",
        }
    }

    fn option_count(self) -> usize {
        match self {
            RunKind::Timer => TIME_OPTIONS.len(),
            RunKind::WordCount => WORD_COUNT_OPTIONS.len(),
        }
    }
}

/// What a row's focus sits on: the row itself or one of its bracketed
/// options.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Focus {
    Row,
    Length,
    Corpus,
}

impl Focus {
    fn next(self) -> Self {
        match self {
            Focus::Row => Focus::Length,
            Focus::Length => Focus::Corpus,
            Focus::Corpus => Focus::Corpus,
        }
    }

    fn prev(self) -> Self {
        match self {
            Focus::Row | Focus::Length => Focus::Row,
            Focus::Corpus => Focus::Length,
        }
    }

    fn cycle(self) -> Self {
        match self {
            Focus::Row => Focus::Length,
            Focus::Length => Focus::Corpus,
            Focus::Corpus => Focus::Row,
        }
    }
}

#[derive(Clone, Debug)]
pub struct MenuRow {
    pub kind: RunKind,
    pub length: usize,
    pub corpus: usize,
    pub focus: Focus,
}

impl MenuRow {
    fn new(kind: RunKind, length: usize, corpus: usize) -> Self {
        Self {
            kind,
            length,
            corpus,
            focus: Focus::Row,
        }
    }

    fn length_label(&self) -> String {
        match self.kind {
            RunKind::Timer => format_secs(TIME_OPTIONS[self.length]),
            RunKind::WordCount => WORD_COUNT_OPTIONS[self.length].to_string(),
        }
    }

    fn corpus_key(&self) -> CorpusKey {
        CorpusKey::ALL[self.corpus]
    }

    fn step(&mut self, forward: bool) {
        let (index, len) = match self.focus {
            Focus::Row => return,
            Focus::Length => (&mut self.length, self.kind.option_count()),
            Focus::Corpus => (&mut self.corpus, CorpusKey::ALL.len()),
        };
        *index = if forward {
            (*index + 1) % len
        } else {
            (*index + len - 1) % len
        };
    }
}

/// Main menu: one row per run kind, each with its own length and corpus.
#[derive(Clone, Debug)]
pub struct Menu {
    pub rows: Vec<MenuRow>,
    pub selected: usize,
}

impl Menu {
    pub fn new(config: &Config) -> Self {
        let corpus = CorpusKey::ALL
            .iter()
            .position(|key| *key == config.corpus)
            .unwrap_or(0);
        let time = nearest_option(TIME_OPTIONS, config.duration_secs);
        let words = nearest_option(WORD_COUNT_OPTIONS.map(|c| c as u64), config.word_count as u64);
        Self {
            rows: vec![
                MenuRow::new(RunKind::Timer, time, corpus),
                MenuRow::new(RunKind::WordCount, words, corpus),
            ],
            selected: 0,
        }
    }

    fn current(&mut self) -> &mut MenuRow {
        &mut self.rows[self.selected]
    }

    /// Moves to the previous row, or cycles the focused option backwards.
    pub fn up(&mut self) {
        if self.rows[self.selected].focus == Focus::Row {
            self.selected = (self.selected + self.rows.len() - 1) % self.rows.len();
        } else {
            self.current().step(false);
        }
    }

    pub fn down(&mut self) {
        if self.rows[self.selected].focus == Focus::Row {
            self.selected = (self.selected + 1) % self.rows.len();
        } else {
            self.current().step(true);
        }
    }

    pub fn left(&mut self) {
        let row = self.current();
        row.focus = row.focus.prev();
    }

    pub fn right(&mut self) {
        let row = self.current();
        row.focus = row.focus.next();
    }

    pub fn tab(&mut self) {
        let row = self.current();
        row.focus = row.focus.cycle();
    }

    pub fn selection(&self) -> RunSettings {
        let row = &self.rows[self.selected];
        let mode = match row.kind {
            RunKind::Timer => RunMode::Timed(Duration::from_secs(TIME_OPTIONS[row.length])),
            RunKind::WordCount => RunMode::WordCount(WORD_COUNT_OPTIONS[row.length]),
        };
        RunSettings {
            mode,
            corpus: row.corpus_key(),
        }
    }

    pub fn view<'a>(&'a self, palette: &'a Palette) -> MenuView<'a> {
        MenuView {
            menu: self,
            palette,
        }
    }
}

/// The menu drawn in the middle of the screen.
pub struct MenuView<'a> {
    menu: &'a Menu,
    palette: &'a Palette,
}

impl MenuView<'_> {
    fn row_line(&self, row: &MenuRow, selected: bool) -> Line<'static> {
        let marker = |text: &'static str| {
            if selected {
                Span::styled(text, self.palette.style(Style::RunningIndicator))
            } else {
                Span::raw(" ")
            }
        };
        let option = |focus: Focus, text: String| {
            let style = if selected && row.focus == focus {
                Style::RunningIndicator
            } else {
                Style::Accent
            };
            [
                Span::raw("["),
                Span::styled(text, self.palette.style(style)),
                Span::raw("]"),
            ]
        };

        let mut spans = vec![marker(">"), Span::raw(format!(" {} ", row.kind.label()))];
        spans.extend(option(Focus::Length, row.length_label()));
        spans.push(Span::raw(" "));
        spans.extend(option(Focus::Corpus, row.corpus_key().as_str().to_string()));
        spans.push(Span::raw(" "));
        spans.push(marker("<"));
        Line::from(spans)
    }
}

impl Widget for MenuView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut lines = vec![
            Line::from(Span::styled("typioca", self.palette.style(Style::Accent))),
            Line::from(""),
        ];
        for (index, row) in self.menu.rows.iter().enumerate() {
            lines.push(Line::from(""));
            lines.push(self.row_line(row, index == self.menu.selected));
        }

        let band = middle_band(area, lines.len() as u16);
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(band, buf);
    }
}
