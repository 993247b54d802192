//! Word wrapping for colorized text.
//!
//! Spaces are swapped for a private-use marker before wrapping so that the
//! marker is the only place a line may end. `textwrap` picks the breaks; this
//! module turns each marker back into a space and keeps styles open across
//! line ends. The space stays at the end of the line it closes, so the visible
//! characters of all lines, concatenated, are exactly the input text.

use textwrap::WordSeparator;
use textwrap::core::Word;
use textwrap::wrap_algorithms::wrap_first_fit;

use crate::ui::ansi::{self, Segment};

/// Private-use character standing in for a space while wrapping.
pub const BREAKPOINT: char = '\u{E000}';

/// Stray newlines become no-break spaces: one column, never a break.
const NO_BREAK: char = '\u{A0}';

/// Widest a line of words may get, whatever the terminal size.
pub const DEFAULT_LINE_WIDTH_CAP: usize = 40;

/// Six tenths of the terminal, capped.
pub fn line_limit(term_width: u16, cap: usize) -> usize {
    let reactive = (usize::from(term_width) / 10) * 6;
    cap.min(reactive).max(1)
}

/// Wraps `paragraph` so no line shows more than `limit` characters before its
/// closing space.
///
/// Lines only break at spaces, and the space that ends a line does not count
/// towards its width. A single word longer than `limit` gets a line of its own
/// and overflows it. Escape sequences travel with the glyph that follows them,
/// and a style still open at the end of a line is closed there and reopened at
/// the start of the next one.
pub fn wrap_styled(paragraph: &str, limit: usize) -> Vec<String> {
    let marked: String = paragraph
        .chars()
        .map(|ch| match ch {
            ' ' => BREAKPOINT,
            '\n' | '\r' => NO_BREAK,
            other => other,
        })
        .collect();

    let words: Vec<Word<'_>> = WordSeparator::Custom(split_at_breakpoints)
        .find_words(&marked)
        .collect();
    let rows = wrap_first_fit(&words, &[limit.max(1) as f64]);

    let mut styles = OpenStyles::default();
    let mut lines = Vec::with_capacity(rows.len());
    for (index, row) in rows.iter().enumerate() {
        let mut line = styles.reopen();
        for word in row.iter() {
            line.push_str(word.word);
            line.push_str(word.whitespace);
            styles.track(word.word);
        }
        if index + 1 < rows.len() && styles.is_open() {
            line.push_str(ansi::RESET);
        }
        lines.push(line);
    }
    lines
}

/// One word per breakpoint, carrying the space the breakpoint stands for.
fn split_at_breakpoints(line: &str) -> Box<dyn Iterator<Item = Word<'_>> + '_> {
    Box::new(line.split_inclusive(BREAKPOINT).map(|chunk| {
        match chunk.strip_suffix(BREAKPOINT) {
            Some(text) => {
                let mut word = Word::from(text);
                word.whitespace = " ";
                word
            }
            None => Word::from(chunk),
        }
    }))
}

/// Escapes written since the last full reset, oldest first, no repeats.
#[derive(Default)]
struct OpenStyles<'a> {
    active: Vec<&'a str>,
}

impl<'a> OpenStyles<'a> {
    fn track(&mut self, text: &'a str) {
        for segment in ansi::segments(text) {
            let Segment::Escape(escape) = segment else {
                continue;
            };
            if ansi::is_reset(escape) {
                self.active.clear();
            } else {
                self.active.retain(|seen| *seen != escape);
                self.active.push(escape);
            }
        }
    }

    fn is_open(&self) -> bool {
        !self.active.is_empty()
    }

    fn reopen(&self) -> String {
        self.active.concat()
    }
}
