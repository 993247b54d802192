//! Measuring styled strings.
//!
//! The colorizer emits SGR escape sequences (`ESC [ params m`). Everything
//! that needs the on-screen width of a styled string, or its ratatui form,
//! goes through this module so the escape format is matched in exactly one
//! place. Text that looks like an escape but does not match the pattern is
//! measured as plain characters.

use std::borrow::Cow;
use std::mem;
use std::sync::LazyLock;

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use regex::Regex;

static SGR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("\x1b\\[[0-9;]*m").expect("SGR pattern is valid"));

/// Full attribute reset.
pub const RESET: &str = "\x1b[0m";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Segment<'a> {
    Escape(&'a str),
    Glyph(char),
}

pub fn strip(styled: &str) -> Cow<'_, str> {
    SGR.replace_all(styled, "")
}

/// Number of characters left once styling is removed.
pub fn visible_len(styled: &str) -> usize {
    strip(styled).chars().count()
}

/// Splits a styled string into escape sequences and the glyphs between them.
pub fn segments(styled: &str) -> Vec<Segment<'_>> {
    let mut out = Vec::with_capacity(styled.len());
    let mut last = 0;
    for m in SGR.find_iter(styled) {
        out.extend(styled[last..m.start()].chars().map(Segment::Glyph));
        out.push(Segment::Escape(m.as_str()));
        last = m.end();
    }
    out.extend(styled[last..].chars().map(Segment::Glyph));
    out
}

/// Whether an escape sequence clears every active attribute.
pub fn is_reset(escape: &str) -> bool {
    escape == RESET || escape == "\x1b[m"
}

/// A styled line as ratatui spans, one span per run of equal style.
pub fn to_line(styled: &str) -> Line<'static> {
    let mut spans = Vec::new();
    let mut style = Style::default();
    let mut run = String::new();
    for segment in segments(styled) {
        match segment {
            Segment::Glyph(ch) => run.push(ch),
            Segment::Escape(escape) => {
                let next = apply_sgr(style, escape);
                if next != style && !run.is_empty() {
                    spans.push(Span::styled(mem::take(&mut run), style));
                }
                style = next;
            }
        }
    }
    if !run.is_empty() {
        spans.push(Span::styled(run, style));
    }
    Line::from(spans)
}

/// A styled frame, one line per `\n`.
pub fn to_text(frame: &str) -> Text<'static> {
    frame.split('\n').map(to_line).collect()
}

/// Folds the parameters of one SGR escape into `style`. Unknown codes are
/// skipped.
fn apply_sgr(mut style: Style, escape: &str) -> Style {
    let params = escape
        .trim_start_matches("\x1b[")
        .trim_end_matches('m');
    if params.is_empty() {
        return Style::default();
    }

    let mut codes = params.split(';').map(|code| code.parse::<u16>().unwrap_or(0));
    while let Some(code) = codes.next() {
        style = match code {
            0 => Style::default(),
            1 => style.add_modifier(Modifier::BOLD),
            2 => style.add_modifier(Modifier::DIM),
            3 => style.add_modifier(Modifier::ITALIC),
            4 => style.add_modifier(Modifier::UNDERLINED),
            5 => style.add_modifier(Modifier::SLOW_BLINK),
            6 => style.add_modifier(Modifier::RAPID_BLINK),
            7 => style.add_modifier(Modifier::REVERSED),
            8 => style.add_modifier(Modifier::HIDDEN),
            9 => style.add_modifier(Modifier::CROSSED_OUT),
            22 => style.remove_modifier(Modifier::BOLD | Modifier::DIM),
            23 => style.remove_modifier(Modifier::ITALIC),
            24 => style.remove_modifier(Modifier::UNDERLINED),
            25 => style.remove_modifier(Modifier::SLOW_BLINK | Modifier::RAPID_BLINK),
            27 => style.remove_modifier(Modifier::REVERSED),
            28 => style.remove_modifier(Modifier::HIDDEN),
            29 => style.remove_modifier(Modifier::CROSSED_OUT),
            30..=37 => style.fg(Color::Indexed((code - 30) as u8)),
            90..=97 => style.fg(Color::Indexed((code - 90 + 8) as u8)),
            40..=47 => style.bg(Color::Indexed((code - 40) as u8)),
            100..=107 => style.bg(Color::Indexed((code - 100 + 8) as u8)),
            38 => match extended_color(&mut codes) {
                Some(color) => style.fg(color),
                None => style,
            },
            48 => match extended_color(&mut codes) {
                Some(color) => style.bg(color),
                None => style,
            },
            39 => style.fg(Color::Reset),
            49 => style.bg(Color::Reset),
            _ => style,
        };
    }
    style
}

/// The color after a `38` or `48`: `5;n` or `2;r;g;b`.
fn extended_color(codes: &mut impl Iterator<Item = u16>) -> Option<Color> {
    let mut channel = || codes.next().and_then(|code| u8::try_from(code).ok());
    match channel()? {
        5 => Some(Color::Indexed(channel()?)),
        2 => Some(Color::Rgb(channel()?, channel()?, channel()?)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_plain_text_is_unchanged() {
        assert_eq!(strip("hello world"), "hello world");
        assert!(matches!(strip("abc"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_visible_len_ignores_sgr() {
        let styled = "\x1b[38;5;1m\x1b[4mc\x1b[0m\x1b[2mat\x1b[0m";
        assert_eq!(visible_len(styled), 3);
        assert_eq!(strip(styled), "cat");
    }

    #[test]
    fn test_visible_len_counts_chars_not_bytes() {
        assert_eq!(visible_len("\x1b[1mné\x1b[0m"), 2);
        assert_eq!(visible_len("über"), 4);
    }

    #[test]
    fn test_unterminated_escape_is_measured_as_text() {
        // Missing the final `m`: left alone rather than swallowed.
        assert_eq!(visible_len("\x1b[31abc"), 7);
    }

    #[test]
    fn test_segments_split_escapes_from_glyphs() {
        let segs = segments("a\x1b[1mb\x1b[0m");
        assert_eq!(
            segs,
            vec![
                Segment::Glyph('a'),
                Segment::Escape("\x1b[1m"),
                Segment::Glyph('b'),
                Segment::Escape("\x1b[0m"),
            ]
        );
    }

    #[test]
    fn test_is_reset() {
        assert!(is_reset("\x1b[0m"));
        assert!(is_reset("\x1b[m"));
        assert!(!is_reset("\x1b[39m"));
    }

    #[test]
    fn test_to_line_splits_styled_runs() {
        let line = to_line("\x1b[38;5;1m\x1b[4mc\x1b[0mat\x1b[1m\x1b[7m \x1b[0m");
        assert_eq!(line.spans.len(), 3);
        assert_eq!(line.spans[0].content, "c");
        assert_eq!(
            line.spans[0].style,
            Style::default()
                .fg(Color::Indexed(1))
                .add_modifier(Modifier::UNDERLINED)
        );
        assert_eq!(line.spans[1].content, "at");
        assert_eq!(line.spans[1].style, Style::default());
        assert_eq!(
            line.spans[2].style,
            Style::default().add_modifier(Modifier::BOLD | Modifier::REVERSED)
        );
    }

    #[test]
    fn test_rgb_and_reset_colors() {
        let line = to_line("\x1b[38;2;255;128;0mx\x1b[39my");
        assert_eq!(line.spans[0].style.fg, Some(Color::Rgb(255, 128, 0)));
        assert_eq!(line.spans[1].style.fg, Some(Color::Reset));
    }

    #[test]
    fn test_malformed_color_is_skipped() {
        let line = to_line("\x1b[38;5mx");
        assert_eq!(line.spans[0].style, Style::default());
        assert_eq!(line.spans[0].content, "x");
    }

    #[test]
    fn test_to_text_keeps_rows() {
        let text = to_text("a\n\n\x1b[2mb\x1b[0m");
        assert_eq!(text.lines.len(), 3);
        assert!(text.lines[1].spans.is_empty());
        assert_eq!(text.lines[2].spans[0].style.add_modifier, Modifier::DIM);
    }
}
