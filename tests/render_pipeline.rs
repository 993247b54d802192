use std::io;
use std::time::{Duration, Instant};

use rand::SeedableRng;
use rand::rngs::SmallRng;

use typioca::generator::TextGenerator;
use typioca::generator::corpus::{CorpusKey, WordList};
use typioca::generator::word_pool::WordPoolGenerator;
use typioca::session::clock::RunClock;
use typioca::session::mistakes::MistakeLedger;
use typioca::session::typing_test::TypingTest;
use typioca::ui::ansi;
use typioca::ui::colorize::colorize;
use typioca::ui::components::test_screen::TestScreen;
use typioca::ui::cursor::find_cursor_line;
use typioca::ui::terminal::{FALLBACK_SIZE, TermSize};
use typioca::ui::theme::{Palette, Style};
use typioca::ui::viewport::lines_around_cursor;
use typioca::ui::wrap::{line_limit, wrap_styled};

fn chars(s: &str) -> Vec<char> {
    s.chars().collect()
}

fn seeded_text(words: usize, seed: u64) -> String {
    let list = WordList::load(CorpusKey::CommonWords).unwrap();
    WordPoolGenerator::new(&list, SmallRng::seed_from_u64(seed))
        .generate(words)
        .unwrap()
}

#[test]
fn test_mistake_renders_expected_char_across_wrapped_lines() {
    let palette = Palette::default();
    let target = chars("the cat sat on the mat");
    let input = chars("the dog");
    let mut ledger = MistakeLedger::new();
    ledger.record_mistake(4);

    let paragraph = colorize(&target, &input, &ledger, &palette);

    let correct: String = "the "
        .chars()
        .map(|ch| palette.paint(Style::Correct, &ch.to_string()))
        .collect();
    assert!(paragraph.starts_with(&correct));
    assert!(paragraph.contains(&palette.paint(Style::Mistake, "c")));
    assert!(!paragraph.contains(&palette.paint(Style::Mistake, "d")));
    assert!(paragraph.contains(&palette.paint(Style::Correct, "o")));
    assert!(paragraph.contains(&palette.paint(Style::Correct, "g")));
    assert!(paragraph.contains(&palette.paint(Style::Cursor, " ")));
    assert!(paragraph.ends_with(&palette.paint(Style::Pending, "sat on the mat")));

    let lines = wrap_styled(&paragraph, 10);
    let plain: Vec<String> = lines.iter().map(|l| ansi::strip(l).into_owned()).collect();
    assert_eq!(plain, ["the cog ", "sat on the ", "mat"]);

    // The cursor sits on the space closing the first line.
    assert_eq!(find_cursor_line(&lines, input.len()), 0);
    assert_eq!(find_cursor_line(&lines, 8), 1);
}

#[test]
fn test_unknown_terminal_size_still_renders() {
    let size = TermSize::from_query(Err(io::Error::other("not a tty")));
    assert_eq!(size, FALLBACK_SIZE);
    assert_eq!(line_limit(size.width, 40), 40);

    let test = TypingTest::new(&seeded_text(30, 1));
    let clock = RunClock::countdown(Duration::from_secs(30));
    let palette = Palette::default();
    let frame = TestScreen::new(&test, &clock, &palette, 40, size, Instant::now()).frame();

    let plain = ansi::strip(&frame);
    assert!(!plain.trim().is_empty());
    assert!(plain.contains("30s"));
}

#[test]
fn test_cursor_line_and_window_follow_typing() {
    let palette = Palette::default();
    let text = seeded_text(60, 42);
    let target = chars(&text);
    let ledger = MistakeLedger::new();

    let mut previous = 0;
    for cursor in 0..=target.len() {
        let paragraph = colorize(&target, &target[..cursor], &ledger, &palette);
        let lines = wrap_styled(&paragraph, 24);

        let rejoined: String = lines.iter().map(|l| ansi::strip(l).into_owned()).collect();
        assert_eq!(rejoined, text);

        let cursor_line = find_cursor_line(&lines, cursor);
        assert!(cursor_line >= previous, "cursor line went back at {cursor}");
        previous = cursor_line;

        let window = lines_around_cursor(&lines, cursor_line);
        assert!((1..=3).contains(&window.len()));
        if lines.len() >= 3 && (cursor_line == 0 || cursor_line + 1 < lines.len()) {
            assert_eq!(window.len(), 3);
        }
    }
    assert!(previous > 0);
}

#[test]
fn test_wrapped_lines_respect_limit() {
    let palette = Palette::default();
    let text = seeded_text(100, 7);
    let target = chars(&text);
    let input: Vec<char> = target[..target.len() / 2]
        .iter()
        .enumerate()
        .map(|(i, &ch)| if i % 7 == 3 { '#' } else { ch })
        .collect();
    let mut ledger = MistakeLedger::new();
    for (i, (&typed, &expected)) in input.iter().zip(&target).enumerate() {
        if typed != expected {
            ledger.record_mistake(i);
        }
    }

    let paragraph = colorize(&target, &input, &ledger, &palette);
    for width in [10u16, 16, 30, 60, 200] {
        let limit = line_limit(width, 40);
        for line in wrap_styled(&paragraph, limit) {
            let visible = ansi::strip(&line);
            let trimmed = visible.trim_end_matches(' ');
            let width = trimmed.chars().count();
            let single_long_word = !trimmed.contains(' ') && width > limit;
            assert!(
                width <= limit || single_long_word,
                "{trimmed:?} is {width} wide, over limit {limit}"
            );
        }
    }
}

#[test]
fn test_word_as_wide_as_limit_fits() {
    let lines = wrap_styled("ab abcd ef", 4);
    for line in &lines {
        assert!(line.trim_end().chars().count() <= 4, "{line:?} over limit 4");
    }
    assert_eq!(lines.concat(), "ab abcd ef");
}
