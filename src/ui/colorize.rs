use crate::session::mistakes::MistakeLedger;
use crate::ui::theme::{Palette, Style};

/// Paints the whole target text according to how far the user has typed.
///
/// Typed characters are painted one by one (correct ones as typed, mistakes
/// as the character that was expected), then the character under the cursor,
/// then everything after it as a single pending run. Ledger entries at or past
/// the cursor are skipped: they were typed wrong once and backspaced over, and
/// show as mistakes again only after being retyped.
pub fn colorize(
    target: &[char],
    input: &[char],
    mistakes: &MistakeLedger,
    palette: &Palette,
) -> String {
    let typed = input.len().min(target.len());
    let mut out = String::with_capacity(target.len() * 16);
    let mut buf = [0u8; 4];

    let mut next = 0;
    for pos in mistakes.positions().into_iter().filter(|&pos| pos < typed) {
        paint_each(&mut out, palette, Style::Correct, &input[next..pos]);
        palette.paint_into(&mut out, Style::Mistake, target[pos].encode_utf8(&mut buf));
        next = pos + 1;
    }
    paint_each(&mut out, palette, Style::Correct, &input[next..typed]);

    // Nothing left to point at once the whole text is typed.
    let Some(&cursor_char) = target.get(typed) else {
        return out;
    };
    palette.paint_into(&mut out, Style::Cursor, cursor_char.encode_utf8(&mut buf));

    let pending: String = target[typed + 1..].iter().collect();
    if !pending.is_empty() {
        palette.paint_into(&mut out, Style::Pending, &pending);
    }

    out
}

fn paint_each(out: &mut String, palette: &Palette, style: Style, chars: &[char]) {
    let mut buf = [0u8; 4];
    for ch in chars {
        palette.paint_into(out, style, ch.encode_utf8(&mut buf));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::ansi;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_untouched_text() {
        let palette = Palette::default();
        let out = colorize(&chars("abc"), &[], &MistakeLedger::new(), &palette);
        let expected = palette.paint(Style::Cursor, "a") + &palette.paint(Style::Pending, "bc");
        assert_eq!(out, expected);
    }

    #[test]
    fn test_mistake_shows_expected_char() {
        let palette = Palette::default();
        let mut ledger = MistakeLedger::new();
        ledger.record_mistake(1);
        let out = colorize(&chars("abcd"), &chars("axc"), &ledger, &palette);

        let expected = palette.paint(Style::Correct, "a")
            + &palette.paint(Style::Mistake, "b")
            + &palette.paint(Style::Correct, "c")
            + &palette.paint(Style::Cursor, "d");
        assert_eq!(out, expected);
        assert!(!ansi::strip(&out).contains('x'));
    }

    #[test]
    fn test_adjacent_mistakes() {
        let palette = Palette::default();
        let mut ledger = MistakeLedger::new();
        ledger.record_mistake(0);
        ledger.record_mistake(1);
        let out = colorize(&chars("abc"), &chars("zz"), &ledger, &palette);
        let expected = palette.paint(Style::Mistake, "a")
            + &palette.paint(Style::Mistake, "b")
            + &palette.paint(Style::Cursor, "c");
        assert_eq!(out, expected);
    }

    #[test]
    fn test_completed_text_has_no_cursor() {
        let palette = Palette::default();
        let out = colorize(&chars("ab"), &chars("ab"), &MistakeLedger::new(), &palette);
        let expected = palette.paint(Style::Correct, "a") + &palette.paint(Style::Correct, "b");
        assert_eq!(out, expected);
    }

    #[test]
    fn test_backspaced_mistake_is_not_drawn() {
        let palette = Palette::default();
        let mut ledger = MistakeLedger::new();
        ledger.record_mistake(2);
        let out = colorize(&chars("abcd"), &chars("ab"), &ledger, &palette);
        let expected = palette.paint(Style::Correct, "a")
            + &palette.paint(Style::Correct, "b")
            + &palette.paint(Style::Cursor, "c")
            + &palette.paint(Style::Pending, "d");
        assert_eq!(out, expected);
    }

    #[test]
    fn test_visible_text_is_the_target() {
        let palette = Palette::default();
        let mut ledger = MistakeLedger::new();
        ledger.record_mistake(3);
        let target = chars("crème brûlée");
        let out = colorize(&target, &chars("crèXe b"), &ledger, &palette);
        assert_eq!(ansi::strip(&out), "crème brûlée");
    }
}
