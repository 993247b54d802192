use std::time::Instant;

use crate::session::typing_test::TypingTest;

/// What a single keystroke did to the run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeystrokeEvent {
    pub position: usize,
    pub expected: char,
    pub actual: char,
    pub correct: bool,
}

pub fn process_char(test: &mut TypingTest, ch: char) -> Option<KeystrokeEvent> {
    let position = test.cursor();
    let expected = test.expected()?;

    if test.started_at.is_none() {
        test.started_at = Some(Instant::now());
    }

    let correct = ch == expected;
    if !correct {
        test.mistakes.record_mistake(position);
    }
    test.input.push(ch);
    test.raw_input_count += 1;

    if test.is_complete() {
        test.finish();
    }

    Some(KeystrokeEvent {
        position,
        expected,
        actual: ch,
        correct,
    })
}

pub fn process_backspace(test: &mut TypingTest) {
    if test.finished_at.is_none() {
        test.input.pop();
    }
}
