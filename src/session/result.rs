use std::time::Duration;

use crate::generator::corpus::CorpusKey;
use crate::session::typing_test::TypingTest;

/// Scores for a finished run.
#[derive(Clone, Debug, PartialEq)]
pub struct TestResult {
    pub wpm: u32,
    pub raw_wpm: u32,
    pub cpm: u32,
    pub accuracy: f64,
    pub elapsed: Duration,
    pub corpus: CorpusKey,
    /// Set for word-count runs only.
    pub word_count: Option<usize>,
}

impl TestResult {
    pub fn from_test(
        test: &TypingTest,
        elapsed: Duration,
        corpus: CorpusKey,
        word_count: Option<usize>,
    ) -> Self {
        let minutes = elapsed.as_secs_f64() / 60.0;
        let correct = test.correct_count() as f64;
        let raw = test.raw_input_count as f64;

        let (wpm, raw_wpm, cpm) = if minutes > 0.0 {
            (
                (correct / 5.0 / minutes).ceil() as u32,
                (raw / 5.0 / minutes).round() as u32,
                (correct / minutes).round() as u32,
            )
        } else {
            (0, 0, 0)
        };

        let accuracy = if test.raw_input_count == 0 {
            100.0
        } else {
            let clean = test.raw_input_count.saturating_sub(test.mistakes.raw_count());
            (clean as f64 / raw * 100.0).clamp(0.0, 100.0)
        };

        Self {
            wpm,
            raw_wpm,
            cpm,
            accuracy,
            elapsed,
            corpus,
            word_count,
        }
    }
}
