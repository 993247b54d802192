use std::time::Duration;

use crate::generator::corpus::CorpusKey;
use crate::session::clock::{RunClock, format_secs};

/// Selectable timer-run lengths, in seconds, in menu order.
pub const TIME_OPTIONS: [u64; 4] = [120, 60, 30, 15];

/// Selectable word-count-run lengths, in menu order.
pub const WORD_COUNT_OPTIONS: [usize; 4] = [100, 50, 25, 10];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunMode {
    /// Type as much as possible before the countdown ends.
    Timed(Duration),
    /// Type a fixed number of words against a stopwatch.
    WordCount(usize),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunSettings {
    pub mode: RunMode,
    pub corpus: CorpusKey,
}

impl RunSettings {
    /// How many words to generate; timer runs get a large pool.
    pub fn words_to_generate(&self, timer_word_pool: usize) -> usize {
        match self.mode {
            RunMode::Timed(_) => timer_word_pool,
            RunMode::WordCount(count) => count,
        }
    }

    pub fn clock(&self) -> RunClock {
        match self.mode {
            RunMode::Timed(duration) => RunClock::countdown(duration),
            RunMode::WordCount(_) => RunClock::stopwatch(),
        }
    }

    pub fn word_count(&self) -> Option<usize> {
        match self.mode {
            RunMode::Timed(_) => None,
            RunMode::WordCount(count) => Some(count),
        }
    }

    pub fn mode_label(&self) -> String {
        match self.mode {
            RunMode::Timed(duration) => format_secs(duration.as_secs()),
            RunMode::WordCount(count) => count.to_string(),
        }
    }
}

/// Index of the option closest to `value`.
pub fn nearest_option(options: impl IntoIterator<Item = u64>, value: u64) -> usize {
    options
        .into_iter()
        .enumerate()
        .min_by_key(|&(_, option)| option.abs_diff(value))
        .map(|(index, _)| index)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_words_to_generate() {
        let timed = RunSettings {
            mode: RunMode::Timed(Duration::from_secs(30)),
            corpus: CorpusKey::CommonWords,
        };
        let counted = RunSettings {
            mode: RunMode::WordCount(25),
            corpus: CorpusKey::CommonWords,
        };
        assert_eq!(timed.words_to_generate(300), 300);
        assert_eq!(counted.words_to_generate(300), 25);
        assert_eq!(timed.word_count(), None);
        assert_eq!(counted.word_count(), Some(25));
        assert_eq!(timed.mode_label(), "30s");
        assert_eq!(counted.mode_label(), "25");
    }

    #[test]
    fn test_nearest_option() {
        assert_eq!(nearest_option(TIME_OPTIONS, 30), 2);
        assert_eq!(nearest_option(TIME_OPTIONS, 45), 1);
        assert_eq!(nearest_option(TIME_OPTIONS, 40), 2);
        assert_eq!(nearest_option(TIME_OPTIONS, 1000), 0);
        assert_eq!(nearest_option(WORD_COUNT_OPTIONS.map(|c| c as u64), 12), 3);
    }
}
