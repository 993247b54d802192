use rand::Rng;
use rand::rngs::SmallRng;

use crate::error::CorpusError;
use crate::generator::TextGenerator;
use crate::generator::corpus::WordList;

/// Words generated for a timer run, enough that nobody reaches the end.
pub const DEFAULT_WORD_POOL: usize = 300;

/// Samples words uniformly, with replacement, from one corpus.
pub struct WordPoolGenerator<'a> {
    list: &'a WordList,
    rng: SmallRng,
}

impl<'a> WordPoolGenerator<'a> {
    pub fn new(list: &'a WordList, rng: SmallRng) -> Self {
        Self { list, rng }
    }
}

impl TextGenerator for WordPoolGenerator<'_> {
    fn generate(&mut self, word_count: usize) -> Result<String, CorpusError> {
        if word_count == 0 {
            return Err(CorpusError::NoWords);
        }

        let words = self.list.words();
        let picked: Vec<&str> = (0..word_count)
            .map(|_| words[self.rng.gen_range(0..words.len())].as_str())
            .collect();

        Ok(picked.join(" "))
    }
}
