pub mod corpus;
pub mod word_pool;

use crate::error::CorpusError;

pub trait TextGenerator {
    fn generate(&mut self, word_count: usize) -> Result<String, CorpusError>;
}
