use thiserror::Error;

/// Failures that leave a session without a target text.
#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("unknown corpus `{0}`")]
    Unknown(String),
    #[error("corpus `{0}` is missing from the bundled assets")]
    Missing(&'static str),
    #[error("corpus `{0}` is not valid UTF-8")]
    Encoding(&'static str),
    #[error("corpus `{0}` contains no words")]
    Empty(&'static str),
    #[error("a word pool needs at least one word")]
    NoWords,
}
