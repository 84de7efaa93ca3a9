use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("vector dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("target index {index} out of bounds for vocabulary of {len} words")]
    InvalidIndex { index: usize, len: usize },

    #[error("vocabulary is empty")]
    EmptyVocabulary,

    #[error("invalid domain: {0}")]
    InvalidDomain(String),

    #[error("duplicate word in vocabulary: {0}")]
    DuplicateWord(String),

    #[error("word/vector count mismatch: {words} words, {vectors} vectors")]
    CountMismatch { words: usize, vectors: usize },

    #[error("unknown word: {0}")]
    UnknownWord(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
