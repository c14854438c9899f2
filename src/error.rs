use std::io;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, SpellError>;

#[derive(Debug, Error)]
pub enum SpellError {
    #[error("only lower-case latin letters can be added to the dictionary: {0:?}")]
    InvalidWord(String),

    #[error("too long word: {word}, max {max} chars allowed")]
    WordTooLong { word: String, max: usize },

    #[error("too large input, max {0} lines allowed")]
    TooManyLines(usize),

    #[error("end of input reached while delimiter {0} not read")]
    MissingDelimiter(&'static str),

    #[error("failed to create the worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error(transparent)]
    Io(#[from] io::Error),
}
