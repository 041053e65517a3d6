#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("No token at {line}:{column}")]
    PositionNotFound { line: usize, column: usize },

    #[error("Input of {size} bytes exceeds the limit of {limit} bytes")]
    InputTooLarge { size: usize, limit: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T = ()> = std::result::Result<T, Error>;
