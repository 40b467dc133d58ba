use thiserror::Error;

/// Main error type for algodemo
#[derive(Error, Debug)]
pub enum AlgoError {
    /// File system I/O errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Command or argument parse errors
    #[error("Parse error: {0}")]
    Parse(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Convenient Result type using AlgoError
pub type Result<T> = std::result::Result<T, AlgoError>;
