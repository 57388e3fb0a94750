use thiserror::Error;

#[derive(Debug, Error)]
pub enum BezelError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Division by zero: {0}")]
    DivisionByZero(String),

    #[error("Degenerate face: {0}")]
    DegenerateFace(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, BezelError>;
