use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid keymap entry on line {line}: {reason}")]
    InvalidKeymap { line: usize, reason: String },

    #[error("Keymap contains no entries")]
    EmptyKeymap,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CoreError>;
