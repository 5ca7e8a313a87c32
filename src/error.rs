use thiserror::Error;

/// All possible errors raised by todo list operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TodoError {
    #[error("invalid index: {index}")]
    IndexOutOfRange { index: usize, size: usize },
}

/// Result type alias
pub type Result<T> = std::result::Result<T, TodoError>;
