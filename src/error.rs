use thiserror::Error;

pub type Result<T> = std::result::Result<T, ListError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ListError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("index {index} is out of range for list of size {size}")]
    IndexOutOfRange { index: isize, size: usize },
    #[error("list is empty")]
    NoElement,
    #[error("element is not in the list")]
    NotFound,
}
