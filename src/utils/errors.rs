use thiserror::Error;

/// Errors that can occur while parsing or validating puzzle input
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UtilsError {
    #[error("Number list cannot be empty")]
    EmptyNumberList,
    #[error("Invalid number list entry: '{0}'")]
    InvalidNumberEntry(String),
    #[error("Numbers must be positive, got {0}")]
    NonPositiveNumber(i64),
}
