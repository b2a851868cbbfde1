use thiserror::Error;

use crate::utils::UtilsError;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SolverError {
    #[error("Invalid puzzle input: {0}")]
    InvalidInput(#[from] UtilsError),
}
