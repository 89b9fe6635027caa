use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Input-constraint violations. Degenerate inputs (empty strings, empty
/// token sets, zero vectors) are not errors and never reach this type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid vector dimension: expected {expected}, got {actual}")]
    InvalidDimension { expected: usize, actual: usize },

    #[error("Invalid n-gram size: {0} (must be at least 1)")]
    InvalidNgramSize(usize),
}
