use formula_array::ErrorKind;

pub type LookupResult<T> = Result<T, LookupError>;

/// Precondition failures raised by [`crate::xmatch`] and [`crate::xlookup`].
///
/// Every variant describes invalid input and is raised before any matching work happens. A target
/// that simply isn't present is not an error; it surfaces as `None`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    #[error("{argument} must not be empty")]
    Empty { argument: &'static str },

    #[error("{argument} must be 1D, got {ndim} dimensions")]
    NotOneDimensional { argument: &'static str, ndim: usize },

    #[error("Invalid match_mode: {0}")]
    InvalidMatchMode(i64),

    #[error("Invalid search_mode: {0}")]
    InvalidSearchMode(i64),

    #[error("BINARY search modes are not supported for WILDCARD or REGEX match modes")]
    BinaryPatternSearch,

    #[error("invalid regex pattern {pattern:?}: {message}")]
    InvalidPattern { pattern: String, message: String },

    #[error("return data length mismatch: expected {expected}, got {actual}")]
    ReturnLengthMismatch { expected: usize, actual: usize },

    #[error("one dimension of return data must match key length {expected}, got shape {shape:?}")]
    ReturnShapeMismatch { expected: usize, shape: Vec<usize> },

    #[error("return data must be 1D or 2D, got {ndim} dimensions")]
    UnsupportedReturnDimensions { ndim: usize },
}

impl LookupError {
    /// Spreadsheet error a grid surfaces for this failure.
    pub fn error_kind(&self) -> ErrorKind {
        ErrorKind::Value
    }
}
