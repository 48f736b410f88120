#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShapeError {
    #[error("shape {shape:?} holds {expected} values, got {actual}")]
    SizeMismatch {
        shape: Vec<usize>,
        expected: usize,
        actual: usize,
    },

    #[error("ragged input at depth {depth}: expected shape {expected:?}, got {actual:?}")]
    Ragged {
        depth: usize,
        expected: Vec<usize>,
        actual: Vec<usize>,
    },

    #[error("unsupported array element: {0}")]
    UnsupportedValue(String),
}
