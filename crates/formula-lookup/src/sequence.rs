//! SEQUENCE: regularly spaced numeric grids, typically used to build key vectors.

use formula_array::{Array, ShapeError, Value};

/// Upper bound on generated cells.
pub const MAX_SEQUENCE_CELLS: usize = 10_000_000;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SequenceError {
    #[error("all arguments must be numeric")]
    NonFinite,

    #[error("rows and columns must be at least 1")]
    EmptyShape,

    #[error("requested array is too large: {rows}x{columns} exceeds 10000000 cells")]
    TooLarge { rows: usize, columns: usize },

    #[error(transparent)]
    Shape(#[from] ShapeError),
}

/// SEQUENCE(rows, [columns], [start], [step])
///
/// Returns a `rows × columns` array filled row-major with `start + step * i`. Fractional row and
/// column counts are floored after the `>= 1` check.
///
/// ```
/// use formula_array::Value;
///
/// let grid = formula_lookup::sequence::sequence(2.0, 3.0, 10.0, 5.0).unwrap();
/// assert_eq!(grid.shape(), &[2usize, 3]);
/// assert_eq!(grid.row(1).unwrap()[0], Value::Number(25.0));
/// ```
pub fn sequence(rows: f64, columns: f64, start: f64, step: f64) -> Result<Array, SequenceError> {
    if ![rows, columns, start, step].iter().all(|v| v.is_finite()) {
        return Err(SequenceError::NonFinite);
    }
    if rows < 1.0 || columns < 1.0 {
        return Err(SequenceError::EmptyShape);
    }

    let too_large = || SequenceError::TooLarge {
        rows: rows.floor() as usize,
        columns: columns.floor() as usize,
    };
    if rows.floor() > MAX_SEQUENCE_CELLS as f64 || columns.floor() > MAX_SEQUENCE_CELLS as f64 {
        return Err(too_large());
    }
    let rows_usize = rows.floor() as usize;
    let cols_usize = columns.floor() as usize;
    let total = rows_usize
        .checked_mul(cols_usize)
        .filter(|&total| total <= MAX_SEQUENCE_CELLS)
        .ok_or_else(too_large)?;

    let values = (0..total)
        .map(|idx| Value::Number(start + step * (idx as f64)))
        .collect();
    Ok(Array::matrix(rows_usize, cols_usize, values)?)
}

/// One-column SEQUENCE with the default start and step of 1.
pub fn sequence_column(rows: f64) -> Result<Array, SequenceError> {
    sequence(rows, 1.0, 1.0, 1.0)
}
