use crate::{ShapeError, Value};
use serde::{Deserialize, Serialize};

/// Row-major, n-dimensional array of [`Value`]s.
///
/// Lookup inputs are almost always 1-D (a key vector) or 2-D (a return table), but the shape is
/// kept general so coerced input with the wrong dimensionality can be rejected with a precise
/// error instead of being silently flattened.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawArray")]
pub struct Array {
    shape: Vec<usize>,
    values: Vec<Value>,
}

#[derive(Deserialize)]
struct RawArray {
    shape: Vec<usize>,
    values: Vec<Value>,
}

impl TryFrom<RawArray> for Array {
    type Error = ShapeError;

    fn try_from(raw: RawArray) -> Result<Self, Self::Error> {
        Array::new(raw.shape, raw.values)
    }
}

impl Array {
    pub fn new(shape: Vec<usize>, values: Vec<Value>) -> Result<Self, ShapeError> {
        let expected = shape.iter().product::<usize>();
        if expected != values.len() {
            return Err(ShapeError::SizeMismatch {
                shape,
                expected,
                actual: values.len(),
            });
        }
        Ok(Self { shape, values })
    }

    /// 0-D array holding a single value.
    pub fn scalar(value: Value) -> Self {
        Self {
            shape: Vec::new(),
            values: vec![value],
        }
    }

    /// 1-D array.
    pub fn vector(values: Vec<Value>) -> Self {
        Self {
            shape: vec![values.len()],
            values,
        }
    }

    /// 2-D array from row-major values.
    pub fn matrix(rows: usize, cols: usize, values: Vec<Value>) -> Result<Self, ShapeError> {
        Self::new(vec![rows, cols], values)
    }

    pub fn from_values<T: Into<Value>>(values: impl IntoIterator<Item = T>) -> Self {
        Self::vector(values.into_iter().map(Into::into).collect())
    }

    /// Builds a 2-D array from rows, rejecting rows of differing length.
    pub fn from_rows<R, T>(rows: impl IntoIterator<Item = R>) -> Result<Self, ShapeError>
    where
        R: IntoIterator<Item = T>,
        T: Into<Value>,
    {
        let mut values = Vec::new();
        let mut row_count = 0usize;
        let mut width: Option<usize> = None;
        for row in rows {
            let before = values.len();
            values.extend(row.into_iter().map(Into::into));
            let len = values.len() - before;
            match width {
                None => width = Some(len),
                Some(expected) if expected != len => {
                    return Err(ShapeError::Ragged {
                        depth: 1,
                        expected: vec![expected],
                        actual: vec![len],
                    });
                }
                Some(_) => {}
            }
            row_count += 1;
        }
        Self::matrix(row_count, width.unwrap_or(0), values)
    }

    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    pub fn ndim(&self) -> usize {
        self.shape.len()
    }

    /// Length of the first axis (`1` for a 0-D array).
    pub fn len(&self) -> usize {
        self.shape.first().copied().unwrap_or(1)
    }

    /// Total number of elements.
    pub fn size(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    pub fn into_values(self) -> Vec<Value> {
        self.values
    }

    /// Returns the elements of a 1-D array.
    pub fn as_vector(&self) -> Option<&[Value]> {
        (self.ndim() == 1).then_some(self.values.as_slice())
    }

    /// Element at a full multi-dimensional index.
    pub fn get(&self, index: &[usize]) -> Option<&Value> {
        if index.len() != self.shape.len() {
            return None;
        }
        let mut offset = 0usize;
        for (&i, &dim) in index.iter().zip(&self.shape) {
            if i >= dim {
                return None;
            }
            offset = offset * dim + i;
        }
        self.values.get(offset)
    }

    /// Row count of a 2-D array.
    pub fn rows(&self) -> Option<usize> {
        match self.shape.as_slice() {
            [rows, _] => Some(*rows),
            _ => None,
        }
    }

    /// Column count of a 2-D array.
    pub fn cols(&self) -> Option<usize> {
        match self.shape.as_slice() {
            [_, cols] => Some(*cols),
            _ => None,
        }
    }

    /// Borrows row `row` of a 2-D array.
    pub fn row(&self, row: usize) -> Option<&[Value]> {
        let [rows, cols] = self.shape.as_slice() else {
            return None;
        };
        if row >= *rows {
            return None;
        }
        let start = row * cols;
        self.values.get(start..start + cols)
    }

    /// Copies column `col` of a 2-D array.
    pub fn column(&self, col: usize) -> Option<Vec<Value>> {
        let [_, cols] = self.shape.as_slice() else {
            return None;
        };
        if col >= *cols {
            return None;
        }
        Some(
            self.values
                .iter()
                .skip(col)
                .step_by(*cols)
                .cloned()
                .collect(),
        )
    }
}

impl<T: Into<Value>> From<Vec<T>> for Array {
    fn from(values: Vec<T>) -> Self {
        Self::from_values(values)
    }
}
