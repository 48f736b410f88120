//! Coercion of list-like input into [`Array`].
//!
//! JSON scalars become 0-D arrays, JSON arrays become 1-D arrays, and arrays whose elements are
//! themselves equally-shaped arrays gain one dimension per nesting level. Nesting must be
//! rectangular; ragged input is rejected rather than padded.

use crate::{Array, ErrorKind, ShapeError, Value};
use serde_json::Value as JsonValue;

impl Array {
    pub fn from_json(json: &JsonValue) -> Result<Self, ShapeError> {
        let mut values = Vec::new();
        let shape = collect_json(json, 0, &mut values)?;
        Array::new(shape, values)
    }
}

impl Value {
    /// Converts a JSON scalar into a [`Value`].
    ///
    /// `null` maps to [`Value::Blank`] and `{"error": "#N/A"}` to an error value. Plain strings that
    /// spell an error literal stay text.
    pub fn from_json_scalar(json: &JsonValue) -> Result<Self, ShapeError> {
        match json {
            JsonValue::Null => Ok(Value::Blank),
            JsonValue::Bool(b) => Ok(Value::Bool(*b)),
            JsonValue::Number(n) => n
                .as_f64()
                .map(Value::Number)
                .ok_or_else(|| ShapeError::UnsupportedValue(n.to_string())),
            JsonValue::String(s) => Ok(Value::Text(s.clone())),
            JsonValue::Object(map) => match map.get("error").and_then(JsonValue::as_str) {
                Some(code) if map.len() == 1 => ErrorKind::from_code(code)
                    .map(Value::Error)
                    .ok_or_else(|| ShapeError::UnsupportedValue(json.to_string())),
                _ => Err(ShapeError::UnsupportedValue(json.to_string())),
            },
            JsonValue::Array(_) => Err(ShapeError::UnsupportedValue(json.to_string())),
        }
    }
}

fn collect_json(
    json: &JsonValue,
    depth: usize,
    out: &mut Vec<Value>,
) -> Result<Vec<usize>, ShapeError> {
    let JsonValue::Array(items) = json else {
        out.push(Value::from_json_scalar(json)?);
        return Ok(Vec::new());
    };

    let mut inner: Option<Vec<usize>> = None;
    for item in items {
        let shape = collect_json(item, depth + 1, out)?;
        match &inner {
            None => inner = Some(shape),
            Some(expected) if *expected != shape => {
                return Err(ShapeError::Ragged {
                    depth: depth + 1,
                    expected: expected.clone(),
                    actual: shape,
                });
            }
            Some(_) => {}
        }
    }

    let mut shape = vec![items.len()];
    shape.extend(inner.unwrap_or_default());
    Ok(shape)
}
