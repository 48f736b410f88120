use formula_array::Value;
use ordered_float::OrderedFloat;
use std::cmp::Ordering;

/// Total order over lookup values.
///
/// Values of different types order by type rank (numbers, text, booleans, blanks, errors), so
/// mixed arrays still sort deterministically.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ValueOrder {
    case_sensitive: bool,
}

impl ValueOrder {
    pub(crate) fn new(case_sensitive: bool) -> Self {
        Self { case_sensitive }
    }

    pub(crate) fn cmp(&self, a: &Value, b: &Value) -> Ordering {
        match (a, b) {
            (Value::Number(x), Value::Number(y)) => OrderedFloat(*x).cmp(&OrderedFloat(*y)),
            (Value::Text(x), Value::Text(y)) => {
                if self.case_sensitive {
                    x.cmp(y)
                } else {
                    cmp_case_insensitive(x, y)
                }
            }
            (Value::Bool(x), Value::Bool(y)) => x.cmp(y),
            (Value::Blank, Value::Blank) => Ordering::Equal,
            (Value::Error(x), Value::Error(y)) => x.code().cmp(&y.code()),
            _ => type_rank(a).cmp(&type_rank(b)),
        }
    }

    pub(crate) fn eq(&self, a: &Value, b: &Value) -> bool {
        self.cmp(a, b) == Ordering::Equal
    }
}

fn type_rank(v: &Value) -> u8 {
    match v {
        Value::Number(_) => 0,
        Value::Text(_) => 1,
        Value::Bool(_) => 2,
        Value::Blank => 3,
        Value::Error(_) => 4,
    }
}

fn cmp_case_insensitive(a: &str, b: &str) -> Ordering {
    if a.is_ascii() && b.is_ascii() {
        return a
            .bytes()
            .map(|c| c.to_ascii_uppercase())
            .cmp(b.bytes().map(|c| c.to_ascii_uppercase()));
    }
    a.chars()
        .flat_map(char::to_uppercase)
        .cmp(b.chars().flat_map(char::to_uppercase))
}
