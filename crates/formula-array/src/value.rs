use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// Spreadsheet error values that can appear as array elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    Null,
    Div0,
    Value,
    Ref,
    Name,
    Num,
    NA,
    Spill,
    Calc,
}

impl ErrorKind {
    pub fn as_code(self) -> &'static str {
        match self {
            ErrorKind::Null => "#NULL!",
            ErrorKind::Div0 => "#DIV/0!",
            ErrorKind::Value => "#VALUE!",
            ErrorKind::Ref => "#REF!",
            ErrorKind::Name => "#NAME?",
            ErrorKind::Num => "#NUM!",
            ErrorKind::NA => "#N/A",
            ErrorKind::Spill => "#SPILL!",
            ErrorKind::Calc => "#CALC!",
        }
    }

    /// Numeric code as reported by `ERROR.TYPE`.
    pub fn code(self) -> u8 {
        match self {
            ErrorKind::Null => 1,
            ErrorKind::Div0 => 2,
            ErrorKind::Value => 3,
            ErrorKind::Ref => 4,
            ErrorKind::Name => 5,
            ErrorKind::Num => 6,
            ErrorKind::NA => 7,
            ErrorKind::Spill => 9,
            ErrorKind::Calc => 14,
        }
    }

    /// Parses an error literal such as `#N/A` (case-insensitive).
    pub fn from_code(code: &str) -> Option<Self> {
        const ALL: [ErrorKind; 9] = [
            ErrorKind::Null,
            ErrorKind::Div0,
            ErrorKind::Value,
            ErrorKind::Ref,
            ErrorKind::Name,
            ErrorKind::Num,
            ErrorKind::NA,
            ErrorKind::Spill,
            ErrorKind::Calc,
        ];
        ALL.into_iter()
            .find(|kind| kind.as_code().eq_ignore_ascii_case(code.trim()))
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_code())
    }
}

/// A single array element.
///
/// The enum uses an explicit `{type, value}` tagged layout so arrays survive a JSON round trip.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Value {
    Number(f64),
    Text(String),
    Bool(bool),
    #[default]
    Blank,
    Error(ErrorKind),
}

impl Value {
    pub fn is_error(&self) -> bool {
        matches!(self, Value::Error(_))
    }

    pub fn is_blank(&self) -> bool {
        matches!(self, Value::Blank)
    }

    /// Returns the text form used by pattern matching, or `None` when the value has no text
    /// representation (blanks and errors).
    ///
    /// Numbers render in their shortest round-trip form, so `209.0` becomes `"209"`.
    pub fn as_text(&self) -> Option<Cow<'_, str>> {
        match self {
            Value::Text(s) => Some(Cow::Borrowed(s.as_str())),
            Value::Number(n) => Some(Cow::Owned(n.to_string())),
            Value::Bool(true) => Some(Cow::Borrowed("TRUE")),
            Value::Bool(false) => Some(Cow::Borrowed("FALSE")),
            Value::Blank | Value::Error(_) => None,
        }
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Number(value as f64)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Number(f64::from(value))
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<ErrorKind> for Value {
    fn from(value: ErrorKind) -> Self {
        Value::Error(value)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{n}"),
            Value::Text(s) => f.write_str(s),
            Value::Bool(true) => f.write_str("TRUE"),
            Value::Bool(false) => f.write_str("FALSE"),
            Value::Blank => f.write_str(""),
            Value::Error(e) => write!(f, "{e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_form_of_integral_numbers_has_no_fraction() {
        assert_eq!(Value::from(209).as_text().as_deref(), Some("209"));
        assert_eq!(Value::from(1.5).as_text().as_deref(), Some("1.5"));
        assert_eq!(Value::from(true).as_text().as_deref(), Some("TRUE"));
        assert_eq!(Value::Blank.as_text(), None);
        assert_eq!(Value::Error(ErrorKind::NA).as_text(), None);
    }

    #[test]
    fn error_codes_parse_case_insensitively() {
        assert_eq!(ErrorKind::from_code("#n/a"), Some(ErrorKind::NA));
        assert_eq!(ErrorKind::from_code(" #VALUE! "), Some(ErrorKind::Value));
        assert_eq!(ErrorKind::from_code("#BOGUS"), None);
    }
}
