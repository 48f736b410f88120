//! XLOOKUP: match each target against the keys and project the matching slice of the return data.

use crate::xmatch::{find_position, lookup_vector, validate_modes};
use crate::{LookupError, LookupResult, MatchMode, MatchOptions, SearchMode};
use formula_array::{Array, Value};
use serde::{Deserialize, Serialize};

/// One lookup value or a batch of them.
#[derive(Debug, Clone, PartialEq)]
pub enum Targets {
    Single(Value),
    Many(Vec<Value>),
}

impl From<Value> for Targets {
    fn from(value: Value) -> Self {
        Targets::Single(value)
    }
}

impl From<Vec<Value>> for Targets {
    fn from(values: Vec<Value>) -> Self {
        Targets::Many(values)
    }
}

/// The projected result for one target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "values", rename_all = "snake_case")]
pub enum LookupEntry {
    /// Element picked from 1-D return data, or the caller's default.
    Value(Value),
    /// Row of 2-D return data whose rows are keyed.
    Row(Vec<Value>),
    /// Column of 2-D return data whose columns are keyed.
    Column(Vec<Value>),
}

impl LookupEntry {
    pub fn into_values(self) -> Vec<Value> {
        match self {
            LookupEntry::Value(v) => vec![v],
            LookupEntry::Row(values) | LookupEntry::Column(values) => values,
        }
    }
}

/// XLOOKUP output, shaped like the [`Targets`] it was computed from.
///
/// `None` entries mean "no match and no default".
#[derive(Debug, Clone, PartialEq)]
pub enum LookupOutput {
    Single(Option<LookupEntry>),
    Many(Vec<Option<LookupEntry>>),
}

impl LookupOutput {
    pub fn into_vec(self) -> Vec<Option<LookupEntry>> {
        match self {
            LookupOutput::Single(entry) => vec![entry],
            LookupOutput::Many(entries) => entries,
        }
    }
}

/// Which axis of the return data is indexed by the matched key position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum KeyedAxis {
    Vector,
    Rows,
    Columns,
}

fn keyed_axis(return_data: &Array, key_len: usize) -> LookupResult<KeyedAxis> {
    match *return_data.shape() {
        [len] if len == key_len => Ok(KeyedAxis::Vector),
        [len] => Err(LookupError::ReturnLengthMismatch {
            expected: key_len,
            actual: len,
        }),
        // When both axes match, rows win.
        [rows, _] if rows == key_len => Ok(KeyedAxis::Rows),
        [_, cols] if cols == key_len => Ok(KeyedAxis::Columns),
        [_, _] => Err(LookupError::ReturnShapeMismatch {
            expected: key_len,
            shape: return_data.shape().to_vec(),
        }),
        _ => Err(LookupError::UnsupportedReturnDimensions {
            ndim: return_data.ndim(),
        }),
    }
}

fn project(return_data: &Array, axis: KeyedAxis, pos: usize) -> LookupResult<LookupEntry> {
    let entry = match axis {
        KeyedAxis::Vector => return_data.values().get(pos).cloned().map(LookupEntry::Value),
        KeyedAxis::Rows => return_data.row(pos).map(|row| LookupEntry::Row(row.to_vec())),
        KeyedAxis::Columns => return_data.column(pos).map(LookupEntry::Column),
    };
    entry.ok_or_else(|| LookupError::ReturnShapeMismatch {
        expected: pos + 1,
        shape: return_data.shape().to_vec(),
    })
}

/// XLOOKUP(lookup_value, lookup_array, return_array, [if_not_found], [match_mode], [search_mode])
pub fn xlookup(
    targets: impl Into<Targets>,
    keys: &Array,
    return_data: &Array,
    default: Option<Value>,
    match_mode: MatchMode,
    search_mode: SearchMode,
) -> LookupResult<LookupOutput> {
    xlookup_with_options(
        targets,
        keys,
        return_data,
        default,
        &MatchOptions::new(match_mode, search_mode),
    )
}

/// Like [`xlookup`], configured through [`MatchOptions`].
///
/// Input validation happens once, before any target is matched, and any error aborts the whole
/// batch.
pub fn xlookup_with_options(
    targets: impl Into<Targets>,
    keys: &Array,
    return_data: &Array,
    default: Option<Value>,
    options: &MatchOptions,
) -> LookupResult<LookupOutput> {
    let keys = lookup_vector(keys)?;
    if return_data.is_empty() {
        return Err(LookupError::Empty {
            argument: "return_array",
        });
    }
    let axis = keyed_axis(return_data, keys.len())?;
    validate_modes(options)?;

    let (targets, single) = match targets.into() {
        Targets::Single(value) => (vec![value], true),
        Targets::Many(values) => (values, false),
    };
    log::debug!(
        "xlookup of {} target(s) over {} keys, return data keyed by {:?}",
        targets.len(),
        keys.len(),
        axis
    );

    let mut entries = Vec::with_capacity(targets.len());
    for target in &targets {
        let entry = match find_position(target, keys, options)? {
            Some(pos) => Some(project(return_data, axis, pos)?),
            None => default.clone().map(LookupEntry::Value),
        };
        entries.push(entry);
    }

    if single {
        Ok(LookupOutput::Single(entries.pop().flatten()))
    } else {
        Ok(LookupOutput::Many(entries))
    }
}
