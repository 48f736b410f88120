//! XMATCH / XLOOKUP over in-memory arrays.
//!
//! [`xmatch`] finds the zero-based position of a target in a 1-D key array under one of five match
//! modes (exact, next larger, next smaller, wildcard, regex) and four search modes (first-to-last,
//! last-to-first, and their binary-search counterparts over ascending keys). [`xlookup`] wraps it
//! for batches of targets and projects the matching element, row or column out of a parallel
//! return array.
//!
//! ```
//! use formula_array::{Array, Value};
//! use formula_lookup::{xlookup, xmatch, LookupEntry, LookupOutput, MatchMode, SearchMode};
//!
//! let keys = Array::from_values([133, 306, 11, 27, 1]);
//! let pos = xmatch(&Value::from(10), &keys, MatchMode::NextLarger, SearchMode::FromFirst);
//! assert_eq!(pos, Ok(Some(2)));
//!
//! let names = Array::from_values(["a", "b", "c", "d", "e"]);
//! let out = xlookup(Value::from(27), &keys, &names, None, MatchMode::Exact, SearchMode::FromFirst);
//! assert_eq!(out, Ok(LookupOutput::Single(Some(LookupEntry::Value(Value::from("d"))))));
//! ```

mod compare;
pub mod date;
mod error;
mod modes;
mod options;
pub mod sequence;
pub mod wildcard;
mod xlookup;
mod xmatch;

pub use crate::error::{LookupError, LookupResult};
pub use crate::modes::{MatchMode, SearchMode};
pub use crate::options::{MatchOptions, OutOfRange};
pub use crate::xlookup::{xlookup, xlookup_with_options, LookupEntry, LookupOutput, Targets};
pub use crate::xmatch::{xmatch, xmatch_with_options};

pub use formula_array::{Array, ErrorKind, Value};
