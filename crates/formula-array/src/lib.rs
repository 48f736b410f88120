//! `formula-array` defines the scalar and array values consumed by the lookup functions.
//!
//! The crate is intentionally small so it can be shared by:
//! - the match engine and projection layer in `formula-lookup`
//! - callers that coerce arbitrary list-like input (JSON, nested rows) into the uniform,
//!   row-major [`Array`] representation the engine validates

mod array;
mod coerce;
mod error;
mod value;

pub use array::Array;
pub use error::ShapeError;
pub use value::{ErrorKind, Value};
