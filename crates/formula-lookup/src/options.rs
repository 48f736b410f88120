use crate::{LookupResult, MatchMode, SearchMode};
use serde::{Deserialize, Serialize};

/// What NEXT_LARGER / NEXT_SMALLER return when the target lies beyond every key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutOfRange {
    /// Return the nearest end of the array, even though its value is on the wrong side of the
    /// target (e.g. the largest key for NEXT_LARGER when the target exceeds every key).
    #[default]
    Clamp,
    /// Report no match.
    NotFound,
}

/// Settings for a single match or lookup call.
///
/// Deserializes from partial input; missing fields take their defaults:
///
/// ```
/// use formula_lookup::{MatchMode, MatchOptions, SearchMode};
///
/// let options: MatchOptions =
///     serde_json::from_str(r#"{"match_mode": "next_larger"}"#).unwrap();
/// assert_eq!(options.match_mode, MatchMode::NextLarger);
/// assert_eq!(options.search_mode, SearchMode::FromFirst);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchOptions {
    pub match_mode: MatchMode,
    pub search_mode: SearchMode,
    pub out_of_range: OutOfRange,
    /// Whether text keys compare case-sensitively in EXACT / NEXT_* modes. Pattern modes are
    /// always case-insensitive.
    pub case_sensitive: bool,
    /// Treat `~*`, `~?` and `~~` in WILDCARD patterns as literal characters. Off by default, so a
    /// tilde is an ordinary literal.
    pub tilde_escapes: bool,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            match_mode: MatchMode::Exact,
            search_mode: SearchMode::FromFirst,
            out_of_range: OutOfRange::Clamp,
            case_sensitive: true,
            tilde_escapes: false,
        }
    }
}

impl MatchOptions {
    #[must_use]
    pub fn new(match_mode: MatchMode, search_mode: SearchMode) -> Self {
        Self {
            match_mode,
            search_mode,
            ..Self::default()
        }
    }

    /// Decodes the numeric mode codes used by spreadsheet formulas
    /// (`0`/`1`/`-1`/`2`/`3` and `1`/`-1`/`2`/`-2`).
    pub fn from_codes(match_code: i64, search_code: i64) -> LookupResult<Self> {
        let search_mode = SearchMode::try_from(search_code)?;
        let match_mode = MatchMode::try_from(match_code)?;
        Ok(Self::new(match_mode, search_mode))
    }

    #[must_use]
    pub fn with_out_of_range(mut self, out_of_range: OutOfRange) -> Self {
        self.out_of_range = out_of_range;
        self
    }

    #[must_use]
    pub fn with_case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    #[must_use]
    pub fn with_tilde_escapes(mut self, tilde_escapes: bool) -> Self {
        self.tilde_escapes = tilde_escapes;
        self
    }
}
