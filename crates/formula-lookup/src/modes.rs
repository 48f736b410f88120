use crate::{LookupError, LookupResult};
use serde::{Deserialize, Serialize};

/// Which stored value counts as a match for the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    #[default]
    Exact,
    /// Exact match, else the next larger item.
    NextLarger,
    /// Exact match, else the next smaller item.
    NextSmaller,
    /// `*` / `?` wildcard pattern.
    Wildcard,
    /// Regular expression.
    Regex,
}

impl MatchMode {
    pub fn code(self) -> i64 {
        match self {
            MatchMode::Exact => 0,
            MatchMode::NextLarger => 1,
            MatchMode::NextSmaller => -1,
            MatchMode::Wildcard => 2,
            MatchMode::Regex => 3,
        }
    }

    pub fn is_pattern(self) -> bool {
        matches!(self, MatchMode::Wildcard | MatchMode::Regex)
    }
}

impl TryFrom<i64> for MatchMode {
    type Error = LookupError;

    fn try_from(code: i64) -> LookupResult<Self> {
        match code {
            0 => Ok(MatchMode::Exact),
            1 => Ok(MatchMode::NextLarger),
            -1 => Ok(MatchMode::NextSmaller),
            2 => Ok(MatchMode::Wildcard),
            3 => Ok(MatchMode::Regex),
            other => Err(LookupError::InvalidMatchMode(other)),
        }
    }
}

/// Scan order, and whether the keys may be assumed sorted ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchMode {
    #[default]
    FromFirst,
    FromLast,
    BinaryFromFirst,
    BinaryFromLast,
}

impl SearchMode {
    pub fn code(self) -> i64 {
        match self {
            SearchMode::FromFirst => 1,
            SearchMode::FromLast => -1,
            SearchMode::BinaryFromFirst => 2,
            SearchMode::BinaryFromLast => -2,
        }
    }

    pub fn is_binary(self) -> bool {
        matches!(self, SearchMode::BinaryFromFirst | SearchMode::BinaryFromLast)
    }

    /// Searches that resolve ties toward the lowest index.
    pub fn prefers_first(self) -> bool {
        matches!(self, SearchMode::FromFirst | SearchMode::BinaryFromFirst)
    }
}

impl TryFrom<i64> for SearchMode {
    type Error = LookupError;

    fn try_from(code: i64) -> LookupResult<Self> {
        match code {
            1 => Ok(SearchMode::FromFirst),
            -1 => Ok(SearchMode::FromLast),
            2 => Ok(SearchMode::BinaryFromFirst),
            -2 => Ok(SearchMode::BinaryFromLast),
            other => Err(LookupError::InvalidSearchMode(other)),
        }
    }
}
