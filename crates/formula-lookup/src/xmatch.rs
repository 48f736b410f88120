//! The match engine behind XMATCH and XLOOKUP.
//!
//! Every call resolves to a zero-based position into the key vector or `None`. Exact and pattern
//! modes scan (or binary-probe) the keys in place. NEXT_LARGER / NEXT_SMALLER search a sorted
//! view: for linear search modes that view is a stable sort permutation of the keys, so any
//! position found in sorted order is mapped back to the caller's index space through the same
//! permutation; binary search modes trust the caller's ascending order and use the identity.

use crate::compare::ValueOrder;
use crate::{wildcard, LookupError, LookupResult, MatchMode, MatchOptions, OutOfRange, SearchMode};
use formula_array::{Array, Value};
use regex::{Regex, RegexBuilder};
use std::cmp::Ordering;

/// XMATCH(lookup_value, lookup_array, [match_mode], [search_mode])
///
/// Returns the zero-based position of the match, or `None` when nothing qualifies.
pub fn xmatch(
    target: &Value,
    keys: &Array,
    match_mode: MatchMode,
    search_mode: SearchMode,
) -> LookupResult<Option<usize>> {
    xmatch_with_options(target, keys, &MatchOptions::new(match_mode, search_mode))
}

pub fn xmatch_with_options(
    target: &Value,
    keys: &Array,
    options: &MatchOptions,
) -> LookupResult<Option<usize>> {
    let keys = lookup_vector(keys)?;
    find_position(target, keys, options)
}

/// Validates the key array and returns its elements.
pub(crate) fn lookup_vector(keys: &Array) -> LookupResult<&[Value]> {
    if keys.is_empty() {
        return Err(LookupError::Empty {
            argument: "lookup_array",
        });
    }
    keys.as_vector().ok_or(LookupError::NotOneDimensional {
        argument: "lookup_array",
        ndim: keys.ndim(),
    })
}

pub(crate) fn validate_modes(options: &MatchOptions) -> LookupResult<()> {
    if options.match_mode.is_pattern() && options.search_mode.is_binary() {
        return Err(LookupError::BinaryPatternSearch);
    }
    Ok(())
}

/// Runs one match over already-validated keys.
pub(crate) fn find_position(
    target: &Value,
    keys: &[Value],
    options: &MatchOptions,
) -> LookupResult<Option<usize>> {
    log::debug!(
        "xmatch {:?}/{:?} over {} keys",
        options.match_mode,
        options.search_mode,
        keys.len()
    );
    let order = ValueOrder::new(options.case_sensitive);
    match options.match_mode {
        MatchMode::Exact => Ok(exact_match(target, keys, options.search_mode, order)),
        MatchMode::NextLarger | MatchMode::NextSmaller => {
            Ok(approximate_match(target, keys, options, order))
        }
        MatchMode::Wildcard | MatchMode::Regex => {
            validate_modes(options)?;
            let Some(text) = target.as_text() else {
                return Ok(None);
            };
            let body = match options.match_mode {
                MatchMode::Wildcard if options.tilde_escapes => wildcard::to_regex_with_tilde(&text),
                MatchMode::Wildcard => wildcard::to_regex(&text),
                _ => text.into_owned(),
            };
            let regex = compile_anchored(&body)?;
            Ok(pattern_match(&regex, keys, options.search_mode))
        }
    }
}

fn exact_match(
    target: &Value,
    keys: &[Value],
    search_mode: SearchMode,
    order: ValueOrder,
) -> Option<usize> {
    match search_mode {
        SearchMode::FromFirst => keys.iter().position(|k| order.eq(k, target)),
        SearchMode::FromLast => keys.iter().rposition(|k| order.eq(k, target)),
        SearchMode::BinaryFromFirst => {
            let view = SortedView::identity(keys);
            let idx = view.lower_bound(target, order);
            (idx < view.len() && order.eq(view.get(idx), target)).then_some(idx)
        }
        SearchMode::BinaryFromLast => {
            let view = SortedView::identity(keys);
            let idx = view.upper_bound(target, order).checked_sub(1)?;
            order.eq(view.get(idx), target).then_some(idx)
        }
    }
}

fn approximate_match(
    target: &Value,
    keys: &[Value],
    options: &MatchOptions,
    order: ValueOrder,
) -> Option<usize> {
    let view = if options.search_mode.is_binary() {
        SortedView::identity(keys)
    } else {
        SortedView::sorted(keys, order)
    };
    let len = view.len();
    let probe = if options.search_mode.prefers_first() {
        view.lower_bound(target, order)
    } else {
        view.upper_bound(target, order)
    };

    let sorted_pos = match options.match_mode {
        MatchMode::NextLarger => {
            let check = probe.saturating_sub(1);
            if order.eq(view.get(check), target) {
                Some(check)
            } else if probe < len {
                Some(probe)
            } else {
                match options.out_of_range {
                    OutOfRange::Clamp => Some(len - 1),
                    OutOfRange::NotFound => None,
                }
            }
        }
        _ => {
            let check = probe.min(len - 1);
            if order.eq(view.get(check), target) {
                Some(check)
            } else if probe > 0 {
                Some(probe - 1)
            } else {
                match options.out_of_range {
                    OutOfRange::Clamp => Some(0),
                    OutOfRange::NotFound => None,
                }
            }
        }
    };

    sorted_pos.map(|pos| view.original_index(pos))
}

/// Compiles `body` as a case-insensitive full match.
///
/// The body is parsed on its own first: wrapped in `^(?:…)$` straight away, an unbalanced `)` would
/// close the group early and leave the anchors on separate alternation branches.
fn compile_anchored(body: &str) -> LookupResult<Regex> {
    let invalid = |err: regex::Error| LookupError::InvalidPattern {
        pattern: body.to_string(),
        message: err.to_string(),
    };
    Regex::new(body).map_err(invalid)?;
    RegexBuilder::new(&format!("^(?:{body})$"))
        .case_insensitive(true)
        .build()
        .map_err(invalid)
}

fn pattern_match(regex: &Regex, keys: &[Value], search_mode: SearchMode) -> Option<usize> {
    let mut matches = keys
        .iter()
        .enumerate()
        .filter(|(_, key)| key.as_text().is_some_and(|text| regex.is_match(&text)))
        .map(|(idx, _)| idx);
    if search_mode.prefers_first() {
        matches.next()
    } else {
        matches.max()
    }
}

/// Keys viewed in ascending order, either as given or through a sort permutation.
struct SortedView<'a> {
    keys: &'a [Value],
    permutation: Option<Vec<usize>>,
}

impl<'a> SortedView<'a> {
    fn identity(keys: &'a [Value]) -> Self {
        Self {
            keys,
            permutation: None,
        }
    }

    fn sorted(keys: &'a [Value], order: ValueOrder) -> Self {
        let mut permutation: Vec<usize> = (0..keys.len()).collect();
        // `sort_by` is stable, so equal keys keep their original relative order.
        permutation.sort_by(|&a, &b| order.cmp(&keys[a], &keys[b]));
        log::trace!("sorted {} keys for approximate match", keys.len());
        Self {
            keys,
            permutation: Some(permutation),
        }
    }

    fn len(&self) -> usize {
        self.keys.len()
    }

    fn original_index(&self, pos: usize) -> usize {
        match &self.permutation {
            Some(permutation) => permutation[pos],
            None => pos,
        }
    }

    fn get(&self, pos: usize) -> &'a Value {
        &self.keys[self.original_index(pos)]
    }

    /// Leftmost insertion point for `target`.
    fn lower_bound(&self, target: &Value, order: ValueOrder) -> usize {
        self.partition_point(|v| order.cmp(v, target) == Ordering::Less)
    }

    /// Rightmost insertion point for `target`.
    fn upper_bound(&self, target: &Value, order: ValueOrder) -> usize {
        self.partition_point(|v| order.cmp(v, target) != Ordering::Greater)
    }

    fn partition_point(&self, mut pred: impl FnMut(&Value) -> bool) -> usize {
        let mut lo = 0usize;
        let mut hi = self.len();
        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            if pred(self.get(mid)) {
                lo = mid + 1;
            } else {
                hi = mid;
            }
        }
        lo
    }
}
