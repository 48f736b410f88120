use formula_lookup::{xmatch, Array, LookupError, MatchMode, SearchMode, Value};
use proptest::prelude::*;

fn array(keys: &[i32]) -> Array {
    Array::from_values(keys.iter().copied())
}

/// Smallest index holding the least key `>= target`; clamps to the last index of the maximum.
fn scan_next_larger(keys: &[i32], target: i32) -> usize {
    match keys.iter().filter(|&&k| k >= target).min() {
        Some(&best) => keys.iter().position(|&k| k == best).unwrap(),
        None => {
            let max = *keys.iter().max().unwrap();
            keys.iter().rposition(|&k| k == max).unwrap()
        }
    }
}

/// An exact hit wins at its first index; otherwise the largest index holding the greatest key
/// `< target`; clamps to the first index of the minimum.
fn scan_next_smaller(keys: &[i32], target: i32) -> usize {
    if let Some(pos) = keys.iter().position(|&k| k == target) {
        return pos;
    }
    match keys.iter().filter(|&&k| k < target).max() {
        Some(&best) => keys.iter().rposition(|&k| k == best).unwrap(),
        None => {
            let min = *keys.iter().min().unwrap();
            keys.iter().position(|&k| k == min).unwrap()
        }
    }
}

fn keys_strategy() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(0i32..50, 1..40)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        max_shrink_iters: 0,
        .. ProptestConfig::default()
    })]

    #[test]
    fn exact_match_finds_first_and_last_occurrence(keys in keys_strategy(), target in 0i32..60) {
        let arr = array(&keys);
        let t = Value::from(target);
        prop_assert_eq!(
            xmatch(&t, &arr, MatchMode::Exact, SearchMode::FromFirst).unwrap(),
            keys.iter().position(|&k| k == target)
        );
        prop_assert_eq!(
            xmatch(&t, &arr, MatchMode::Exact, SearchMode::FromLast).unwrap(),
            keys.iter().rposition(|&k| k == target)
        );
    }

    #[test]
    fn sorted_view_maps_back_like_a_direct_scan(keys in keys_strategy(), target in -5i32..60) {
        let arr = array(&keys);
        let t = Value::from(target);
        prop_assert_eq!(
            xmatch(&t, &arr, MatchMode::NextLarger, SearchMode::FromFirst).unwrap(),
            Some(scan_next_larger(&keys, target))
        );
        prop_assert_eq!(
            xmatch(&t, &arr, MatchMode::NextSmaller, SearchMode::FromFirst).unwrap(),
            Some(scan_next_smaller(&keys, target))
        );
    }

    #[test]
    fn binary_search_agrees_with_linear_search_on_values(
        keys in keys_strategy(),
        target in -5i32..60,
    ) {
        let mut sorted = keys.clone();
        sorted.sort_unstable();
        let unsorted = array(&keys);
        let ascending = array(&sorted);
        let t = Value::from(target);

        for (mode, linear, binary) in [
            (MatchMode::Exact, SearchMode::FromFirst, SearchMode::BinaryFromFirst),
            (MatchMode::NextLarger, SearchMode::FromFirst, SearchMode::BinaryFromFirst),
            (MatchMode::NextLarger, SearchMode::FromLast, SearchMode::BinaryFromLast),
            (MatchMode::NextSmaller, SearchMode::FromFirst, SearchMode::BinaryFromFirst),
            (MatchMode::NextSmaller, SearchMode::FromLast, SearchMode::BinaryFromLast),
        ] {
            let by_scan = xmatch(&t, &unsorted, mode, linear).unwrap().map(|pos| keys[pos]);
            let by_probe = xmatch(&t, &ascending, mode, binary).unwrap().map(|pos| sorted[pos]);
            prop_assert_eq!(by_scan, by_probe);
        }
    }

    #[test]
    fn wildcard_star_matches_its_regex_translation(
        streets in prop::collection::vec("[a-c ]{0,5}( Blvd| blvd)?", 1..20),
    ) {
        let arr = Array::from_values(streets.iter().map(String::as_str));
        for search in [SearchMode::FromFirst, SearchMode::FromLast] {
            prop_assert_eq!(
                xmatch(&Value::from("* Blvd"), &arr, MatchMode::Wildcard, search).unwrap(),
                xmatch(&Value::from(".* Blvd"), &arr, MatchMode::Regex, search).unwrap()
            );
        }
    }

    #[test]
    fn binary_pattern_search_is_always_rejected(keys in keys_strategy(), target in 0i32..60) {
        let arr = array(&keys);
        for mode in [MatchMode::Wildcard, MatchMode::Regex] {
            for search in [SearchMode::BinaryFromFirst, SearchMode::BinaryFromLast] {
                prop_assert_eq!(
                    xmatch(&Value::from(target), &arr, mode, search),
                    Err(LookupError::BinaryPatternSearch)
                );
            }
        }
    }
}
