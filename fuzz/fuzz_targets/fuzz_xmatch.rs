#![no_main]

use libfuzzer_sys::fuzz_target;

use formula_lookup::{xlookup, xmatch, Array, ErrorKind, MatchOptions, Value};

/// Keep each run cheap: small key vectors and short patterns.
const MAX_KEYS: usize = 256;
const MAX_PATTERN_BYTES: usize = 64;

fn decode_value(tag: u8, payload: u8) -> Value {
    match tag % 5 {
        0 => Value::Number(f64::from(payload) - 128.0),
        1 => Value::Text(format!("k{payload}")),
        2 => Value::Bool(payload % 2 == 0),
        3 => Value::Blank,
        _ => Value::Error(ErrorKind::NA),
    }
}

fuzz_target!(|data: &[u8]| {
    let [match_code, search_code, target_tag, target_payload, pattern_len, rest @ ..] = data else {
        return;
    };
    let Ok(options) = MatchOptions::from_codes(
        i64::from(*match_code % 5) - 1,
        [1, -1, 2, -2][usize::from(*search_code % 4)],
    ) else {
        return;
    };

    let pattern_len = usize::from(*pattern_len).min(MAX_PATTERN_BYTES).min(rest.len());
    let (pattern, rest) = rest.split_at(pattern_len);
    let target = if options.match_mode.is_pattern() {
        Value::Text(String::from_utf8_lossy(pattern).into_owned())
    } else {
        decode_value(*target_tag, *target_payload)
    };

    let keys: Vec<Value> = rest
        .chunks_exact(2)
        .take(MAX_KEYS)
        .map(|pair| decode_value(pair[0], pair[1]))
        .collect();
    let keys = Array::vector(keys);

    // Errors are expected for empty keys, binary pattern searches and malformed regexes; any
    // returned position must be in bounds.
    if let Ok(Some(pos)) = xmatch(&target, &keys, options.match_mode, options.search_mode) {
        assert!(pos < keys.len());
    }
    let _ = xlookup(
        vec![target],
        &keys,
        &keys,
        Some(Value::Blank),
        options.match_mode,
        options.search_mode,
    );
});
