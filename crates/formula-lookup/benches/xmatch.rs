use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use formula_lookup::{xlookup, xmatch, Array, MatchMode, SearchMode, Value};

fn bench_rows() -> usize {
    std::env::var("FORMULA_LOOKUP_BENCH_ROWS")
        .ok()
        .and_then(|v| v.replace('_', "").parse::<usize>().ok())
        .filter(|v| (1_000..=5_000_000).contains(v))
        .unwrap_or(100_000)
}

/// Deterministic pseudo-random keys so unsorted searches don't hit the best case.
fn scrambled_keys(rows: usize) -> Vec<Value> {
    (0..rows as u64)
        .map(|i| {
            let mut x = i.wrapping_mul(0x9e3779b97f4a7c15);
            x ^= x >> 29;
            Value::Number((x % (rows as u64 * 4)) as f64)
        })
        .collect()
}

fn bench_xmatch(c: &mut Criterion) {
    let rows = bench_rows();
    let keys = scrambled_keys(rows);
    let mut sorted = keys.clone();
    sorted.sort_by(|a, b| match (a, b) {
        (Value::Number(a), Value::Number(b)) => a.total_cmp(b),
        _ => std::cmp::Ordering::Equal,
    });
    let unsorted = Array::vector(keys);
    let ascending = Array::vector(sorted);
    let target = Value::Number((rows * 2) as f64 + 0.5);

    let mut group = c.benchmark_group("xmatch");
    group.throughput(Throughput::Elements(rows as u64));

    group.bench_with_input(BenchmarkId::new("exact_linear", rows), &rows, |b, _| {
        b.iter(|| {
            let pos = xmatch(
                black_box(&target),
                &unsorted,
                MatchMode::Exact,
                SearchMode::FromFirst,
            )
            .unwrap();
            black_box(pos);
        })
    });

    group.bench_with_input(BenchmarkId::new("next_larger_sorted_view", rows), &rows, |b, _| {
        b.iter(|| {
            let pos = xmatch(
                black_box(&target),
                &unsorted,
                MatchMode::NextLarger,
                SearchMode::FromFirst,
            )
            .unwrap();
            black_box(pos);
        })
    });

    group.bench_with_input(BenchmarkId::new("next_larger_binary", rows), &rows, |b, _| {
        b.iter(|| {
            let pos = xmatch(
                black_box(&target),
                &ascending,
                MatchMode::NextLarger,
                SearchMode::BinaryFromFirst,
            )
            .unwrap();
            black_box(pos);
        })
    });

    group.finish();
}

fn bench_xlookup_patterns(c: &mut Criterion) {
    let rows = bench_rows();
    let suffixes = ["St", "Ave", "Blvd", "Rd", "Ln"];
    let streets = Array::from_values(
        (0..rows).map(|i| format!("{} Street {} {}", i, i % 97, suffixes[i % suffixes.len()])),
    );
    let ids = Array::from_values((0..rows).map(|i| i as f64));
    let targets: Vec<Value> = ["* Blvd", "1?? Street *", "*Missing*"]
        .into_iter()
        .map(Value::from)
        .collect();

    let mut group = c.benchmark_group("xlookup_wildcard");
    group.throughput(Throughput::Elements((rows * targets.len()) as u64));
    for search in [SearchMode::FromFirst, SearchMode::FromLast] {
        group.bench_with_input(
            BenchmarkId::new(format!("{search:?}"), rows),
            &rows,
            |b, _| {
                b.iter(|| {
                    let out = xlookup(
                        targets.clone(),
                        &streets,
                        &ids,
                        None,
                        MatchMode::Wildcard,
                        search,
                    )
                    .unwrap();
                    black_box(out);
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_xmatch, bench_xlookup_patterns);
criterion_main!(benches);
