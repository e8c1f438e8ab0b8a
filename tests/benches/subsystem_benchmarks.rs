//! # Mayak Core Benchmarks
//!
//! | Core | Operation |
//! |------|-----------|
//! | mk-01 | Telegram claim verification |
//! | mk-02 | Proximity filter over a day of events |

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::Rng;
use std::time::Duration;

use mk_01_auth::{compute_hash, verify, AuthClaim};
use mk_02_road_events::filter_by_radius;
use shared_types::Coordinate;

const TOKEN: &str = "123456:ABC-DEF";

fn widget_claim() -> AuthClaim {
    let claim = AuthClaim::new()
        .with("id", 42)
        .with("first_name", "Ivan")
        .with("last_name", "Petrov")
        .with("username", "ipetrov")
        .with("photo_url", "https://t.me/i/userpic/320/ipetrov.jpg")
        .with("auth_date", 1_700_000_000);
    let hash = compute_hash(&claim, TOKEN).unwrap();
    claim.with("hash", hash)
}

fn bench_claim_verification(c: &mut Criterion) {
    let mut group = c.benchmark_group("mk-01-verify");
    group.measurement_time(Duration::from_secs(5));

    let valid = widget_claim();
    let forged = widget_claim().with("id", 43);

    group.bench_function("valid", |b| b.iter(|| verify(black_box(&valid), TOKEN)));
    group.bench_function("forged", |b| b.iter(|| verify(black_box(&forged), TOKEN)));
    group.finish();
}

/// Points scattered within roughly 2 degrees of central Moscow.
fn scattered(count: usize) -> Vec<Coordinate> {
    let mut rng = rand::thread_rng();
    (0..count)
        .map(|_| {
            Coordinate::new(
                55.7558 + rng.gen_range(-2.0..2.0),
                37.6173 + rng.gen_range(-2.0..2.0),
            )
        })
        .collect()
}

fn bench_proximity_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("mk-02-proximity");
    let origin = Coordinate::new(55.7558, 37.6173);

    for count in [100, 1_000, 10_000] {
        let candidates = scattered(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &candidates, |b, input| {
            b.iter(|| filter_by_radius(origin, 59.0, black_box(input.clone())))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_claim_verification, bench_proximity_filter);
criterion_main!(benches);
