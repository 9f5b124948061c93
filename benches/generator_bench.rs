// ABOUTME: Criterion benchmarks for workout generation and rendering
// ABOUTME: Measures plan building across workout sizes and pool units, plus text rendering
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Criterion benchmarks for the workout generator.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]
#![allow(clippy::unwrap_used, clippy::expect_used)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use swim_core::models::{PoolLength, ThresholdPace, WorkoutRequest};
use swim_planner::{render_text, snap_to_pool_multiple, WorkoutGenerator};
use swim_workout_server::services::WorkoutService;

const DISTANCES: [f64; 4] = [500.0, 2000.0, 4000.0, 10_000.0];

fn request(distance: f64, pool: &str, pace: Option<&str>, seed: Option<u64>) -> WorkoutRequest {
    let pool: PoolLength = pool.parse().unwrap();
    let pace = pace.map(|pace| pace.parse::<ThresholdPace>().unwrap());
    WorkoutRequest::new(distance, None, pool, pace, seed).unwrap()
}

fn bench_snap(c: &mut Criterion) {
    c.bench_function("snap_to_pool_multiple", |b| {
        b.iter(|| {
            (1..=200).fold(0.0, |acc, step| {
                acc + snap_to_pool_multiple(black_box(f64::from(step) * 37.5), black_box(25.0))
            })
        });
    });
}

fn bench_generate(c: &mut Criterion) {
    let generator = WorkoutGenerator::default();
    let mut group = c.benchmark_group("generate");

    for distance in DISTANCES {
        for pool in ["25m", "25yd", "50m"] {
            let request = request(distance, pool, Some("1:45"), None);
            group.bench_with_input(
                BenchmarkId::new(pool, distance),
                &request,
                |b, request| b.iter(|| generator.generate(black_box(request))),
            );
        }
    }

    let seeded = request(4000.0, "25m", None, Some(42));
    group.bench_function("seeded_4000_25m", |b| {
        b.iter(|| generator.generate(black_box(&seeded)));
    });

    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let plan = WorkoutGenerator::default().generate(&request(4000.0, "25m", Some("1:30"), None));
    c.bench_function("render_text_4000", |b| b.iter(|| render_text(black_box(&plan))));
}

fn bench_service_round_trip(c: &mut Criterion) {
    let service = WorkoutService::default();
    let body = br#"{"distance":2000,"poolLength":"25yd","thresholdPace":"1:40"}"#;
    c.bench_function("service_generate_from_slice", |b| {
        b.iter(|| service.generate_from_slice(black_box(body)).unwrap());
    });
}

criterion_group!(
    benches,
    bench_snap,
    bench_generate,
    bench_render,
    bench_service_round_trip,
);
criterion_main!(benches);
