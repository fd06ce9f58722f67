//! Benchmarks for outlier filtering and full detection runs

use amplitude_anomaly::anomaly_detect::DetectionRequest;
use amplitude_anomaly::{Detector, OutlierFilter, QuantileMethod};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::prelude::*;
use rand_distr::Normal;

/// Normal amplitudes with a few spikes and gaps mixed in
fn generate_amplitudes(size: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let normal = Normal::new(0.0, 25.0).unwrap();
    (0..size)
        .map(|i| match i % 97 {
            0 => f64::NAN,
            13 => 400.0,
            _ => normal.sample(&mut rng),
        })
        .collect()
}

fn bench_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("iqr_filter");
    let linear = OutlierFilter::new(1.5).unwrap();
    let nearest = OutlierFilter::with_estimator(1.5, QuantileMethod::NearestRank).unwrap();

    for &size in &[100, 1_000, 10_000, 100_000] {
        let data = generate_amplitudes(size, 42);
        group.bench_with_input(BenchmarkId::new("linear", size), &data, |b, data| {
            b.iter(|| linear.filter_outliers(black_box(data)))
        });
        group.bench_with_input(BenchmarkId::new("nearest_rank", size), &data, |b, data| {
            b.iter(|| nearest.filter_outliers(black_box(data)))
        });
    }

    group.finish();
}

fn bench_detect(c: &mut Criterion) {
    let mut group = c.benchmark_group("detect");
    let detector = Detector::default();
    let nearest = Detector::builder()
        .quantile_method(QuantileMethod::NearestRank)
        .build()
        .unwrap();

    for &size in &[365, 3_650, 36_500] {
        let data = generate_amplitudes(size, 7);
        group.bench_with_input(BenchmarkId::new("default", size), &data, |b, data| {
            b.iter(|| detector.detect(black_box(data), black_box(120.0)))
        });
        group.bench_with_input(BenchmarkId::new("nearest_rank", size), &data, |b, data| {
            b.iter(|| nearest.detect(black_box(data), black_box(120.0)))
        });
    }

    group.finish();
}

fn bench_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("detect_batch");
    let detector = Detector::default();

    for &runs in &[8, 64] {
        let requests: Vec<DetectionRequest> = (0..runs)
            .map(|i| {
                DetectionRequest::new(format!("T{i}"), generate_amplitudes(3_650, i as u64), 90.0)
            })
            .collect();
        group.bench_with_input(BenchmarkId::from_parameter(runs), &requests, |b, requests| {
            b.iter(|| detector.detect_batch(black_box(requests)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_filter, bench_detect, bench_batch);
criterion_main!(benches);
