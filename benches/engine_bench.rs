// ABOUTME: Criterion benchmarks for the energy engine and analytics
// ABOUTME: Measures range synthesis, forecasting, and pattern mining over large windows
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Attune Intelligence

//! Criterion benchmarks for the scoring core and analytics.
//!
//! Pattern mining and long-window forecasting re-run synthesis once per
//! historical day, so callers treat those paths as long synchronous units of
//! work. These benchmarks keep an eye on that cost.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]
#![allow(clippy::unwrap_used, clippy::expect_used)]

use attune_engine::forecast::{ForecastEngine, ForecastRequest};
use attune_engine::models::{DailyLogEntry, TimeSeriesPoint, UserProfile};
use attune_engine::patterns::PatternRecognizer;
use attune_engine::synthesis::EnergyEngine;
use chrono::{Duration, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn bench_profile() -> UserProfile {
    UserProfile::new(
        "Benchmark",
        NaiveDate::from_ymd_opt(1990, 6, 15).unwrap(),
    )
}

fn score_history(from: NaiveDate, days: usize) -> Vec<TimeSeriesPoint> {
    (0..days)
        .map(|i| {
            TimeSeriesPoint::new(
                from - Duration::days((days - i) as i64),
                40.0 + ((i * 13) % 40) as f64,
            )
        })
        .collect()
}

fn log_history(from: NaiveDate, days: usize) -> Vec<DailyLogEntry> {
    (0..days)
        .map(|i| DailyLogEntry {
            date: from - Duration::days((days - i) as i64),
            recorded_hour: Some(6 + (i as u32 * 5) % 18),
            score: 40.0 + ((i * 13) % 40) as f64,
        })
        .collect()
}

fn bench_range_synthesis(c: &mut Criterion) {
    let engine = EnergyEngine::default();
    let profile = bench_profile();
    let start = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();

    let mut group = c.benchmark_group("range_synthesis");
    for window_days in [30_i64, 90, 365] {
        group.bench_with_input(
            BenchmarkId::from_parameter(window_days),
            &window_days,
            |b, &days| {
                let end = start + Duration::days(days - 1);
                b.iter(|| {
                    engine
                        .compute_energy_for_range(black_box(&profile), start, end)
                        .unwrap()
                });
            },
        );
    }
    group.finish();
}

fn bench_forecast(c: &mut Criterion) {
    let engine = ForecastEngine::default();
    let profile = bench_profile();
    let from = NaiveDate::from_ymd_opt(2025, 7, 1).unwrap();
    let history = score_history(from, 90);

    c.bench_function("forecast_30_days", |b| {
        let request = ForecastRequest {
            from,
            days_ahead: 30,
            history: &history,
            recent_sleep_quality: Some(80.0),
        };
        b.iter(|| engine.forecast(black_box(&profile), &request).unwrap());
    });
}

fn bench_pattern_recognition(c: &mut Criterion) {
    let recognizer = PatternRecognizer::default();
    let profile = bench_profile();
    let from = NaiveDate::from_ymd_opt(2025, 7, 1).unwrap();
    let logs = log_history(from, 180);

    c.bench_function("pattern_recognition_180_days", |b| {
        b.iter(|| recognizer.recognize(black_box(&profile), &logs).unwrap());
    });
}

criterion_group!(
    benches,
    bench_range_synthesis,
    bench_forecast,
    bench_pattern_recognition
);
criterion_main!(benches);
