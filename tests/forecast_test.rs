// ABOUTME: Integration tests for the forecast engine
// ABOUTME: Clamping, confidence caps, factor accounting, trend rules, and recommendations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Attune Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use attune_engine::forecast::{ForecastEngine, ForecastRequest, TrendDirection};
use attune_engine::models::{TimeSeriesPoint, UserProfile};
use chrono::{Duration, NaiveDate};

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn test_profile() -> UserProfile {
    UserProfile::new("Maya", date(1990, 6, 15))
}

fn history_before(from: NaiveDate, values: &[f64]) -> Vec<TimeSeriesPoint> {
    values
        .iter()
        .enumerate()
        .map(|(i, v)| TimeSeriesPoint::new(from - Duration::days(values.len() as i64 - i as i64), *v))
        .collect()
}

#[test]
fn forecast_without_history_uses_the_default_baseline() {
    let engine = ForecastEngine::default();
    let request = ForecastRequest {
        from: date(2025, 7, 7),
        days_ahead: 7,
        history: &[],
        recent_sleep_quality: None,
    };

    let forecast = engine.forecast(&test_profile(), &request).unwrap();

    assert_eq!(forecast.days.len(), 7);
    for day in &forecast.days {
        // Baseline 50 plus bounded factor terms stays well inside the range
        assert!((0.0..=100.0).contains(&day.predicted_score));
        // No weekday history, so confidence never leaves its base
        assert!((day.confidence - 70.0).abs() < f64::EPSILON);
        // Five factor terms: lunar, weekday rhythm, sleep, habit, weather
        assert_eq!(day.factors.len(), 5);
    }
}

#[test]
fn weekday_history_adds_a_factor_and_confidence() {
    let engine = ForecastEngine::default();
    let from = date(2025, 7, 7);
    let values: Vec<f64> = (0..21).map(|i| 50.0 + f64::from(i % 7)).collect();
    let history = history_before(from, &values);

    let request = ForecastRequest {
        from,
        days_ahead: 7,
        history: &history,
        recent_sleep_quality: None,
    };

    let forecast = engine.forecast(&test_profile(), &request).unwrap();

    for day in &forecast.days {
        assert!((day.confidence - 75.0).abs() < f64::EPSILON);
        assert_eq!(day.factors.len(), 6);
        assert!(day.factors.iter().any(|f| f.name == "weekday_history"));
    }
}

#[test]
fn confidence_never_exceeds_the_cap() {
    let engine = ForecastEngine::default();
    let from = date(2025, 7, 7);
    let values: Vec<f64> = (0..90).map(|i| 40.0 + f64::from(i % 30)).collect();
    let history = history_before(from, &values);

    let request = ForecastRequest {
        from,
        days_ahead: 30,
        history: &history,
        recent_sleep_quality: Some(100.0),
    };

    let forecast = engine.forecast(&test_profile(), &request).unwrap();

    for day in &forecast.days {
        assert!(day.confidence <= 95.0);
    }
}

#[test]
fn adversarial_history_cannot_escape_the_score_range() {
    let engine = ForecastEngine::default();
    let from = date(2025, 7, 7);

    let huge = history_before(from, &[10_000.0; 30]);
    let request = ForecastRequest {
        from,
        days_ahead: 7,
        history: &huge,
        recent_sleep_quality: Some(100.0),
    };
    let forecast = engine.forecast(&test_profile(), &request).unwrap();
    for day in &forecast.days {
        assert!((0.0..=100.0).contains(&day.predicted_score));
    }

    let negative = history_before(from, &[-10_000.0; 30]);
    let request = ForecastRequest {
        from,
        days_ahead: 7,
        history: &negative,
        recent_sleep_quality: Some(0.0),
    };
    let forecast = engine.forecast(&test_profile(), &request).unwrap();
    for day in &forecast.days {
        assert!((0.0..=100.0).contains(&day.predicted_score));
    }
}

#[test]
fn zero_day_window_is_rejected() {
    let engine = ForecastEngine::default();
    let request = ForecastRequest {
        from: date(2025, 7, 7),
        days_ahead: 0,
        history: &[],
        recent_sleep_quality: None,
    };
    assert!(engine.forecast(&test_profile(), &request).is_err());
}

#[test]
fn oversized_window_is_rejected() {
    let engine = ForecastEngine::default();
    let request = ForecastRequest {
        from: date(2025, 7, 7),
        days_ahead: 91,
        history: &[],
        recent_sleep_quality: None,
    };
    assert!(engine.forecast(&test_profile(), &request).is_err());
}

#[test]
fn overall_trend_matches_the_three_day_rule() {
    let engine = ForecastEngine::default();
    let from = date(2025, 7, 7);
    let values: Vec<f64> = (0..60).map(|i| 30.0 + f64::from(i)).collect();
    let history = history_before(from, &values);

    let request = ForecastRequest {
        from,
        days_ahead: 7,
        history: &history,
        recent_sleep_quality: None,
    };
    let forecast = engine.forecast(&test_profile(), &request).unwrap();

    let first: f64 = forecast.days[..3]
        .iter()
        .map(|d| d.predicted_score)
        .sum::<f64>()
        / 3.0;
    let last: f64 = forecast.days[4..]
        .iter()
        .map(|d| d.predicted_score)
        .sum::<f64>()
        / 3.0;

    let expected = if last - first > 5.0 {
        TrendDirection::Improving
    } else if last - first < -5.0 {
        TrendDirection::Declining
    } else {
        TrendDirection::Stable
    };
    assert_eq!(forecast.overall_trend, expected);
}

#[test]
fn best_and_worst_days_bound_the_window() {
    let engine = ForecastEngine::default();
    let from = date(2025, 7, 7);
    let request = ForecastRequest {
        from,
        days_ahead: 14,
        history: &[],
        recent_sleep_quality: None,
    };

    let forecast = engine.forecast(&test_profile(), &request).unwrap();

    let best = forecast
        .days
        .iter()
        .find(|d| d.date == forecast.best_day)
        .unwrap();
    let worst = forecast
        .days
        .iter()
        .find(|d| d.date == forecast.worst_day)
        .unwrap();

    for day in &forecast.days {
        assert!(day.predicted_score <= best.predicted_score);
        assert!(day.predicted_score >= worst.predicted_score);
    }
}

#[test]
fn recommendations_are_bounded_and_present() {
    let engine = ForecastEngine::default();
    let request = ForecastRequest {
        from: date(2025, 7, 7),
        days_ahead: 7,
        history: &[],
        recent_sleep_quality: None,
    };

    let forecast = engine.forecast(&test_profile(), &request).unwrap();

    assert!(!forecast.recommendations.is_empty());
    assert!(forecast.recommendations.len() <= 4);
}

#[test]
fn sleep_quality_shifts_the_prediction() {
    let engine = ForecastEngine::default();
    let from = date(2025, 7, 7);

    let rested = ForecastRequest {
        from,
        days_ahead: 3,
        history: &[],
        recent_sleep_quality: Some(100.0),
    };
    let tired = ForecastRequest {
        from,
        days_ahead: 3,
        history: &[],
        recent_sleep_quality: Some(30.0),
    };

    let rested = engine.forecast(&test_profile(), &rested).unwrap();
    let tired = engine.forecast(&test_profile(), &tired).unwrap();

    for (r, t) in rested.days.iter().zip(&tired.days) {
        // (100 - 70) / 2 * 0.4 = +6 against (30 - 70) / 2 * 0.4 = -8
        assert!((r.predicted_score - t.predicted_score - 14.0).abs() < 1e-9);
    }
}

#[test]
fn per_day_forecast_is_deterministic() {
    let engine = ForecastEngine::default();
    let request = ForecastRequest {
        from: date(2025, 7, 7),
        days_ahead: 10,
        history: &[],
        recent_sleep_quality: Some(80.0),
    };

    let first = engine.forecast(&test_profile(), &request).unwrap();
    let second = engine.forecast(&test_profile(), &request).unwrap();

    assert_eq!(first, second);
}
