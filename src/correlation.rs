// ABOUTME: Pearson correlation between external factor series and daily energy scores
// ABOUTME: Strength bucketing, zero-variance guards, and per-factor sample gating
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Attune Intelligence

//! # Correlation Engine
//!
//! Pairs an external factor series (sleep, weather, habits) with daily energy
//! scores by date and computes the Pearson coefficient. Degenerate series
//! yield exactly 0.0, never NaN. Below the per-factor sample thresholds the
//! outcome is [`CorrelationOutcome::InsufficientData`] rather than a
//! statistically meaningless number.

use crate::config::EngineConfig;
use crate::errors::AppResult;
use crate::models::{HabitLog, SleepSession, TimeSeriesPoint, WeatherSample};
use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Correlation strength buckets over the absolute coefficient
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CorrelationStrength {
    /// |r| at or above the strong threshold
    Strong,
    /// |r| at or above the moderate threshold
    Moderate,
    /// |r| at or above the weak threshold
    Weak,
    /// No meaningful relationship
    None,
}

impl CorrelationStrength {
    /// Bucket a coefficient using the configured thresholds
    #[must_use]
    pub fn from_coefficient(coefficient: f64, config: &EngineConfig) -> Self {
        let magnitude = coefficient.abs();
        if magnitude >= config.correlation.strong_threshold {
            Self::Strong
        } else if magnitude >= config.correlation.moderate_threshold {
            Self::Moderate
        } else if magnitude >= config.correlation.weak_threshold {
            Self::Weak
        } else {
            Self::None
        }
    }

    /// Human-readable bucket name
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Strong => "strong",
            Self::Moderate => "moderate",
            Self::Weak => "weak",
            Self::None => "no clear",
        }
    }
}

/// A computed factor correlation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrelationResult {
    /// Factor name ("sleep duration", "temperature", a habit name)
    pub factor: String,
    /// Pearson coefficient in [-1, 1]
    pub coefficient: f64,
    /// Strength bucket
    pub strength: CorrelationStrength,
    /// Human-readable description of the relationship
    pub description: String,
    /// Number of paired samples behind the coefficient
    pub sample_count: usize,
}

/// Outcome of a correlation request
///
/// Sparse data is an expected steady state, so it is a variant here rather
/// than an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum CorrelationOutcome {
    /// Enough paired samples existed to compute a coefficient
    Computed(CorrelationResult),
    /// Below the documented minimum paired-sample count
    InsufficientData {
        /// Samples required by the call site
        required: usize,
        /// Samples actually available
        actual: usize,
    },
}

/// Pearson correlation coefficient over two paired series
///
/// Returns exactly 0.0 when the series lengths differ, fewer than two pairs
/// exist, or either series has zero variance. Never NaN or infinite.
#[must_use]
pub fn pearson(xs: &[f64], ys: &[f64]) -> f64 {
    if xs.len() != ys.len() || xs.len() < 2 {
        return 0.0;
    }

    let n = xs.len() as f64;
    let mean_x = xs.iter().sum::<f64>() / n;
    let mean_y = ys.iter().sum::<f64>() / n;

    let mut covariance = 0.0;
    let mut variance_x = 0.0;
    let mut variance_y = 0.0;
    for (x, y) in xs.iter().zip(ys) {
        let dx = x - mean_x;
        let dy = y - mean_y;
        covariance += dx * dy;
        variance_x += dx * dx;
        variance_y += dy * dy;
    }

    if variance_x <= f64::EPSILON || variance_y <= f64::EPSILON {
        return 0.0;
    }

    covariance / (variance_x * variance_y).sqrt()
}

/// Correlation analysis service
pub struct CorrelationAnalyzer {
    config: EngineConfig,
}

impl Default for CorrelationAnalyzer {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl CorrelationAnalyzer {
    /// Create an analyzer with the given configuration
    #[must_use]
    pub const fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Correlate two date-keyed series, pairing points by date
    ///
    /// Uses the configured general minimum paired-sample count.
    #[must_use]
    pub fn correlate(
        &self,
        factor: &str,
        series_a: &[TimeSeriesPoint],
        series_b: &[TimeSeriesPoint],
    ) -> CorrelationOutcome {
        let pairs = pair_by_date(series_a, series_b);
        self.correlate_pairs(factor, &pairs, self.config.correlation.min_paired_samples)
    }

    /// Correlate sleep duration against daily energy scores
    #[must_use]
    pub fn correlate_sleep(
        &self,
        sessions: &[SleepSession],
        scores: &[TimeSeriesPoint],
    ) -> CorrelationOutcome {
        let series: Vec<TimeSeriesPoint> = sessions
            .iter()
            .map(|s| TimeSeriesPoint::new(s.date, s.duration_hours))
            .collect();
        let pairs = pair_by_date(&series, scores);
        self.correlate_pairs(
            "sleep duration",
            &pairs,
            self.config.correlation.min_paired_samples,
        )
    }

    /// Correlate air temperature against daily energy scores
    #[must_use]
    pub fn correlate_weather(
        &self,
        samples: &[WeatherSample],
        scores: &[TimeSeriesPoint],
    ) -> CorrelationOutcome {
        let series: Vec<TimeSeriesPoint> = samples
            .iter()
            .map(|w| TimeSeriesPoint::new(w.date, w.temperature_c))
            .collect();
        let pairs = pair_by_date(&series, scores);
        self.correlate_pairs(
            "temperature",
            &pairs,
            self.config.correlation.min_paired_samples,
        )
    }

    /// Correlate one habit's completion against daily energy scores
    ///
    /// Only logs inside the configured trailing window (anchored on the most
    /// recent log for the habit) are considered. Requires the configured
    /// minimum log count and at least one completed and one skipped day;
    /// otherwise a constant series would zero out the coefficient anyway.
    #[must_use]
    pub fn correlate_habit(
        &self,
        habit: &str,
        logs: &[HabitLog],
        scores: &[TimeSeriesPoint],
    ) -> CorrelationOutcome {
        let required = self.config.correlation.min_habit_logs;

        let Some(latest) = logs
            .iter()
            .filter(|log| log.habit == habit)
            .map(|log| log.date)
            .max()
        else {
            return CorrelationOutcome::InsufficientData {
                required,
                actual: 0,
            };
        };

        let window_start = latest - Duration::days(self.config.correlation.habit_window_days);
        let windowed: Vec<&HabitLog> = logs
            .iter()
            .filter(|log| log.habit == habit && log.date >= window_start)
            .collect();

        let has_completed = windowed.iter().any(|log| log.completed);
        let has_skipped = windowed.iter().any(|log| !log.completed);
        if windowed.len() < required || !has_completed || !has_skipped {
            return CorrelationOutcome::InsufficientData {
                required,
                actual: windowed.len(),
            };
        }

        let series: Vec<TimeSeriesPoint> = windowed
            .iter()
            .map(|log| TimeSeriesPoint::new(log.date, if log.completed { 1.0 } else { 0.0 }))
            .collect();
        let pairs = pair_by_date(&series, scores);
        self.correlate_pairs(habit, &pairs, required)
    }

    /// Correlate every distinct habit present in the logs
    ///
    /// # Errors
    /// Currently infallible; the signature leaves room for windowing
    /// validation.
    pub fn correlate_all_habits(
        &self,
        logs: &[HabitLog],
        scores: &[TimeSeriesPoint],
    ) -> AppResult<Vec<(String, CorrelationOutcome)>> {
        let mut habits: Vec<&str> = logs.iter().map(|log| log.habit.as_str()).collect();
        habits.sort_unstable();
        habits.dedup();

        Ok(habits
            .into_iter()
            .map(|habit| (habit.to_owned(), self.correlate_habit(habit, logs, scores)))
            .collect())
    }

    fn correlate_pairs(
        &self,
        factor: &str,
        pairs: &[(f64, f64)],
        required: usize,
    ) -> CorrelationOutcome {
        if pairs.len() < required {
            return CorrelationOutcome::InsufficientData {
                required,
                actual: pairs.len(),
            };
        }

        let xs: Vec<f64> = pairs.iter().map(|(x, _)| *x).collect();
        let ys: Vec<f64> = pairs.iter().map(|(_, y)| *y).collect();
        let coefficient = pearson(&xs, &ys);
        let strength = CorrelationStrength::from_coefficient(coefficient, &self.config);

        let direction = if strength == CorrelationStrength::None {
            ""
        } else if coefficient > 0.0 {
            " positive"
        } else {
            " negative"
        };
        let description = format!(
            "{factor} shows a {}{direction} relationship with daily energy",
            strength.label()
        );

        tracing::debug!(
            factor,
            coefficient,
            samples = pairs.len(),
            "computed factor correlation"
        );

        CorrelationOutcome::Computed(CorrelationResult {
            factor: factor.to_owned(),
            coefficient,
            strength,
            description,
            sample_count: pairs.len(),
        })
    }
}

/// Join two series on date, keeping only dates present in both
fn pair_by_date(series_a: &[TimeSeriesPoint], series_b: &[TimeSeriesPoint]) -> Vec<(f64, f64)> {
    let by_date: HashMap<NaiveDate, f64> = series_b.iter().map(|p| (p.date, p.value)).collect();

    let mut sorted: Vec<&TimeSeriesPoint> = series_a.iter().collect();
    sorted.sort_by_key(|p| p.date);

    sorted
        .into_iter()
        .filter_map(|p| by_date.get(&p.date).map(|value| (p.value, *value)))
        .collect()
}
