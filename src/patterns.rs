// ABOUTME: Pattern mining over historical daily energy logs with minimum-sample gating
// ABOUTME: Finds best weekday, time-of-day window, and lunar phase with capped confidence
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Attune Intelligence

use crate::astronomy::{lunar_phase_on, LunarPhase};
use crate::config::{ConfidenceRule, EngineConfig, PatternConfig};
use crate::errors::AppResult;
use crate::models::{DailyLogEntry, UserProfile};
use crate::synthesis::DailyEnergyRecord;
use chrono::{Datelike, Weekday};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Dimension a recognized pattern was mined from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternKind {
    /// Recurring weekday regularity
    DayOfWeek,
    /// Morning/afternoon/evening regularity
    TimeOfDay,
    /// Lunar-phase regularity
    LunarPhase,
}

/// How strongly a pattern separates from the user's overall average
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatternImpact {
    /// Large lift over the overall mean
    High,
    /// Noticeable lift
    Medium,
    /// Mild lift
    Low,
}

/// Coarse time-of-day buckets from the hour a log entry was captured
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeOfDayBand {
    /// Hours 6-11
    Morning,
    /// Hours 12-17
    Afternoon,
    /// Hours 18-23
    Evening,
}

impl TimeOfDayBand {
    /// Band for an hour, or `None` for overnight hours (0-5)
    #[must_use]
    pub const fn from_hour(hour: u32) -> Option<Self> {
        match hour {
            6..=11 => Some(Self::Morning),
            12..=17 => Some(Self::Afternoon),
            18..=23 => Some(Self::Evening),
            _ => None,
        }
    }

    /// Human-readable band name
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Morning => "morning",
            Self::Afternoon => "afternoon",
            Self::Evening => "evening",
        }
    }
}

/// One mined regularity with its supporting evidence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecognizedPattern {
    /// Which dimension produced this pattern
    pub kind: PatternKind,
    /// Short pattern title
    pub title: String,
    /// Plain-language description of the evidence
    pub description: String,
    /// Capped confidence from the per-dimension accounting rule
    pub confidence: f64,
    /// Samples in the winning bucket
    pub sample_count: usize,
    /// Lift bucket relative to the overall average
    pub impact: PatternImpact,
    /// What to do with the pattern
    pub recommendation: String,
}

/// Outcome of a pattern-recognition run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum PatternOutcome {
    /// Enough history existed to mine; list may still be empty if every
    /// per-bucket gate failed
    Patterns {
        /// Recognized regularities, one per qualifying dimension
        patterns: Vec<RecognizedPattern>,
    },
    /// Below the minimum distinct-day history threshold
    InsufficientData {
        /// Distinct history days required
        required: usize,
        /// Distinct history days supplied
        actual: usize,
    },
}

/// Pattern mining service
pub struct PatternRecognizer {
    config: EngineConfig,
}

impl Default for PatternRecognizer {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl PatternRecognizer {
    /// Create a recognizer with the given configuration
    #[must_use]
    pub const fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Mine weekday, time-of-day, and lunar regularities from history
    ///
    /// # Errors
    /// Returns `AppError::InvalidInput` when the profile fails validation.
    pub fn recognize(
        &self,
        profile: &UserProfile,
        logs: &[DailyLogEntry],
    ) -> AppResult<PatternOutcome> {
        profile.validate()?;
        let cfg = &self.config.patterns;

        let mut distinct_days: Vec<_> = logs.iter().map(|entry| entry.date).collect();
        distinct_days.sort_unstable();
        distinct_days.dedup();

        if distinct_days.len() < cfg.min_history_days {
            return Ok(PatternOutcome::InsufficientData {
                required: cfg.min_history_days,
                actual: distinct_days.len(),
            });
        }

        let scores: Vec<f64> = logs.iter().map(|entry| entry.score).collect();
        let overall_mean = mean(&scores);

        let mut patterns = Vec::new();
        if let Some(pattern) = self.weekday_pattern(logs, overall_mean, cfg) {
            patterns.push(pattern);
        }
        if let Some(pattern) = self.time_of_day_pattern(logs, overall_mean, cfg) {
            patterns.push(pattern);
        }
        if let Some(pattern) = self.lunar_pattern(logs, overall_mean, cfg) {
            patterns.push(pattern);
        }

        tracing::debug!(
            user_id = %profile.id,
            history_days = distinct_days.len(),
            patterns = patterns.len(),
            "pattern recognition pass complete"
        );

        Ok(PatternOutcome::Patterns { patterns })
    }

    fn weekday_pattern(
        &self,
        logs: &[DailyLogEntry],
        overall_mean: f64,
        cfg: &PatternConfig,
    ) -> Option<RecognizedPattern> {
        let mut buckets: HashMap<Weekday, Vec<f64>> = HashMap::new();
        for entry in logs {
            buckets
                .entry(entry.date.weekday())
                .or_default()
                .push(entry.score);
        }

        let (weekday, bucket_mean, samples) =
            best_bucket(buckets.into_iter(), cfg.weekday_min_samples)?;
        let name = weekday_name(weekday);

        Some(self.build_pattern(
            PatternKind::DayOfWeek,
            format!("Best day: {name}"),
            format!(
                "{name}s average {bucket_mean:.0} energy against your overall {overall_mean:.0}"
            ),
            format!("Schedule important work on {name}s"),
            bucket_mean,
            overall_mean,
            samples,
            cfg.weekday_confidence,
        ))
    }

    fn time_of_day_pattern(
        &self,
        logs: &[DailyLogEntry],
        overall_mean: f64,
        cfg: &PatternConfig,
    ) -> Option<RecognizedPattern> {
        let mut buckets: HashMap<TimeOfDayBand, Vec<f64>> = HashMap::new();
        for entry in logs {
            let Some(band) = entry.recorded_hour.and_then(TimeOfDayBand::from_hour) else {
                continue;
            };
            buckets.entry(band).or_default().push(entry.score);
        }

        let (band, bucket_mean, samples) =
            best_bucket(buckets.into_iter(), cfg.time_of_day_min_samples)?;
        let name = band.label();

        Some(self.build_pattern(
            PatternKind::TimeOfDay,
            format!("Peak window: {name}"),
            format!(
                "Entries logged in the {name} average {bucket_mean:.0} against your overall {overall_mean:.0}"
            ),
            format!("Protect your {name}s for focused, demanding work"),
            bucket_mean,
            overall_mean,
            samples,
            cfg.time_of_day_confidence,
        ))
    }

    fn lunar_pattern(
        &self,
        logs: &[DailyLogEntry],
        overall_mean: f64,
        cfg: &PatternConfig,
    ) -> Option<RecognizedPattern> {
        let mut buckets: HashMap<LunarPhase, Vec<f64>> = HashMap::new();
        for entry in logs {
            let (phase, _) = lunar_phase_on(entry.date);
            buckets.entry(phase).or_default().push(entry.score);
        }

        let (phase, bucket_mean, samples) =
            best_bucket(buckets.into_iter(), cfg.lunar_min_samples)?;
        let name = phase.label();

        Some(self.build_pattern(
            PatternKind::LunarPhase,
            format!("Strongest phase: {name}"),
            format!(
                "Days under the {name} average {bucket_mean:.0} against your overall {overall_mean:.0}"
            ),
            format!("Align major initiatives with the {name}"),
            bucket_mean,
            overall_mean,
            samples,
            cfg.lunar_confidence,
        ))
    }

    #[allow(clippy::too_many_arguments)] // Internal assembly helper; fields map 1:1 onto the pattern
    fn build_pattern(
        &self,
        kind: PatternKind,
        title: String,
        description: String,
        recommendation: String,
        bucket_mean: f64,
        overall_mean: f64,
        samples: usize,
        rule: ConfidenceRule,
    ) -> RecognizedPattern {
        let lift = bucket_mean - overall_mean;
        let impact = if lift > self.config.patterns.high_impact_lift {
            PatternImpact::High
        } else if lift > self.config.patterns.medium_impact_lift {
            PatternImpact::Medium
        } else {
            PatternImpact::Low
        };

        RecognizedPattern {
            kind,
            title,
            description,
            confidence: rule.confidence(samples),
            sample_count: samples,
            impact,
            recommendation,
        }
    }
}

/// Convert computed daily records into log entries for mining
///
/// The composite connection score becomes the 0-100 log score. Callers that
/// captured real entry hours should prefer their own logs; this helper is for
/// re-running recognition over synthesized history.
#[must_use]
pub fn log_entries_from_records(
    records: &[DailyEnergyRecord],
    recorded_hour: Option<u32>,
) -> Vec<DailyLogEntry> {
    records
        .iter()
        .map(|record| DailyLogEntry {
            date: record.date,
            recorded_hour,
            score: record.connection.score * 100.0,
        })
        .collect()
}

/// Arg-max mean bucket at or above the minimum sample gate
fn best_bucket<K>(
    buckets: impl Iterator<Item = (K, Vec<f64>)>,
    min_samples: usize,
) -> Option<(K, f64, usize)> {
    buckets
        .filter(|(_, scores)| scores.len() >= min_samples)
        .map(|(key, scores)| {
            let bucket_mean = mean(&scores);
            (key, bucket_mean, scores.len())
        })
        .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

const fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}
