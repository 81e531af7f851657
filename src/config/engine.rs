// ABOUTME: Configuration-driven constants for energy scoring and analytics replacing magic numbers
// ABOUTME: Provides type-safe, environment-configurable parameters for every tuned threshold
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Attune Intelligence

use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// Alignment scoring parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlignmentConfig {
    /// Base score before factor contributions
    pub base_score: f64,

    /// Weight applied to the five-element interaction value
    pub interaction_weight: f64,

    /// Divisor normalizing the (100 - intensity gap) term
    pub gap_normalizer: f64,

    /// Scores above this bucket as a strong alignment
    pub strong_threshold: f64,

    /// Scores above this (and at or below strong) bucket as moderate
    pub moderate_threshold: f64,
}

/// Intensity bands that drive display colors
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntensityBands {
    /// Intensities above this render in the strong color
    pub strong_floor: u8,

    /// Intensities above this (and at or below strong) render in the mid color
    pub mid_floor: u8,
}

/// Energy synthesis parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SynthesisConfig {
    /// Static per-weekday base fortune, Monday first, each in [0, 1]
    pub weekday_fortunes: [f64; 7],
}

/// Time-of-day energy bands for one constitutional type
///
/// Hours are half-open: a window covers `start <= hour < end`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnergyBands {
    /// Peak window start hour
    pub peak_start: u32,
    /// Peak window end hour
    pub peak_end: u32,
    /// Energy level inside the peak window
    pub peak_level: f64,
    /// Shoulder window start hour
    pub shoulder_start: u32,
    /// Shoulder window end hour
    pub shoulder_end: u32,
    /// Energy level inside the shoulder window
    pub shoulder_level: f64,
    /// Energy level everywhere else
    pub baseline_level: f64,
}

/// Constitutional-type model parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConstitutionConfig {
    /// Bands for the airy type (born November through February)
    pub vata: EnergyBands,

    /// Bands for the fiery type (born July through October)
    pub pitta: EnergyBands,

    /// Bands for the steady type (born March through June)
    pub kapha: EnergyBands,

    /// Added to values above the amplification pivot during the native season
    pub amplification_boost: f64,

    /// Subtracted from values at or below the pivot during the native season
    pub amplification_damp: f64,

    /// Values above this get boosted under seasonal amplification
    pub amplification_pivot: f64,

    /// Dampened values never drop below this
    pub amplification_floor: f64,

    /// Dosha balance used for every non-special (type, lunar phase) pair
    pub default_dosha_balance: f64,

    /// Dosha balance for the airy type at the new and full moons
    pub boosted_dosha_balance: f64,
}

/// Correlation engine parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorrelationConfig {
    /// Absolute coefficient at or above this is a strong correlation
    pub strong_threshold: f64,

    /// Absolute coefficient at or above this is moderate
    pub moderate_threshold: f64,

    /// Absolute coefficient at or above this is weak; below is none
    pub weak_threshold: f64,

    /// Minimum paired points for sleep and weather correlation
    pub min_paired_samples: usize,

    /// Minimum per-habit logs inside the habit window
    pub min_habit_logs: usize,

    /// Habit correlation lookback window (days)
    pub habit_window_days: i64,
}

/// Forecast engine parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastConfig {
    /// Baseline score when no history is available
    pub default_baseline: f64,

    /// Trailing window feeding the baseline average (days)
    pub baseline_window_days: i64,

    /// Peak magnitude of the lunar additive curve (score points)
    pub lunar_amplitude: f64,

    /// Fixed additive offset per weekday, Monday first (score points)
    pub weekday_offsets: [f64; 7],

    /// Weight on the day-of-week historical deviation from baseline
    pub weekday_history_weight: f64,

    /// Confidence every forecast day starts from
    pub base_confidence: f64,

    /// Confidence gained when weekday history backs the prediction
    pub confidence_increment: f64,

    /// Confidence never exceeds this
    pub confidence_cap: f64,

    /// Weight on the sleep-quality impact term
    pub sleep_weight: f64,

    /// Sleep quality treated as neutral (no contribution)
    pub sleep_neutral_quality: f64,

    /// Divisor converting quality deviation into score points
    pub sleep_impact_divisor: f64,

    /// Weight on the habit-completion impact term
    pub habit_weight: f64,

    /// Assumed habit completion rate for the fixed scenario
    pub habit_completion_scenario: f64,

    /// Completion rate treated as neutral
    pub habit_midpoint: f64,

    /// Score points per unit of completion-rate deviation
    pub habit_scale: f64,

    /// Mean shift separating improving/declining from stable (score points)
    pub trend_delta: f64,

    /// Longest supported forecast horizon (days)
    pub max_horizon_days: u32,

    /// Upper bound on ranked recommendations per forecast
    pub max_recommendations: usize,

    /// Predicted scores above this read as a high-energy day
    pub high_energy_score: f64,

    /// Predicted scores below this read as a low-energy day
    pub low_energy_score: f64,
}

/// Confidence accounting for one pattern dimension
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ConfidenceRule {
    /// Confidence before sample accounting
    pub base: f64,
    /// Confidence added per sample in the winning bucket
    pub increment: f64,
    /// Confidence never exceeds this
    pub cap: f64,
}

impl ConfidenceRule {
    /// Confidence for a bucket with `samples` entries
    #[must_use]
    pub fn confidence(&self, samples: usize) -> f64 {
        self.increment
            .mul_add(samples as f64, self.base)
            .min(self.cap)
    }
}

/// Pattern recognition parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatternConfig {
    /// Distinct history days required before any mining happens
    pub min_history_days: usize,

    /// Minimum samples in the winning weekday bucket
    pub weekday_min_samples: usize,

    /// Minimum samples in the winning time-of-day bucket
    pub time_of_day_min_samples: usize,

    /// Minimum samples in the winning lunar-phase bucket
    pub lunar_min_samples: usize,

    /// Confidence accounting for weekday patterns
    pub weekday_confidence: ConfidenceRule,

    /// Confidence accounting for time-of-day patterns
    pub time_of_day_confidence: ConfidenceRule,

    /// Confidence accounting for lunar-phase patterns
    pub lunar_confidence: ConfidenceRule,

    /// Bucket lift over the overall mean marking a high-impact pattern
    pub high_impact_lift: f64,

    /// Bucket lift over the overall mean marking a medium-impact pattern
    pub medium_impact_lift: f64,
}

/// Main engine configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Alignment scoring parameters
    pub alignment: AlignmentConfig,
    /// Display color bands
    pub intensity: IntensityBands,
    /// Energy synthesis parameters
    pub synthesis: SynthesisConfig,
    /// Constitutional-type model parameters
    pub constitution: ConstitutionConfig,
    /// Correlation engine parameters
    pub correlation: CorrelationConfig,
    /// Forecast engine parameters
    pub forecast: ForecastConfig,
    /// Pattern recognition parameters
    pub patterns: PatternConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            alignment: AlignmentConfig {
                base_score: 0.5,
                interaction_weight: 0.3,
                gap_normalizer: 200.0,
                strong_threshold: 0.7,
                moderate_threshold: 0.4,
            },
            intensity: IntensityBands {
                strong_floor: 70,
                mid_floor: 40,
            },
            synthesis: SynthesisConfig {
                weekday_fortunes: [0.55, 0.65, 0.70, 0.75, 0.80, 0.85, 0.60],
            },
            constitution: ConstitutionConfig {
                vata: EnergyBands {
                    peak_start: 6,
                    peak_end: 9,
                    peak_level: 88.0,
                    shoulder_start: 15,
                    shoulder_end: 18,
                    shoulder_level: 65.0,
                    baseline_level: 55.0,
                },
                pitta: EnergyBands {
                    peak_start: 10,
                    peak_end: 14,
                    peak_level: 92.0,
                    shoulder_start: 16,
                    shoulder_end: 19,
                    shoulder_level: 70.0,
                    baseline_level: 60.0,
                },
                kapha: EnergyBands {
                    peak_start: 17,
                    peak_end: 21,
                    peak_level: 86.0,
                    shoulder_start: 7,
                    shoulder_end: 10,
                    shoulder_level: 62.0,
                    baseline_level: 58.0,
                },
                amplification_boost: 5.0,
                amplification_damp: 5.0,
                amplification_pivot: 80.0,
                amplification_floor: 50.0,
                default_dosha_balance: 0.75,
                boosted_dosha_balance: 0.9,
            },
            correlation: CorrelationConfig {
                strong_threshold: 0.7,
                moderate_threshold: 0.4,
                weak_threshold: 0.2,
                min_paired_samples: 5,
                min_habit_logs: 3,
                habit_window_days: 30,
            },
            forecast: ForecastConfig {
                default_baseline: 50.0,
                baseline_window_days: 30,
                lunar_amplitude: 8.0,
                weekday_offsets: [-3.0, 0.0, 2.0, 1.0, 3.0, 4.0, -1.0],
                weekday_history_weight: 0.3,
                base_confidence: 70.0,
                confidence_increment: 5.0,
                confidence_cap: 95.0,
                sleep_weight: 0.4,
                sleep_neutral_quality: 70.0,
                sleep_impact_divisor: 2.0,
                habit_weight: 0.2,
                habit_completion_scenario: 0.7,
                habit_midpoint: 0.5,
                habit_scale: 20.0,
                trend_delta: 5.0,
                max_horizon_days: 90,
                max_recommendations: 4,
                high_energy_score: 70.0,
                low_energy_score: 40.0,
            },
            patterns: PatternConfig {
                min_history_days: 14,
                weekday_min_samples: 3,
                time_of_day_min_samples: 5,
                lunar_min_samples: 2,
                weekday_confidence: ConfidenceRule {
                    base: 60.0,
                    increment: 5.0,
                    cap: 95.0,
                },
                time_of_day_confidence: ConfidenceRule {
                    base: 55.0,
                    increment: 4.0,
                    cap: 90.0,
                },
                lunar_confidence: ConfidenceRule {
                    base: 50.0,
                    increment: 5.0,
                    cap: 85.0,
                },
                high_impact_lift: 15.0,
                medium_impact_lift: 7.0,
            },
        }
    }
}

impl EngineConfig {
    /// Load configuration from environment variables with fallback to defaults
    ///
    /// # Errors
    /// Returns `AppError::Config` if an override variable holds an unparsable
    /// value or the resulting configuration fails validation.
    pub fn from_environment() -> AppResult<Self> {
        let mut config = Self::default();

        if let Ok(val) = std::env::var("ATTUNE_STRONG_ALIGNMENT_THRESHOLD") {
            config.alignment.strong_threshold = parse_var("ATTUNE_STRONG_ALIGNMENT_THRESHOLD", &val)?;
        }

        if let Ok(val) = std::env::var("ATTUNE_MODERATE_ALIGNMENT_THRESHOLD") {
            config.alignment.moderate_threshold =
                parse_var("ATTUNE_MODERATE_ALIGNMENT_THRESHOLD", &val)?;
        }

        if let Ok(val) = std::env::var("ATTUNE_LUNAR_AMPLITUDE") {
            config.forecast.lunar_amplitude = parse_var("ATTUNE_LUNAR_AMPLITUDE", &val)?;
        }

        if let Ok(val) = std::env::var("ATTUNE_FORECAST_CONFIDENCE_CAP") {
            config.forecast.confidence_cap = parse_var("ATTUNE_FORECAST_CONFIDENCE_CAP", &val)?;
        }

        if let Ok(val) = std::env::var("ATTUNE_MAX_FORECAST_DAYS") {
            config.forecast.max_horizon_days = val.parse().map_err(|_| {
                AppError::config("ATTUNE_MAX_FORECAST_DAYS must be a positive integer")
            })?;
        }

        if let Ok(val) = std::env::var("ATTUNE_MIN_PATTERN_HISTORY_DAYS") {
            config.patterns.min_history_days = val.parse().map_err(|_| {
                AppError::config("ATTUNE_MIN_PATTERN_HISTORY_DAYS must be a positive integer")
            })?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    ///
    /// # Errors
    /// Returns `AppError::Config` naming the first invalid field.
    pub fn validate(&self) -> AppResult<()> {
        if !(0.0..=1.0).contains(&self.alignment.strong_threshold) {
            return Err(AppError::config("strong_threshold must be between 0 and 1"));
        }

        if !(0.0..=1.0).contains(&self.alignment.moderate_threshold) {
            return Err(AppError::config(
                "moderate_threshold must be between 0 and 1",
            ));
        }

        if self.alignment.strong_threshold < self.alignment.moderate_threshold {
            return Err(AppError::config(
                "strong_threshold must be >= moderate_threshold",
            ));
        }

        if self.alignment.gap_normalizer <= 0.0 {
            return Err(AppError::config("gap_normalizer must be > 0"));
        }

        if self.intensity.strong_floor <= self.intensity.mid_floor {
            return Err(AppError::config("strong_floor must be > mid_floor"));
        }

        for fortune in &self.synthesis.weekday_fortunes {
            if !(0.0..=1.0).contains(fortune) {
                return Err(AppError::config(
                    "weekday fortunes must all be between 0 and 1",
                ));
            }
        }

        for balance in [
            self.constitution.default_dosha_balance,
            self.constitution.boosted_dosha_balance,
        ] {
            if !(0.0..=1.0).contains(&balance) {
                return Err(AppError::config("dosha balances must be between 0 and 1"));
            }
        }

        let thresholds = &self.correlation;
        if thresholds.strong_threshold < thresholds.moderate_threshold
            || thresholds.moderate_threshold < thresholds.weak_threshold
        {
            return Err(AppError::config(
                "correlation thresholds must be ordered strong >= moderate >= weak",
            ));
        }

        if !(0.0..=100.0).contains(&self.forecast.confidence_cap) {
            return Err(AppError::config(
                "confidence_cap must be between 0 and 100",
            ));
        }

        if self.forecast.base_confidence > self.forecast.confidence_cap {
            return Err(AppError::config(
                "base_confidence must not exceed confidence_cap",
            ));
        }

        if self.forecast.max_horizon_days == 0 {
            return Err(AppError::config("max_horizon_days must be > 0"));
        }

        if self.patterns.min_history_days == 0 {
            return Err(AppError::config("min_history_days must be > 0"));
        }

        for rule in [
            self.patterns.weekday_confidence,
            self.patterns.time_of_day_confidence,
            self.patterns.lunar_confidence,
        ] {
            if rule.base > rule.cap {
                return Err(AppError::config(
                    "pattern confidence base must not exceed its cap",
                ));
            }
            if !(0.0..=100.0).contains(&rule.cap) {
                return Err(AppError::config(
                    "pattern confidence caps must be between 0 and 100",
                ));
            }
        }

        if self.patterns.high_impact_lift < self.patterns.medium_impact_lift {
            return Err(AppError::config(
                "high_impact_lift must be >= medium_impact_lift",
            ));
        }

        Ok(())
    }
}

fn parse_var(name: &str, raw: &str) -> AppResult<f64> {
    raw.parse()
        .map_err(|_| AppError::config(format!("{name} must be a number, got '{raw}'")))
}
