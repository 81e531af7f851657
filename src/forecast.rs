// ABOUTME: N-day energy forecasting from a trailing baseline plus weighted factor terms
// ABOUTME: Lunar curve, weekday offsets, history deviation, sleep and habit impacts, bounded confidence
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Attune Intelligence

//! # Forecast Engine
//!
//! Each forecast day starts from a 30-day trailing average baseline (50 with
//! no history) and accumulates additive factor terms in a fixed order. The
//! running score is clamped to [0, 100] and the confidence never exceeds its
//! configured cap. Factor weights are tuning, not law; they live in
//! [`crate::config::ForecastConfig`].

use crate::astronomy::{self, LunarPhase};
use crate::config::EngineConfig;
use crate::errors::{AppError, AppResult};
use crate::models::{TimeSeriesPoint, UserProfile};
use chrono::{Datelike, Duration, NaiveDate, NaiveTime, Weekday};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Window used for per-day trend comparison (days)
const TREND_LAG_WINDOW: usize = 3;

/// Trend direction over a forecast window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    /// Scores are rising
    Improving,
    /// Scores are falling
    Declining,
    /// No meaningful movement
    Stable,
}

/// One named additive term inside a forecast day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactorContribution {
    /// Factor name
    pub name: String,
    /// Signed, weighted contribution in score points
    pub contribution: f64,
    /// Human-readable description of the term
    pub description: String,
}

/// Prediction for a single future day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastDay {
    /// Forecast date
    pub date: NaiveDate,
    /// Predicted energy score (0-100)
    pub predicted_score: f64,
    /// Prediction confidence, capped by configuration
    pub confidence: f64,
    /// Contributing factors in application order
    pub factors: Vec<FactorContribution>,
    /// Movement relative to the previous three forecast days
    pub trend: TrendDirection,
}

/// A full multi-day forecast with window-level summaries
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnergyForecast {
    /// Per-day predictions in date order
    pub days: Vec<ForecastDay>,
    /// Window trend from the first three days to the last three
    pub overall_trend: TrendDirection,
    /// Date with the highest predicted score
    pub best_day: NaiveDate,
    /// Date with the lowest predicted score
    pub worst_day: NaiveDate,
    /// Ranked recommendations, bounded by configuration
    pub recommendations: Vec<String>,
}

/// Inputs to a forecast run
///
/// `history` carries composite daily scores; `recent_sleep_quality` is the
/// caller's recent average tracker quality (0-100) when sleep data exists.
#[derive(Debug, Clone)]
pub struct ForecastRequest<'a> {
    /// First forecast date
    pub from: NaiveDate,
    /// Number of days to predict, starting at `from`
    pub days_ahead: u32,
    /// Historical daily energy scores
    pub history: &'a [TimeSeriesPoint],
    /// Recent average sleep quality (0-100), when available
    pub recent_sleep_quality: Option<f64>,
}

/// Forecast computation service
pub struct ForecastEngine {
    config: EngineConfig,
}

impl Default for ForecastEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl ForecastEngine {
    /// Create an engine with the given configuration
    #[must_use]
    pub const fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Predict the next `days_ahead` daily scores for a profile
    ///
    /// # Errors
    /// Returns `AppError::InvalidInput` for a zero-day window or an invalid
    /// profile, and `AppError::ValueOutOfRange` when the window exceeds the
    /// configured maximum horizon.
    pub fn forecast(
        &self,
        profile: &UserProfile,
        request: &ForecastRequest<'_>,
    ) -> AppResult<EnergyForecast> {
        profile.validate()?;

        if request.days_ahead == 0 {
            return Err(AppError::invalid_input("forecast window must cover at least one day"));
        }
        if request.days_ahead > self.config.forecast.max_horizon_days {
            return Err(AppError::value_out_of_range(format!(
                "forecast window of {} days exceeds the {}-day maximum",
                request.days_ahead, self.config.forecast.max_horizon_days
            )));
        }

        let baseline = self.baseline(request.history, request.from);
        let weekday_deviations = self.weekday_deviations(request.history, baseline);

        let mut days: Vec<ForecastDay> = Vec::with_capacity(request.days_ahead as usize);
        for offset in 0..i64::from(request.days_ahead) {
            let date = request.from + Duration::days(offset);
            let day = self.forecast_day(
                date,
                baseline,
                &weekday_deviations,
                request.recent_sleep_quality,
                &days,
            );
            days.push(day);
        }

        let overall_trend = self.window_trend(&days);
        let (best_day, worst_day) = extreme_days(&days);
        let recommendations = self.recommendations(&days, best_day, worst_day);

        tracing::info!(
            user_id = %profile.id,
            from = %request.from,
            days = days.len(),
            trend = ?overall_trend,
            "generated energy forecast"
        );

        Ok(EnergyForecast {
            days,
            overall_trend,
            best_day,
            worst_day,
            recommendations,
        })
    }

    /// Trailing-average baseline, or the configured default with no history
    fn baseline(&self, history: &[TimeSeriesPoint], from: NaiveDate) -> f64 {
        let window_start = from - Duration::days(self.config.forecast.baseline_window_days);
        let recent: Vec<f64> = history
            .iter()
            .filter(|p| p.date < from && p.date >= window_start)
            .map(|p| p.value)
            .collect();

        if recent.is_empty() {
            self.config.forecast.default_baseline
        } else {
            mean(&recent)
        }
    }

    /// Mean deviation from baseline per weekday, for weekdays with history
    fn weekday_deviations(
        &self,
        history: &[TimeSeriesPoint],
        baseline: f64,
    ) -> HashMap<Weekday, f64> {
        let mut by_weekday: HashMap<Weekday, Vec<f64>> = HashMap::new();
        for point in history {
            by_weekday
                .entry(point.date.weekday())
                .or_default()
                .push(point.value);
        }

        by_weekday
            .into_iter()
            .map(|(weekday, values)| (weekday, mean(&values) - baseline))
            .collect()
    }

    fn forecast_day(
        &self,
        date: NaiveDate,
        baseline: f64,
        weekday_deviations: &HashMap<Weekday, f64>,
        recent_sleep_quality: Option<f64>,
        prior_days: &[ForecastDay],
    ) -> ForecastDay {
        let cfg = &self.config.forecast;
        let mut score = baseline;
        let mut confidence = cfg.base_confidence;
        let mut factors = Vec::with_capacity(6);

        // (a) lunar cycle
        let fraction = astronomy::phase_fraction(date, NaiveTime::MIN);
        let lunar = lunar_curve(fraction, cfg.lunar_amplitude);
        score += lunar;
        factors.push(FactorContribution {
            name: "lunar_cycle".to_owned(),
            contribution: lunar,
            description: format!(
                "{} leg of the lunar cycle",
                LunarPhase::from_fraction(fraction).label()
            ),
        });

        // (b) fixed weekday offset
        let weekday = date.weekday();
        let offset = cfg.weekday_offsets[weekday.num_days_from_monday() as usize];
        score += offset;
        factors.push(FactorContribution {
            name: "weekday_rhythm".to_owned(),
            contribution: offset,
            description: format!("typical {} rhythm", weekday_name(weekday)),
        });

        // (c) historical weekday deviation, only when that weekday has history
        if let Some(deviation) = weekday_deviations.get(&weekday) {
            let contribution = deviation * cfg.weekday_history_weight;
            score += contribution;
            confidence += cfg.confidence_increment;
            factors.push(FactorContribution {
                name: "weekday_history".to_owned(),
                contribution,
                description: format!(
                    "your past {}s ran {:+.1} points from baseline",
                    weekday_name(weekday),
                    deviation
                ),
            });
        }

        // (d) sleep quality impact, neutral when no sleep data exists
        let sleep_contribution = recent_sleep_quality.map_or(0.0, |quality| {
            (quality - cfg.sleep_neutral_quality) / cfg.sleep_impact_divisor * cfg.sleep_weight
        });
        score += sleep_contribution;
        factors.push(FactorContribution {
            name: "sleep_quality".to_owned(),
            contribution: sleep_contribution,
            description: recent_sleep_quality.map_or_else(
                || "no recent sleep data; neutral".to_owned(),
                |quality| format!("recent sleep quality averaging {quality:.0}"),
            ),
        });

        // (e) habit momentum under the fixed completion scenario
        let habit_raw = (cfg.habit_completion_scenario - cfg.habit_midpoint) * cfg.habit_scale;
        let habit_contribution = habit_raw * cfg.habit_weight;
        score += habit_contribution;
        factors.push(FactorContribution {
            name: "habit_momentum".to_owned(),
            contribution: habit_contribution,
            description: format!(
                "assuming {:.0}% habit completion",
                cfg.habit_completion_scenario * 100.0
            ),
        });

        // (f) weather stays neutral until a historical correlation is wired in
        factors.push(FactorContribution {
            name: "weather".to_owned(),
            contribution: 0.0,
            description: "no weather signal wired in; neutral".to_owned(),
        });

        let predicted_score = score.clamp(0.0, 100.0);
        let confidence = confidence.min(cfg.confidence_cap);

        let lag: Vec<f64> = prior_days
            .iter()
            .rev()
            .take(TREND_LAG_WINDOW)
            .map(|d| d.predicted_score)
            .collect();
        let lag_mean = if lag.is_empty() { baseline } else { mean(&lag) };
        let trend = self.classify_trend(predicted_score - lag_mean);

        ForecastDay {
            date,
            predicted_score,
            confidence,
            factors,
            trend,
        }
    }

    /// Window trend: mean of the first three days against the last three
    fn window_trend(&self, days: &[ForecastDay]) -> TrendDirection {
        let take = TREND_LAG_WINDOW.min(days.len());
        if take == 0 {
            return TrendDirection::Stable;
        }

        let first: Vec<f64> = days.iter().take(take).map(|d| d.predicted_score).collect();
        let last: Vec<f64> = days
            .iter()
            .rev()
            .take(take)
            .map(|d| d.predicted_score)
            .collect();

        self.classify_trend(mean(&last) - mean(&first))
    }

    fn classify_trend(&self, delta: f64) -> TrendDirection {
        let threshold = self.config.forecast.trend_delta;
        if delta > threshold {
            TrendDirection::Improving
        } else if delta < -threshold {
            TrendDirection::Declining
        } else {
            TrendDirection::Stable
        }
    }

    /// Ranked recommendations: score-band advice first, weekday specials after
    fn recommendations(
        &self,
        days: &[ForecastDay],
        best_day: NaiveDate,
        worst_day: NaiveDate,
    ) -> Vec<String> {
        let cfg = &self.config.forecast;
        let mut recommendations = Vec::new();

        let best_score = score_on(days, best_day);
        let worst_score = score_on(days, worst_day);

        if best_score > cfg.high_energy_score {
            recommendations.push(format!(
                "High energy peaks on {} ({best_day}); schedule demanding work there",
                weekday_name(best_day.weekday())
            ));
        }
        if worst_score < cfg.low_energy_score {
            recommendations.push(format!(
                "Energy dips on {} ({worst_day}); keep that day light",
                weekday_name(worst_day.weekday())
            ));
        }
        if recommendations.is_empty() {
            recommendations
                .push("Energy holds a moderate band; steady routines serve best".to_owned());
        }

        if days.iter().any(|d| d.date.weekday() == Weekday::Mon) {
            recommendations.push("Ease into Monday before taking on the heavy lifting".to_owned());
        }
        if days.iter().any(|d| d.date.weekday() == Weekday::Fri) {
            recommendations.push("Close out open loops on Friday while momentum lasts".to_owned());
        }
        if days
            .iter()
            .any(|d| matches!(d.date.weekday(), Weekday::Sat | Weekday::Sun))
        {
            recommendations.push("Reserve part of the weekend for genuine recovery".to_owned());
        }

        recommendations.truncate(cfg.max_recommendations);
        recommendations
    }
}

/// Four-segment piecewise-linear lunar additive curve
///
/// Rising through the waxing half, a peak plateau around the full moon
/// build-up, a falling leg, then a trough through the waning tail.
fn lunar_curve(fraction: f64, amplitude: f64) -> f64 {
    let f = fraction.rem_euclid(1.0);
    if f < 0.25 {
        amplitude * (f / 0.25)
    } else if f < 0.5 {
        amplitude
    } else if f < 0.75 {
        amplitude * (f - 0.5).mul_add(-8.0, 1.0)
    } else {
        -amplitude
    }
}

fn extreme_days(days: &[ForecastDay]) -> (NaiveDate, NaiveDate) {
    let mut best = &days[0];
    let mut worst = &days[0];
    for day in days {
        if day.predicted_score > best.predicted_score {
            best = day;
        }
        if day.predicted_score < worst.predicted_score {
            worst = day;
        }
    }
    (best.date, worst.date)
}

fn score_on(days: &[ForecastDay], date: NaiveDate) -> f64 {
    days.iter()
        .find(|d| d.date == date)
        .map_or(0.0, |d| d.predicted_score)
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
