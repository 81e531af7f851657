// ABOUTME: Shared data models for profiles, readings, and collaborator-supplied histories
// ABOUTME: UserProfile, TimeSeriesPoint, and the sleep/weather/habit/log record shapes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Attune Intelligence

use crate::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Geographic birth location
///
/// Accepted and stored for forward compatibility. No scoring formula
/// currently consumes it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BirthPlace {
    /// City name
    pub city: String,
    /// Country name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// Latitude in degrees
    pub latitude: f64,
    /// Longitude in degrees
    pub longitude: f64,
}

/// A user profile, immutable once computed against
///
/// # Examples
///
/// ```rust
/// use attune_engine::models::UserProfile;
/// use chrono::NaiveDate;
///
/// let dob = NaiveDate::from_ymd_opt(1990, 6, 15).unwrap();
/// let profile = UserProfile::new("Maya", dob);
/// assert!(profile.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Stable identifier, used by callers for memoization keys
    pub id: Uuid,
    /// Display name (never consumed by any formula)
    pub name: String,
    /// Date of birth, required by every user-side computation
    pub date_of_birth: NaiveDate,
    /// Birth location, accepted but currently unused
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_place: Option<BirthPlace>,
}

impl UserProfile {
    /// Create a profile with a freshly generated identifier
    #[must_use]
    pub fn new(name: impl Into<String>, date_of_birth: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            date_of_birth,
            birth_place: None,
        }
    }

    /// Attach a birth location
    #[must_use]
    pub fn with_birth_place(mut self, birth_place: BirthPlace) -> Self {
        self.birth_place = Some(birth_place);
        self
    }

    /// Check the profile can be scored against
    ///
    /// # Errors
    /// Returns `AppError::InvalidInput` for a pre-common-era date of birth,
    /// which the numerology reductions do not define.
    pub fn validate(&self) -> AppResult<()> {
        if self.date_of_birth.year() < 1 {
            return Err(AppError::invalid_input(format!(
                "date of birth year {} precedes the supported calendar range",
                self.date_of_birth.year()
            )));
        }
        Ok(())
    }
}

/// A single (date, value) sample, the shape of every externally supplied series
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeSeriesPoint {
    /// Sample date
    pub date: NaiveDate,
    /// Scalar value (hours slept, degrees, completion count, energy score)
    pub value: f64,
}

impl TimeSeriesPoint {
    /// Convenience constructor
    #[must_use]
    pub const fn new(date: NaiveDate, value: f64) -> Self {
        Self { date, value }
    }
}

/// One night of sleep as supplied by an external tracker
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SleepSession {
    /// Date the sleep session ended (the morning date)
    pub date: NaiveDate,
    /// Total sleep duration (hours)
    pub duration_hours: f64,
    /// Tracker quality score (0-100) when available
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quality: Option<f64>,
    /// Self-reported energy on the following day (0-100), when logged
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_day_energy: Option<f64>,
}

/// One weather observation as supplied by an external weather collaborator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSample {
    /// Observation date
    pub date: NaiveDate,
    /// Air temperature (degrees Celsius)
    pub temperature_c: f64,
    /// Relative humidity (percent)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub humidity_percent: Option<f64>,
    /// Barometric pressure (hPa)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pressure_hpa: Option<f64>,
    /// Free-text condition label ("clear", "rain")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
    /// Self-reported energy for the day (0-100), when logged
    #[serde(skip_serializing_if = "Option::is_none")]
    pub energy: Option<f64>,
}

/// One habit completion log entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HabitLog {
    /// Habit name, the correlation grouping key
    pub habit: String,
    /// Log date
    pub date: NaiveDate,
    /// Whether the habit was completed that day
    pub completed: bool,
}

/// One historical daily energy log entry
///
/// `recorded_hour` is the local hour the entry was captured at and drives the
/// time-of-day pattern dimension. Entries without an hour (or captured
/// overnight) are skipped by that dimension only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyLogEntry {
    /// Log date
    pub date: NaiveDate,
    /// Hour of day the entry was captured (0-23), when known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recorded_hour: Option<u32>,
    /// Composite daily energy score (0-100)
    pub score: f64,
}
