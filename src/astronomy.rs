// ABOUTME: Julian Day Number and lunar phase computation from civil calendar dates
// ABOUTME: Single canonical Julian-Day formulation; phase fraction folded into 8 named buckets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Attune Intelligence

//! Calendar and lunar astronomy.
//!
//! The phase math is a deliberate approximation: elapsed days since a fixed
//! reference new moon, divided by the mean synodic month. Good to a few hours
//! around bucket boundaries, which is all the scoring layers need.

use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

/// Mean length of the synodic month (days between successive new moons)
pub const SYNODIC_MONTH_DAYS: f64 = 29.530_588_67;

/// Julian day of the reference new moon (2000-01-06)
pub const REFERENCE_NEW_MOON_JD: f64 = 2_451_550.1;

/// Width of one lunar phase bucket as a fraction of the cycle
const PHASE_BUCKET_WIDTH: f64 = 1.0 / 8.0;

/// The eight named lunar phases
///
/// Buckets are contiguous and total over [0, 1): each is 1/8 wide and
/// centered on k/8, so the new-moon bucket covers fractions below 1/16
/// together with fractions at or above 15/16.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LunarPhase {
    /// Cycle start, fraction near 0.0
    NewMoon,
    /// Fraction near 1/8
    WaxingCrescent,
    /// Fraction near 1/4
    FirstQuarter,
    /// Fraction near 3/8
    WaxingGibbous,
    /// Fraction near 1/2
    FullMoon,
    /// Fraction near 5/8
    WaningGibbous,
    /// Fraction near 3/4
    LastQuarter,
    /// Fraction near 7/8
    WaningCrescent,
}

impl LunarPhase {
    /// All phases in cycle order
    pub const ALL: [Self; 8] = [
        Self::NewMoon,
        Self::WaxingCrescent,
        Self::FirstQuarter,
        Self::WaxingGibbous,
        Self::FullMoon,
        Self::WaningGibbous,
        Self::LastQuarter,
        Self::WaningCrescent,
    ];

    /// Classify a phase fraction into its bucket
    ///
    /// Fractions outside [0, 1) are folded back into the cycle first, so the
    /// mapping is total over every finite input.
    #[must_use]
    pub fn from_fraction(fraction: f64) -> Self {
        let folded = fraction.rem_euclid(1.0);
        // Shift by half a bucket so each bucket is centered on k/8
        let shifted = (folded + PHASE_BUCKET_WIDTH / 2.0).rem_euclid(1.0);
        let index = (shifted / PHASE_BUCKET_WIDTH) as usize;
        Self::ALL[index.min(7)]
    }

    /// Human-readable phase name
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::NewMoon => "New Moon",
            Self::WaxingCrescent => "Waxing Crescent",
            Self::FirstQuarter => "First Quarter",
            Self::WaxingGibbous => "Waxing Gibbous",
            Self::FullMoon => "Full Moon",
            Self::WaningGibbous => "Waning Gibbous",
            Self::LastQuarter => "Last Quarter",
            Self::WaningCrescent => "Waning Crescent",
        }
    }
}

/// Compute the Julian Day for a civil calendar date-time
///
/// Uses the standard proleptic Gregorian formula. The fractional part
/// reflects hours, minutes, and seconds; a Julian day begins at noon, so
/// midnight lands on `.5`.
#[must_use]
pub fn julian_day(date: NaiveDate, time: NaiveTime) -> f64 {
    let year = i64::from(date.year());
    let month = i64::from(date.month());
    let day = i64::from(date.day());

    let a = (14 - month) / 12;
    let y = year + 4800 - a;
    let m = month + 12 * a - 3;

    let jdn = day + (153 * m + 2) / 5 + 365 * y + y / 4 - y / 100 + y / 400 - 32045;

    let day_fraction = (f64::from(time.hour()) - 12.0) / 24.0
        + f64::from(time.minute()) / 1_440.0
        + f64::from(time.second()) / 86_400.0;

    jdn as f64 + day_fraction
}

/// Julian Day at local midnight of `date`
#[must_use]
pub fn julian_day_at_midnight(date: NaiveDate) -> f64 {
    julian_day(date, NaiveTime::MIN)
}

/// Lunar phase fraction for a date-time, 0.0 = new moon
///
/// Always in [0, 1), including for instants before the reference epoch.
#[must_use]
pub fn phase_fraction(date: NaiveDate, time: NaiveTime) -> f64 {
    let days_since_reference = julian_day(date, time) - REFERENCE_NEW_MOON_JD;
    (days_since_reference / SYNODIC_MONTH_DAYS).rem_euclid(1.0)
}

/// Lunar phase and raw fraction at local midnight of `date`
#[must_use]
pub fn lunar_phase_on(date: NaiveDate) -> (LunarPhase, f64) {
    let fraction = phase_fraction(date, NaiveTime::MIN);
    (LunarPhase::from_fraction(fraction), fraction)
}
