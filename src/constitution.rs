// ABOUTME: Constitutional-type (dosha) model mapping birth season to an energy style
// ABOUTME: Time-of-day energy bands, seasonal amplification, and lunar dosha balance
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Attune Intelligence

use crate::astronomy::LunarPhase;
use crate::config::{ConstitutionConfig, EnergyBands};
use serde::{Deserialize, Serialize};

/// The three constitutional types
///
/// Assigned from the birth month by season; three fixed, non-overlapping
/// month ranges cover the year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConstitutionalType {
    /// Airy, quick energy; born November through February
    Vata,
    /// Fiery, driven energy; born July through October
    Pitta,
    /// Steady, enduring energy; born March through June
    Kapha,
}

impl ConstitutionalType {
    /// Seasonal type for a calendar month (1-12)
    ///
    /// Months outside 1-12 cannot occur for a `chrono` date; the match folds
    /// them into the winter range rather than panicking.
    #[must_use]
    pub const fn for_month(month: u32) -> Self {
        match month {
            3..=6 => Self::Kapha,
            7..=10 => Self::Pitta,
            _ => Self::Vata,
        }
    }

    /// Human-readable type name
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Vata => "Vata",
            Self::Pitta => "Pitta",
            Self::Kapha => "Kapha",
        }
    }

    /// Energy bands for this type from the configuration table
    #[must_use]
    pub const fn bands(self, config: &ConstitutionConfig) -> &EnergyBands {
        match self {
            Self::Vata => &config.vata,
            Self::Pitta => &config.pitta,
            Self::Kapha => &config.kapha,
        }
    }

    /// Energy-level estimate for an hour of day (0-23)
    ///
    /// Piecewise bands per type: a short peak window, a shoulder band, and a
    /// baseline everywhere else. Band placement and levels are configuration.
    #[must_use]
    pub fn energy_at_hour(self, hour: u32, config: &ConstitutionConfig) -> f64 {
        let bands = self.bands(config);
        if (bands.peak_start..bands.peak_end).contains(&hour) {
            bands.peak_level
        } else if (bands.shoulder_start..bands.shoulder_end).contains(&hour) {
            bands.shoulder_level
        } else {
            bands.baseline_level
        }
    }

    /// Apply seasonal amplification to an energy value
    ///
    /// When the target month's seasonal type matches this type, strong values
    /// are nudged up (capped at 100) and weaker values are nudged down to a
    /// configured floor. Off-season values pass through unchanged.
    #[must_use]
    pub fn amplify_for_month(self, value: f64, month: u32, config: &ConstitutionConfig) -> f64 {
        if Self::for_month(month) != self {
            return value;
        }

        if value > config.amplification_pivot {
            (value + config.amplification_boost).min(100.0)
        } else {
            (value - config.amplification_damp).max(config.amplification_floor)
        }
    }

    /// Dosha balance under a lunar phase, in [0, 1]
    ///
    /// The airy type resonates with the cycle extremes: the new and full
    /// moons boost its balance. Every other (type, phase) pair takes the
    /// configured default.
    #[must_use]
    pub fn dosha_balance(self, phase: LunarPhase, config: &ConstitutionConfig) -> f64 {
        match (self, phase) {
            (Self::Vata, LunarPhase::NewMoon | LunarPhase::FullMoon) => {
                config.boosted_dosha_balance
            }
            _ => config.default_dosha_balance,
        }
    }
}
