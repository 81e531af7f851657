// ABOUTME: Energy synthesis producing user and environmental readings for a date
// ABOUTME: EnergyEngine service combining numerology, elements, constitution, and lunar phase
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Attune Intelligence

//! # Energy Synthesis
//!
//! The scoring core. [`EnergyEngine`] maps (profile, date) to a
//! [`DailyEnergyRecord`]: a user-side reading, an environment-side reading,
//! and their alignment. Everything is a pure function of the inputs plus the
//! injected configuration, so repeated calls are bit-for-bit identical and
//! callers may memoize freely via [`ReadingCache`].

use crate::alignment::{AlignmentScorer, ConnectionReading};
use crate::astronomy::{lunar_phase_on, LunarPhase};
use crate::config::{EngineConfig, IntensityBands};
use crate::constitution::ConstitutionalType;
use crate::elements::Element;
use crate::errors::{AppError, AppResult};
use crate::models::UserProfile;
use crate::numerology;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// Number of energy categories in the fixed list
pub const CATEGORY_COUNT: u32 = 9;

/// Category-index shift applied to the environmental day number
const ENVIRONMENTAL_CATEGORY_SHIFT: u32 = 5;

/// The nine canonical energy categories, in index order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnergyCategory {
    /// Index 0
    Initiation,
    /// Index 1
    Harmony,
    /// Index 2
    Expression,
    /// Index 3
    Foundation,
    /// Index 4
    Freedom,
    /// Index 5
    Nurture,
    /// Index 6
    Reflection,
    /// Index 7
    Abundance,
    /// Index 8
    Completion,
}

impl EnergyCategory {
    /// All categories in index order
    pub const ALL: [Self; 9] = [
        Self::Initiation,
        Self::Harmony,
        Self::Expression,
        Self::Foundation,
        Self::Freedom,
        Self::Nurture,
        Self::Reflection,
        Self::Abundance,
        Self::Completion,
    ];

    /// Category at an index, taken modulo the list length
    #[must_use]
    pub const fn from_index(index: u32) -> Self {
        Self::ALL[(index % CATEGORY_COUNT) as usize]
    }

    /// Display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Initiation => "Initiation",
            Self::Harmony => "Harmony",
            Self::Expression => "Expression",
            Self::Foundation => "Foundation",
            Self::Freedom => "Freedom",
            Self::Nurture => "Nurture",
            Self::Reflection => "Reflection",
            Self::Abundance => "Abundance",
            Self::Completion => "Completion",
        }
    }

    /// One-line category description
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Initiation => "New beginnings and decisive starts",
            Self::Harmony => "Partnership, balance, and diplomacy",
            Self::Expression => "Creative output and open communication",
            Self::Foundation => "Structure, discipline, and steady work",
            Self::Freedom => "Change, movement, and adaptability",
            Self::Nurture => "Care, responsibility, and home matters",
            Self::Reflection => "Introspection, analysis, and rest",
            Self::Abundance => "Ambition, influence, and material flow",
            Self::Completion => "Closure, release, and compassion",
        }
    }
}

/// Traffic-light display color derived from an intensity or score bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayColor {
    /// Strong reading
    Green,
    /// Middling reading
    Amber,
    /// Weak reading
    Red,
}

impl DisplayColor {
    /// Color for an intensity value using the configured bands
    #[must_use]
    pub const fn from_intensity(intensity: u8, bands: &IntensityBands) -> Self {
        if intensity > bands.strong_floor {
            Self::Green
        } else if intensity > bands.mid_floor {
            Self::Amber
        } else {
            Self::Red
        }
    }
}

/// A single energy reading for one side of a day (user or environment)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnergyReading {
    /// One of the nine canonical categories
    pub category: EnergyCategory,
    /// Free-text description of the category's theme
    pub description: String,
    /// Reading intensity (0-100)
    pub intensity: u8,
    /// Display color derived solely from the intensity bands
    pub color: DisplayColor,
}

/// The canonical per-day unit consumed by all downstream analytics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyEnergyRecord {
    /// Target date
    pub date: NaiveDate,
    /// User-side reading
    pub user_energy: EnergyReading,
    /// Environment-side reading
    pub environmental_energy: EnergyReading,
    /// Alignment between the two readings
    pub connection: ConnectionReading,
    /// Lunar phase bucket at local midnight
    pub lunar_phase: LunarPhase,
    /// Raw lunar phase fraction in [0, 1)
    pub phase_fraction: f64,
}

/// Energy computation service
///
/// Explicitly constructed with its configuration; holds no mutable state.
pub struct EnergyEngine {
    config: EngineConfig,
}

impl Default for EnergyEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl EnergyEngine {
    /// Create an engine with the given configuration
    #[must_use]
    pub const fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// The injected configuration
    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Compute the full daily record for a profile and date
    ///
    /// Deterministic: identical arguments produce field-for-field identical
    /// output, with no wall-clock dependence beyond the supplied date.
    ///
    /// # Errors
    /// Returns `AppError::InvalidInput` for a pre-common-era date of birth or
    /// target date.
    pub fn compute_daily_energy(
        &self,
        profile: &UserProfile,
        date: NaiveDate,
    ) -> AppResult<DailyEnergyRecord> {
        profile.validate()?;
        validate_target_date(date)?;

        let (lunar_phase, phase_fraction) = lunar_phase_on(date);
        let user_energy = self.user_reading(profile, date, lunar_phase);
        let environmental_energy = self.environmental_reading(date);

        let birth_element = Element::for_year(profile.date_of_birth.year());
        let year_element = Element::for_year(date.year());

        let connection = AlignmentScorer::score(
            &user_energy,
            &environmental_energy,
            birth_element,
            year_element,
            &self.config,
        );

        tracing::debug!(
            user_id = %profile.id,
            %date,
            user_intensity = user_energy.intensity,
            env_intensity = environmental_energy.intensity,
            alignment = ?connection.alignment,
            "computed daily energy record"
        );

        Ok(DailyEnergyRecord {
            date,
            user_energy,
            environmental_energy,
            connection,
            lunar_phase,
            phase_fraction,
        })
    }

    /// Compute records for an inclusive, day-stepped date range
    ///
    /// # Errors
    /// Returns `AppError::InvalidInput` if `start` is after `end` or either
    /// endpoint fails date validation.
    pub fn compute_energy_for_range(
        &self,
        profile: &UserProfile,
        start: NaiveDate,
        end: NaiveDate,
    ) -> AppResult<Vec<DailyEnergyRecord>> {
        if start > end {
            return Err(AppError::invalid_input(format!(
                "range start {start} is after range end {end}"
            )));
        }

        start
            .iter_days()
            .take_while(|date| *date <= end)
            .map(|date| self.compute_daily_energy(profile, date))
            .collect()
    }

    /// User-side reading for a date
    ///
    /// Category from the life path and personal year; intensity from the
    /// constitutional dosha balance under the date's lunar phase.
    #[must_use]
    pub fn user_reading(
        &self,
        profile: &UserProfile,
        date: NaiveDate,
        lunar_phase: LunarPhase,
    ) -> EnergyReading {
        let life_path = numerology::life_path(profile.date_of_birth);
        let personal_year = numerology::personal_year(profile.date_of_birth, date.year());
        let category = EnergyCategory::from_index(life_path + personal_year);

        let constitutional_type = ConstitutionalType::for_month(profile.date_of_birth.month());
        let balance = constitutional_type.dosha_balance(lunar_phase, &self.config.constitution);

        self.reading_from(category, balance)
    }

    /// Environment-side reading for a date
    ///
    /// Category from the date's own day number; intensity from the static
    /// weekday fortune table.
    #[must_use]
    pub fn environmental_reading(&self, date: NaiveDate) -> EnergyReading {
        let day_number = numerology::day_number(date);
        let category = EnergyCategory::from_index(day_number + ENVIRONMENTAL_CATEGORY_SHIFT);

        let weekday_index = date.weekday().num_days_from_monday() as usize;
        let fortune = self.config.synthesis.weekday_fortunes[weekday_index];

        self.reading_from(category, fortune)
    }

    fn reading_from(&self, category: EnergyCategory, unit_intensity: f64) -> EnergyReading {
        let intensity = (unit_intensity.clamp(0.0, 1.0) * 100.0).round() as u8;
        EnergyReading {
            category,
            description: category.description().to_owned(),
            intensity,
            color: DisplayColor::from_intensity(intensity, &self.config.intensity),
        }
    }
}

fn validate_target_date(date: NaiveDate) -> AppResult<()> {
    if date.year() < 1 {
        return Err(AppError::invalid_input(format!(
            "target date year {} precedes the supported calendar range",
            date.year()
        )));
    }
    Ok(())
}

/// Explicit memoization cache for daily records
///
/// Readings are pure, so callers computing large windows repeatedly can key
/// results on (profile id, date). The cache is an ordinary injected value
/// with an explicit [`reset`](Self::reset), never ambient static state.
#[derive(Debug, Default)]
pub struct ReadingCache {
    entries: HashMap<(Uuid, NaiveDate), DailyEnergyRecord>,
}

impl ReadingCache {
    /// Create an empty cache
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of cached records
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Fetch a cached record, computing and storing it on a miss
    ///
    /// # Errors
    /// Propagates any computation error; nothing is cached on failure.
    pub fn get_or_compute(
        &mut self,
        engine: &EnergyEngine,
        profile: &UserProfile,
        date: NaiveDate,
    ) -> AppResult<DailyEnergyRecord> {
        if let Some(record) = self.entries.get(&(profile.id, date)) {
            return Ok(record.clone());
        }

        let record = engine.compute_daily_energy(profile, date)?;
        self.entries.insert((profile.id, date), record.clone());
        Ok(record)
    }

    /// Drop every cached record
    pub fn reset(&mut self) {
        self.entries.clear();
    }
}
