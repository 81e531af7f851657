// ABOUTME: Main library entry point for the attune energy alignment engine
// ABOUTME: Pure scoring core plus correlation, forecast, and pattern analytics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Attune Intelligence

#![deny(unsafe_code)]

//! # Attune Engine
//!
//! A deterministic, single-user energy alignment and analytics engine. The
//! scoring core maps (profile, date) to a composite daily reading by
//! combining independent sub-models: calendar and lunar math, digit-reduction
//! numerology, the five-element interaction cycle, a constitutional-type
//! model, and a static weekday fortune table. Downstream analytics treat the
//! scoring function as an oracle over historical and future dates.
//!
//! ## Architecture
//!
//! Data flows one direction, leaves first:
//! - **astronomy / numerology / elements / constitution**: pure leaf models
//! - **synthesis**: user and environmental readings for a date
//! - **alignment**: the two readings combined into one classification
//! - **correlation / forecast / patterns**: analytics over supplied histories
//!
//! Every computation is a pure function of its inputs plus injected
//! configuration. The only async boundary is the [`store`] traits external
//! collaborators implement; the engines themselves never perform I/O.
//!
//! ## Example
//!
//! ```rust
//! use attune_engine::models::UserProfile;
//! use attune_engine::synthesis::EnergyEngine;
//! use chrono::NaiveDate;
//!
//! let engine = EnergyEngine::default();
//! let profile = UserProfile::new(
//!     "Maya",
//!     NaiveDate::from_ymd_opt(1990, 6, 15).unwrap(),
//! );
//! let date = NaiveDate::from_ymd_opt(2025, 12, 27).unwrap();
//!
//! let record = engine.compute_daily_energy(&profile, date).unwrap();
//! assert!(record.user_energy.intensity <= 100);
//! ```

/// Julian day and lunar phase computation
pub mod astronomy;

/// Digit-reduction numerology with master-number fixed points
pub mod numerology;

/// Five-element cycle and pairwise interaction scoring
pub mod elements;

/// Constitutional-type model with time-of-day energy bands
pub mod constitution;

/// Energy synthesis producing the canonical daily record
pub mod synthesis;

/// Alignment scoring between user and environmental readings
pub mod alignment;

/// Pearson correlation with strength bucketing and sample gating
pub mod correlation;

/// Multi-day forecasting with weighted factors and bounded confidence
pub mod forecast;

/// Pattern mining over historical daily logs
pub mod patterns;

/// Engine configuration replacing scattered magic numbers
pub mod config;

/// Unified error handling with standard error codes
pub mod errors;

/// Structured logging setup
pub mod logging;

/// Shared data models for profiles and external histories
pub mod models;

/// Async source traits implemented by external history collaborators
pub mod store;

pub use alignment::{Alignment, AlignmentScorer, ConnectionReading};
pub use astronomy::LunarPhase;
pub use config::EngineConfig;
pub use constitution::ConstitutionalType;
pub use correlation::{
    pearson, CorrelationAnalyzer, CorrelationOutcome, CorrelationResult, CorrelationStrength,
};
pub use elements::Element;
pub use errors::{AppError, AppResult, ErrorCode};
pub use forecast::{
    EnergyForecast, FactorContribution, ForecastDay, ForecastEngine, ForecastRequest,
    TrendDirection,
};
pub use models::{
    BirthPlace, DailyLogEntry, HabitLog, SleepSession, TimeSeriesPoint, UserProfile, WeatherSample,
};
pub use patterns::{
    PatternImpact, PatternKind, PatternOutcome, PatternRecognizer, RecognizedPattern,
};
pub use synthesis::{
    DailyEnergyRecord, DisplayColor, EnergyCategory, EnergyEngine, EnergyReading, ReadingCache,
};
