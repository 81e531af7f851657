// ABOUTME: Configuration module for the attune engine
// ABOUTME: Houses the tuning table that replaces scattered magic numbers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Attune Intelligence

//! Engine configuration.
//!
//! Every empirically chosen constant (bucket thresholds, factor weights,
//! confidence caps, fortune tables, energy bands) lives in [`EngineConfig`]
//! so the tuning is auditable and adjustable without touching algorithm code.

mod engine;

pub use engine::{
    AlignmentConfig, ConfidenceRule, ConstitutionConfig, CorrelationConfig, EnergyBands,
    EngineConfig, ForecastConfig, IntensityBands, PatternConfig, SynthesisConfig,
};
