// ABOUTME: Integration tests for energy synthesis and the daily record
// ABOUTME: Worked example, clamping, determinism, range computation, and the reading cache
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Attune Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use attune_engine::models::UserProfile;
use attune_engine::synthesis::{DisplayColor, EnergyCategory, EnergyEngine, ReadingCache};
use attune_engine::Alignment;
use chrono::NaiveDate;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn test_profile() -> UserProfile {
    UserProfile::new("Maya", date(1990, 6, 15))
}

#[test]
fn worked_example_user_reading() {
    // life path 4, personal year 3, category index (4 + 3) % 9 = 7
    let engine = EnergyEngine::default();
    let record = engine
        .compute_daily_energy(&test_profile(), date(2025, 12, 27))
        .unwrap();

    assert_eq!(record.user_energy.category, EnergyCategory::Abundance);
    // June birth is the steady type, which no lunar phase boosts
    assert_eq!(record.user_energy.intensity, 75);
}

#[test]
fn worked_example_environmental_reading() {
    // day number 3, category index (3 + 5) % 9 = 8; 2025-12-27 is a Saturday
    let engine = EnergyEngine::default();
    let record = engine
        .compute_daily_energy(&test_profile(), date(2025, 12, 27))
        .unwrap();

    assert_eq!(
        record.environmental_energy.category,
        EnergyCategory::Completion
    );
    assert_eq!(record.environmental_energy.intensity, 85);
    assert_eq!(record.environmental_energy.color, DisplayColor::Green);
}

#[test]
fn worked_example_connection() {
    // Metal birth year against a Wood target year destroys the context:
    // 0.5 - 0.15 + (100 - 10) / 200 = 0.80
    let engine = EnergyEngine::default();
    let record = engine
        .compute_daily_energy(&test_profile(), date(2025, 12, 27))
        .unwrap();

    assert!((record.connection.score - 0.80).abs() < 1e-9);
    assert_eq!(record.connection.alignment, Alignment::Strong);
    assert_eq!(record.connection.color, DisplayColor::Green);
    assert!(record.connection.summary.contains("Abundance"));
    assert!(record.connection.summary.contains("Completion"));
}

#[test]
fn intensities_stay_in_range_across_dates() {
    let engine = EnergyEngine::default();
    let profile = test_profile();

    let records = engine
        .compute_energy_for_range(&profile, date(2024, 1, 1), date(2024, 12, 31))
        .unwrap();

    assert_eq!(records.len(), 366);
    for record in &records {
        assert!(record.user_energy.intensity <= 100);
        assert!(record.environmental_energy.intensity <= 100);
        assert!((0.0..=1.0).contains(&record.connection.score));
        assert!((0.0..1.0).contains(&record.phase_fraction));
    }
}

#[test]
fn repeated_calls_are_field_for_field_identical() {
    let engine = EnergyEngine::default();
    let profile = test_profile();
    let target = date(2025, 3, 14);

    let first = engine.compute_daily_energy(&profile, target).unwrap();
    let second = engine.compute_daily_energy(&profile, target).unwrap();

    assert_eq!(first, second);
}

#[test]
fn range_is_inclusive_and_day_stepped() {
    let engine = EnergyEngine::default();
    let records = engine
        .compute_energy_for_range(&test_profile(), date(2025, 6, 1), date(2025, 6, 7))
        .unwrap();

    assert_eq!(records.len(), 7);
    assert_eq!(records[0].date, date(2025, 6, 1));
    assert_eq!(records[6].date, date(2025, 6, 7));
}

#[test]
fn inverted_range_is_rejected() {
    let engine = EnergyEngine::default();
    let result = engine.compute_energy_for_range(&test_profile(), date(2025, 6, 7), date(2025, 6, 1));
    assert!(result.is_err());
}

#[test]
fn pre_common_era_dates_are_rejected() {
    let engine = EnergyEngine::default();
    let ancient = NaiveDate::from_ymd_opt(0, 1, 1).unwrap();

    assert!(engine
        .compute_daily_energy(&UserProfile::new("Old", ancient), date(2025, 1, 1))
        .is_err());
    assert!(engine
        .compute_daily_energy(&test_profile(), ancient)
        .is_err());
}

#[test]
fn reading_cache_returns_identical_records_and_resets() {
    let engine = EnergyEngine::default();
    let profile = test_profile();
    let mut cache = ReadingCache::new();

    let first = cache
        .get_or_compute(&engine, &profile, date(2025, 12, 27))
        .unwrap();
    let second = cache
        .get_or_compute(&engine, &profile, date(2025, 12, 27))
        .unwrap();

    assert_eq!(first, second);
    assert_eq!(cache.len(), 1);

    cache.reset();
    assert!(cache.is_empty());
}

#[test]
fn category_list_has_nine_entries_in_fixed_order() {
    assert_eq!(EnergyCategory::ALL.len(), 9);
    assert_eq!(EnergyCategory::from_index(0), EnergyCategory::Initiation);
    assert_eq!(EnergyCategory::from_index(7), EnergyCategory::Abundance);
    assert_eq!(EnergyCategory::from_index(9), EnergyCategory::Initiation);
    assert_eq!(EnergyCategory::from_index(16), EnergyCategory::Abundance);
}
