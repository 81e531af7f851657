// ABOUTME: Unit tests for the constitutional-type model
// ABOUTME: Season mapping, time-of-day bands, amplification, and lunar dosha balance
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Attune Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use attune_engine::astronomy::LunarPhase;
use attune_engine::config::EngineConfig;
use attune_engine::constitution::ConstitutionalType;

#[test]
fn month_ranges_cover_the_whole_year() {
    let expected = [
        (1, ConstitutionalType::Vata),
        (2, ConstitutionalType::Vata),
        (3, ConstitutionalType::Kapha),
        (4, ConstitutionalType::Kapha),
        (5, ConstitutionalType::Kapha),
        (6, ConstitutionalType::Kapha),
        (7, ConstitutionalType::Pitta),
        (8, ConstitutionalType::Pitta),
        (9, ConstitutionalType::Pitta),
        (10, ConstitutionalType::Pitta),
        (11, ConstitutionalType::Vata),
        (12, ConstitutionalType::Vata),
    ];
    for (month, constitutional_type) in expected {
        assert_eq!(
            ConstitutionalType::for_month(month),
            constitutional_type,
            "month {month}"
        );
    }
}

#[test]
fn hourly_curve_has_peak_shoulder_and_baseline() {
    let config = EngineConfig::default().constitution;

    // Pitta peaks over midday
    assert!((ConstitutionalType::Pitta.energy_at_hour(11, &config) - 92.0).abs() < f64::EPSILON);
    // Shoulder in the late afternoon
    assert!((ConstitutionalType::Pitta.energy_at_hour(17, &config) - 70.0).abs() < f64::EPSILON);
    // Baseline overnight
    assert!((ConstitutionalType::Pitta.energy_at_hour(3, &config) - 60.0).abs() < f64::EPSILON);

    // Each type peaks in a different window
    assert!(ConstitutionalType::Vata.energy_at_hour(7, &config) > 80.0);
    assert!(ConstitutionalType::Kapha.energy_at_hour(19, &config) > 80.0);
    assert!(ConstitutionalType::Vata.energy_at_hour(19, &config) < 80.0);
}

#[test]
fn peak_windows_are_half_open() {
    let config = EngineConfig::default().constitution;
    // Pitta peak runs 10..14
    assert!(ConstitutionalType::Pitta.energy_at_hour(10, &config) > 90.0);
    assert!(ConstitutionalType::Pitta.energy_at_hour(14, &config) < 90.0);
}

#[test]
fn amplification_only_applies_in_the_native_season() {
    let config = EngineConfig::default().constitution;

    // July is Pitta season: high values get nudged up
    let amplified = ConstitutionalType::Pitta.amplify_for_month(92.0, 7, &config);
    assert!((amplified - 97.0).abs() < f64::EPSILON);

    // Off-season values pass through untouched
    let untouched = ConstitutionalType::Pitta.amplify_for_month(92.0, 1, &config);
    assert!((untouched - 92.0).abs() < f64::EPSILON);
}

#[test]
fn amplification_caps_at_one_hundred() {
    let config = EngineConfig::default().constitution;
    let amplified = ConstitutionalType::Kapha.amplify_for_month(98.0, 4, &config);
    assert!((amplified - 100.0).abs() < f64::EPSILON);
}

#[test]
fn amplification_dampens_weak_values_to_the_floor() {
    let config = EngineConfig::default().constitution;

    // At or below the pivot the native season pulls values down
    let dampened = ConstitutionalType::Vata.amplify_for_month(60.0, 12, &config);
    assert!((dampened - 55.0).abs() < f64::EPSILON);

    // Never below the configured floor
    let floored = ConstitutionalType::Vata.amplify_for_month(52.0, 12, &config);
    assert!((floored - 50.0).abs() < f64::EPSILON);
}

#[test]
fn dosha_balance_boosts_vata_at_cycle_extremes() {
    let config = EngineConfig::default().constitution;

    assert!(
        (ConstitutionalType::Vata.dosha_balance(LunarPhase::NewMoon, &config) - 0.9).abs()
            < f64::EPSILON
    );
    assert!(
        (ConstitutionalType::Vata.dosha_balance(LunarPhase::FullMoon, &config) - 0.9).abs()
            < f64::EPSILON
    );
    // Every other pair takes the default
    assert!(
        (ConstitutionalType::Vata.dosha_balance(LunarPhase::FirstQuarter, &config) - 0.75).abs()
            < f64::EPSILON
    );
    assert!(
        (ConstitutionalType::Pitta.dosha_balance(LunarPhase::FullMoon, &config) - 0.75).abs()
            < f64::EPSILON
    );
    assert!(
        (ConstitutionalType::Kapha.dosha_balance(LunarPhase::NewMoon, &config) - 0.75).abs()
            < f64::EPSILON
    );
}
