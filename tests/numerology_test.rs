// ABOUTME: Unit tests for the numerology module
// ABOUTME: Covers reduction fixed points and the date-derived number operations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Attune Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use attune_engine::numerology::{
    day_number, life_path, personal_year, reduce_to_single_digit, MASTER_NUMBERS,
};
use chrono::NaiveDate;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

#[test]
fn reduction_stops_at_master_numbers() {
    assert_eq!(reduce_to_single_digit(29), 11); // 2 + 9
    assert_eq!(reduce_to_single_digit(38), 11); // 3 + 8
    assert_eq!(reduce_to_single_digit(22), 22);
    assert_eq!(reduce_to_single_digit(33), 33);
    assert_eq!(reduce_to_single_digit(11), 11);
}

#[test]
fn reduction_collapses_ordinary_numbers() {
    assert_eq!(reduce_to_single_digit(25), 7);
    assert_eq!(reduce_to_single_digit(0), 0);
    assert_eq!(reduce_to_single_digit(9), 9);
    assert_eq!(reduce_to_single_digit(10), 1);
    assert_eq!(reduce_to_single_digit(2011), 4);
    // 1999 -> 28 -> 10 -> 1
    assert_eq!(reduce_to_single_digit(1999), 1);
}

#[test]
fn reduction_terminates_on_large_inputs() {
    assert!(reduce_to_single_digit(u32::MAX) <= 33);
    for n in (0..100_000).step_by(7) {
        let reduced = reduce_to_single_digit(n);
        assert!(reduced <= 9 || MASTER_NUMBERS.contains(&reduced));
    }
}

#[test]
fn life_path_worked_example() {
    // 15 + 6 + 1990 = 2011 -> 4
    assert_eq!(life_path(date(1990, 6, 15)), 4);
}

#[test]
fn personal_year_worked_example() {
    // 15 + 6 + 2025 = 2046 -> 12 -> 3
    assert_eq!(personal_year(date(1990, 6, 15), 2025), 3);
}

#[test]
fn day_number_uses_the_target_date() {
    // 27 + 12 + 2025 = 2064 -> 12 -> 3
    assert_eq!(day_number(date(2025, 12, 27)), 3);
    // Independent of any birth date
    assert_ne!(day_number(date(2025, 12, 27)), day_number(date(2025, 12, 28)));
}

#[test]
fn life_path_can_land_on_a_master_number() {
    // 2 + 9 + 2007 = 2018 -> 11, which the reduction keeps
    assert_eq!(life_path(date(2007, 9, 2)), 11);
}
