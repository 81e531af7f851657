// ABOUTME: Async source traits for externally stored history series
// ABOUTME: The only async boundary; the engine itself consumes materialized slices
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Attune Intelligence

//! # History Sources
//!
//! Persistence of raw logs belongs to external collaborators. These traits
//! define the fetch surface those collaborators implement; the core engines
//! never perform I/O themselves and accept already-materialized slices.

use crate::errors::AppResult;
use crate::models::{DailyLogEntry, HabitLog, SleepSession, TimeSeriesPoint, WeatherSample};
use async_trait::async_trait;
use chrono::NaiveDate;
use uuid::Uuid;

/// Source of sleep sessions for a user
#[async_trait]
pub trait SleepHistorySource: Send + Sync {
    /// Fetch sleep sessions in an inclusive date range
    async fn sleep_sessions(
        &self,
        user_id: Uuid,
        start: NaiveDate,
        end: NaiveDate,
    ) -> AppResult<Vec<SleepSession>>;
}

/// Source of weather observations for a user's location
#[async_trait]
pub trait WeatherHistorySource: Send + Sync {
    /// Fetch weather samples in an inclusive date range
    async fn weather_samples(
        &self,
        user_id: Uuid,
        start: NaiveDate,
        end: NaiveDate,
    ) -> AppResult<Vec<WeatherSample>>;
}

/// Source of habit completion logs for a user
#[async_trait]
pub trait HabitHistorySource: Send + Sync {
    /// Fetch habit logs in an inclusive date range
    async fn habit_logs(
        &self,
        user_id: Uuid,
        start: NaiveDate,
        end: NaiveDate,
    ) -> AppResult<Vec<HabitLog>>;
}

/// Source of historical daily energy entries for a user
#[async_trait]
pub trait EnergyHistorySource: Send + Sync {
    /// Fetch raw daily energy log entries in an inclusive date range
    async fn energy_log(
        &self,
        user_id: Uuid,
        start: NaiveDate,
        end: NaiveDate,
    ) -> AppResult<Vec<DailyLogEntry>>;

    /// Fetch the (date, score) series form of the same history
    async fn energy_scores(
        &self,
        user_id: Uuid,
        start: NaiveDate,
        end: NaiveDate,
    ) -> AppResult<Vec<TimeSeriesPoint>> {
        let entries = self.energy_log(user_id, start, end).await?;
        Ok(entries
            .into_iter()
            .map(|entry| TimeSeriesPoint::new(entry.date, entry.score))
            .collect())
    }
}
