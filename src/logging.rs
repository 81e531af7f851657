// ABOUTME: Logging configuration and structured logging setup for observability and debugging
// ABOUTME: Configures log levels and output formats for the engine's tracing spans
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Attune Intelligence

//! Structured logging setup built on `tracing`.
//!
//! The engine only emits spans and events; hosts decide where they go. This
//! module gives embedding binaries a one-call initializer driven by
//! environment variables.

use crate::errors::{AppError, AppResult};
use std::env;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Output format for log lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Verbose development output with source locations
    Pretty,
    /// Single-line output for terminals
    Compact,
    /// JSON lines for log aggregation
    Json,
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Filter directive ("info", "attune_engine=debug")
    pub level: String,
    /// Output format
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            format: LogFormat::Compact,
        }
    }
}

impl LoggingConfig {
    /// Build configuration from `ATTUNE_LOG` and `ATTUNE_LOG_FORMAT`
    ///
    /// # Errors
    /// Returns `AppError::Config` for an unrecognized format name.
    pub fn from_env() -> AppResult<Self> {
        let mut config = Self::default();

        if let Ok(level) = env::var("ATTUNE_LOG") {
            config.level = level;
        }

        if let Ok(format) = env::var("ATTUNE_LOG_FORMAT") {
            config.format = match format.to_lowercase().as_str() {
                "pretty" => LogFormat::Pretty,
                "compact" => LogFormat::Compact,
                "json" => LogFormat::Json,
                other => {
                    return Err(AppError::config(format!(
                        "unknown log format '{other}', expected pretty, compact, or json"
                    )))
                }
            };
        }

        Ok(config)
    }
}

/// Install the global tracing subscriber
///
/// # Errors
/// Returns `AppError::Config` if the filter directive fails to parse or a
/// global subscriber is already installed.
pub fn init_logging(config: &LoggingConfig) -> AppResult<()> {
    let filter = EnvFilter::try_new(&config.level)
        .map_err(|e| AppError::config(format!("invalid log filter '{}': {e}", config.level)))?;

    let registry = tracing_subscriber::registry().with(filter);

    let result = match config.format {
        LogFormat::Pretty => registry
            .with(fmt::layer().with_file(true).with_line_number(true))
            .try_init(),
        LogFormat::Compact => registry
            .with(fmt::layer().compact().with_target(false))
            .try_init(),
        LogFormat::Json => registry.with(fmt::layer().json()).try_init(),
    };

    result.map_err(|e| AppError::config(format!("failed to install subscriber: {e}")))
}
