// ABOUTME: Unified error handling for the attune engine with standard error codes
// ABOUTME: Invalid input fails fast; sparse data is modeled as result variants, not errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Attune Intelligence

//! # Unified Error Handling
//!
//! Every public engine function returns [`AppResult`]. Bad input (an
//! impossible date of birth, an inverted date range, an oversized forecast
//! horizon) is an [`AppError`] and fails fast. "Not enough data yet" is an
//! expected steady state for new users and is therefore expressed as a
//! first-class outcome variant on the analytics types, never as an error.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Standard error codes used throughout the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    /// The provided input is invalid
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput,
    /// The provided value is outside the acceptable range
    #[serde(rename = "VALUE_OUT_OF_RANGE")]
    ValueOutOfRange,
    /// Configuration error encountered
    #[serde(rename = "CONFIG_ERROR")]
    ConfigError,
    /// An internal engine error occurred
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError,
}

impl ErrorCode {
    /// Get a user-friendly description of this error code
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::InvalidInput => "The provided input is invalid",
            Self::ValueOutOfRange => "The provided value is outside the acceptable range",
            Self::ConfigError => "Configuration error encountered",
            Self::InternalError => "An internal engine error occurred",
        }
    }
}

/// Unified error type for the engine
#[derive(Debug, Clone, Error)]
pub enum AppError {
    /// Malformed or inconsistent caller input
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A numeric argument outside its documented range
    #[error("value out of range: {0}")]
    ValueOutOfRange(String),

    /// Invalid engine configuration
    #[error("configuration error: {0}")]
    Config(String),

    /// Unexpected internal failure
    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Create an invalid-input error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Create an out-of-range error
    pub fn value_out_of_range(message: impl Into<String>) -> Self {
        Self::ValueOutOfRange(message.into())
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Get the error code for this error
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::InvalidInput(_) => ErrorCode::InvalidInput,
            Self::ValueOutOfRange(_) => ErrorCode::ValueOutOfRange,
            Self::Config(_) => ErrorCode::ConfigError,
            Self::Internal(_) => ErrorCode::InternalError,
        }
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;
