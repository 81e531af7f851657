// ABOUTME: Alignment scorer combining user and environmental readings into one classification
// ABOUTME: Element interaction plus intensity gap, bucketed into strong/moderate/challenging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Attune Intelligence

use crate::config::EngineConfig;
use crate::elements::{self, Element};
use crate::synthesis::{DisplayColor, EnergyReading};
use serde::{Deserialize, Serialize};

/// Three-way alignment classification
///
/// Bucket boundaries are total and non-overlapping over the score range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    /// The day's energies work with the user
    Strong,
    /// Mixed support
    Moderate,
    /// The day's energies push against the user
    Challenging,
}

impl Alignment {
    /// Bucket a normalized score using the configured thresholds
    #[must_use]
    pub fn from_score(score: f64, config: &EngineConfig) -> Self {
        if score > config.alignment.strong_threshold {
            Self::Strong
        } else if score > config.alignment.moderate_threshold {
            Self::Moderate
        } else {
            Self::Challenging
        }
    }

    /// Display color fixed per bucket
    #[must_use]
    pub const fn color(self) -> DisplayColor {
        match self {
            Self::Strong => DisplayColor::Green,
            Self::Moderate => DisplayColor::Amber,
            Self::Challenging => DisplayColor::Red,
        }
    }

    /// Human-readable bucket name
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Strong => "strong",
            Self::Moderate => "moderate",
            Self::Challenging => "challenging",
        }
    }
}

/// Alignment between one user reading and one environmental reading
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectionReading {
    /// Three-way classification
    pub alignment: Alignment,
    /// Normalized alignment score in [0, 1] before bucketing
    pub score: f64,
    /// Display color matching the bucket
    pub color: DisplayColor,
    /// Generated summary referencing both category labels
    pub summary: String,
}

/// Scorer combining two readings and one element interaction
pub struct AlignmentScorer;

impl AlignmentScorer {
    /// Score the connection between a user reading and an environmental one
    ///
    /// score = base + interaction_weight x element_interaction
    ///       + (100 - |user - env|) / gap_normalizer, clamped to [0, 1].
    #[must_use]
    pub fn score(
        user: &EnergyReading,
        environment: &EnergyReading,
        birth_element: Element,
        year_element: Element,
        config: &EngineConfig,
    ) -> ConnectionReading {
        let interaction = elements::interaction_score(birth_element, year_element);
        let intensity_gap = f64::from(user.intensity.abs_diff(environment.intensity));

        let raw = interaction.mul_add(
            config.alignment.interaction_weight,
            config.alignment.base_score,
        ) + (100.0 - intensity_gap) / config.alignment.gap_normalizer;

        let score = raw.clamp(0.0, 1.0);
        let alignment = Alignment::from_score(score, config);

        let summary = Self::summarize(alignment, user, environment);

        ConnectionReading {
            alignment,
            score,
            color: alignment.color(),
            summary,
        }
    }

    fn summarize(
        alignment: Alignment,
        user: &EnergyReading,
        environment: &EnergyReading,
    ) -> String {
        let user_label = user.category.label();
        let env_label = environment.category.label();
        match alignment {
            Alignment::Strong => format!(
                "Your {user_label} energy flows easily with the day's {env_label} current"
            ),
            Alignment::Moderate => format!(
                "Your {user_label} energy finds partial footing in the day's {env_label} current"
            ),
            Alignment::Challenging => format!(
                "Your {user_label} energy runs against the day's {env_label} current; pace yourself"
            ),
        }
    }
}
