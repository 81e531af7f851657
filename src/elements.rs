// ABOUTME: Five-element (Wuxing) cycle with generative and destructive relations
// ABOUTME: Year-to-element assignment and the directed pairwise interaction score
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Attune Intelligence

//! Five-element interaction cycle.
//!
//! Two strict 5-cycles over the element set: `generates` (each element
//! nourishes the next) and `destroys` (each element overcomes the one two
//! steps ahead in the generative order). Both are exhaustive matches, so a
//! new variant fails to compile rather than silently falling through.

use serde::{Deserialize, Serialize};

/// The five elements in generative-cycle order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Element {
    /// Wood feeds fire
    Wood,
    /// Fire creates earth
    Fire,
    /// Earth bears metal
    Earth,
    /// Metal carries water
    Metal,
    /// Water nourishes wood
    Water,
}

impl Element {
    /// Element assigned to a calendar year
    ///
    /// The year's last decimal digit selects a heavenly-stem pair:
    /// 0-1 metal, 2-3 water, 4-5 wood, 6-7 fire, 8-9 earth.
    #[must_use]
    pub const fn for_year(year: i32) -> Self {
        let digit = year % 10;
        let digit = if digit < 0 { digit + 10 } else { digit };
        match digit {
            0 | 1 => Self::Metal,
            2 | 3 => Self::Water,
            4 | 5 => Self::Wood,
            6 | 7 => Self::Fire,
            _ => Self::Earth,
        }
    }

    /// The element this one generates
    #[must_use]
    pub const fn generates(self) -> Self {
        match self {
            Self::Wood => Self::Fire,
            Self::Fire => Self::Earth,
            Self::Earth => Self::Metal,
            Self::Metal => Self::Water,
            Self::Water => Self::Wood,
        }
    }

    /// The element this one destroys
    #[must_use]
    pub const fn destroys(self) -> Self {
        match self {
            Self::Wood => Self::Earth,
            Self::Fire => Self::Metal,
            Self::Earth => Self::Water,
            Self::Metal => Self::Wood,
            Self::Water => Self::Fire,
        }
    }

    /// Human-readable element name
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Wood => "Wood",
            Self::Fire => "Fire",
            Self::Earth => "Earth",
            Self::Metal => "Metal",
            Self::Water => "Water",
        }
    }
}

/// Directed interaction score between a subject element and a context element
///
/// 1.0 for identity, 0.8 when the subject generates the context, 0.6 when the
/// context generates the subject, -0.5 when the subject destroys the context,
/// -0.8 when the context destroys the subject. The asymmetry under argument
/// swap is intentional: being overcome is worse than overcoming.
#[must_use]
pub fn interaction_score(subject: Element, context: Element) -> f64 {
    if subject == context {
        1.0
    } else if subject.generates() == context {
        0.8
    } else if context.generates() == subject {
        0.6
    } else if subject.destroys() == context {
        -0.5
    } else if context.destroys() == subject {
        -0.8
    } else {
        // Unreachable for a 5-cycle, kept so the function is total by inspection
        0.0
    }
}
