//! Quality tiers derived from numeric review ratings.
//!
//! A rating on the external 1-5 review scale maps deterministically onto
//! one of three ordered tiers. The band thresholds are tuning constants,
//! not derived values, so they live here as named constants.

use crate::error::QualityError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Inclusive upper bound of the low-rating band.
pub const LOW_RATING_CEILING: f32 = 1.7;

/// Inclusive upper bound of the medium-rating band.
pub const MEDIUM_RATING_CEILING: f32 = 3.3;

/// Ordinal quality tier for a review.
///
/// Tiers are totally ordered (`Low < Medium < High`) and carry a canonical
/// numeric encoding `{-1, 0, 1}` used at the evaluation boundary.
///
/// # Examples
///
/// ```
/// use calificar::Tier;
///
/// assert_eq!(Tier::from_rating(1.7), Tier::Low);
/// assert_eq!(Tier::from_rating(3.3), Tier::Medium);
/// assert_eq!(Tier::from_rating(4.5), Tier::High);
/// assert!(Tier::Low < Tier::High);
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    /// Rating at or below [`LOW_RATING_CEILING`].
    Low,
    /// Rating above [`LOW_RATING_CEILING`], at or below [`MEDIUM_RATING_CEILING`].
    Medium,
    /// Rating above [`MEDIUM_RATING_CEILING`].
    High,
}

impl Tier {
    /// Maps a numeric rating onto its tier.
    ///
    /// Total over all `f32` values; band thresholds belong to the
    /// lower-named band. A NaN rating fails both threshold comparisons
    /// and lands in `High`.
    #[must_use]
    pub fn from_rating(rating: f32) -> Self {
        if rating <= LOW_RATING_CEILING {
            Tier::Low
        } else if rating <= MEDIUM_RATING_CEILING {
            Tier::Medium
        } else {
            Tier::High
        }
    }

    /// Canonical numeric encoding: `Low = -1`, `Medium = 0`, `High = 1`.
    #[must_use]
    pub fn encode(self) -> i8 {
        match self {
            Tier::Low => -1,
            Tier::Medium => 0,
            Tier::High => 1,
        }
    }

    /// Decodes the canonical numeric encoding back into a tier.
    ///
    /// # Errors
    ///
    /// Returns [`QualityError::InvalidTierCode`] for codes outside `{-1, 0, 1}`.
    pub fn try_from_code(code: i8) -> Result<Self, QualityError> {
        match code {
            -1 => Ok(Tier::Low),
            0 => Ok(Tier::Medium),
            1 => Ok(Tier::High),
            _ => Err(QualityError::InvalidTierCode { code }),
        }
    }

    /// Zero-based class index used by multi-class decision models.
    #[must_use]
    pub fn class_index(self) -> usize {
        (self.encode() + 1) as usize
    }

    /// The tier's string form, as written by the CSV collaborators.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Tier::Low => "low",
            Tier::Medium => "medium",
            Tier::High => "high",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tier {
    type Err = QualityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Tier::Low),
            "medium" => Ok(Tier::Medium),
            "high" => Ok(Tier::High),
            other => Err(QualityError::UnknownTier {
                value: other.to_string(),
            }),
        }
    }
}
