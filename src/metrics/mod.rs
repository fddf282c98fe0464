//! Classification metrics over confusion counts.

use serde::{Deserialize, Serialize};

use crate::error::{QualityError, Result};

/// Confusion counts for one binary decision.
///
/// Consumed only by the metric formulas; a zero denominator is an error,
/// never a silent 0.0.
///
/// # Examples
///
/// ```
/// use calificar::metrics::ConfusionCounts;
///
/// let counts = ConfusionCounts { tp: 8, fp: 2, fn_count: 1, tn: 9 };
/// let accuracy = counts.accuracy().expect("non-empty counts");
/// assert!((accuracy - 0.85).abs() < 1e-6);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfusionCounts {
    /// True positives.
    pub tp: usize,
    /// False positives.
    pub fp: usize,
    /// False negatives.
    pub fn_count: usize,
    /// True negatives.
    pub tn: usize,
}

impl ConfusionCounts {
    /// Total number of counted decisions.
    #[must_use]
    pub fn total(&self) -> usize {
        self.tp + self.fp + self.fn_count + self.tn
    }

    /// `(tp + tn) / total`.
    ///
    /// # Errors
    ///
    /// Returns [`QualityError::ZeroDivision`] when all counts are zero.
    pub fn accuracy(&self) -> Result<f32> {
        let total = self.total();
        if total == 0 {
            return Err(QualityError::ZeroDivision { what: "accuracy" });
        }
        Ok((self.tp + self.tn) as f32 / total as f32)
    }

    /// `tp / (tp + fp)`.
    ///
    /// # Errors
    ///
    /// Returns [`QualityError::ZeroDivision`] when nothing was predicted
    /// positive.
    pub fn precision(&self) -> Result<f32> {
        let denominator = self.tp + self.fp;
        if denominator == 0 {
            return Err(QualityError::ZeroDivision { what: "precision" });
        }
        Ok(self.tp as f32 / denominator as f32)
    }

    /// `tp / (tp + fn)`.
    ///
    /// # Errors
    ///
    /// Returns [`QualityError::ZeroDivision`] when there were no actual
    /// positives.
    pub fn recall(&self) -> Result<f32> {
        let denominator = self.tp + self.fn_count;
        if denominator == 0 {
            return Err(QualityError::ZeroDivision { what: "recall" });
        }
        Ok(self.tp as f32 / denominator as f32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accuracy_reference_values() {
        let counts = ConfusionCounts {
            tp: 70,
            fp: 4930,
            fn_count: 13930,
            tn: 981_070,
        };
        // (70 + 981070) / 1_000_000
        let accuracy = counts.accuracy().expect("non-zero total");
        assert!((accuracy - 0.98114).abs() < 1e-6);
    }

    #[test]
    fn test_precision_and_recall_reference_values() {
        let counts = ConfusionCounts {
            tp: 70,
            fp: 4930,
            fn_count: 13930,
            tn: 981_070,
        };
        let precision = counts.precision().expect("positive predictions exist");
        assert!((precision - 0.014).abs() < 1e-6);

        let recall = counts.recall().expect("actual positives exist");
        assert!((recall - 0.005).abs() < 1e-6);
    }

    #[test]
    fn test_accuracy_on_empty_counts_is_an_error() {
        let counts = ConfusionCounts {
            tp: 0,
            fp: 0,
            fn_count: 0,
            tn: 0,
        };
        assert!(matches!(
            counts.accuracy(),
            Err(QualityError::ZeroDivision { what: "accuracy" })
        ));
    }

    #[test]
    fn test_precision_zero_denominator_is_an_error() {
        let counts = ConfusionCounts {
            tp: 0,
            fp: 0,
            fn_count: 5,
            tn: 5,
        };
        assert!(matches!(
            counts.precision(),
            Err(QualityError::ZeroDivision { what: "precision" })
        ));
    }

    #[test]
    fn test_recall_zero_denominator_is_an_error() {
        let counts = ConfusionCounts {
            tp: 0,
            fp: 5,
            fn_count: 0,
            tn: 5,
        };
        assert!(matches!(
            counts.recall(),
            Err(QualityError::ZeroDivision { what: "recall" })
        ));
    }

    #[test]
    fn test_perfect_classifier() {
        let counts = ConfusionCounts {
            tp: 10,
            fp: 0,
            fn_count: 0,
            tn: 10,
        };
        assert_eq!(counts.accuracy().expect("non-zero total"), 1.0);
        assert_eq!(counts.precision().expect("predictions exist"), 1.0);
        assert_eq!(counts.recall().expect("positives exist"), 1.0);
    }
}
