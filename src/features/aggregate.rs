//! Weighted aggregation of a feature vector into one quality score.

use serde::{Deserialize, Serialize};

use crate::error::{QualityError, Result};
use crate::features::FeatureVector;

/// Per-feature aggregation weights. Must sum to 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureWeights {
    /// Weight of the readability signal.
    pub readability: f32,
    /// Weight of the subjectivity signal.
    pub subjectivity: f32,
    /// Weight of the polarity signal.
    pub polarity: f32,
    /// Weight of the word-count signal.
    pub word_count: f32,
    /// Weight of the Coleman-Liau signal.
    pub coleman_liau: f32,
}

impl FeatureWeights {
    fn sum(&self) -> f32 {
        self.readability + self.subjectivity + self.polarity + self.word_count + self.coleman_liau
    }
}

impl Default for FeatureWeights {
    fn default() -> Self {
        Self {
            readability: 0.2,
            subjectivity: 0.3,
            polarity: 0.2,
            word_count: 0.1,
            coleman_liau: 0.2,
        }
    }
}

/// Per-feature normalization ceilings.
///
/// A raw feature divided by its ceiling and clamped to `[0, 1]` is that
/// feature's normalized contribution. The defaults are tuning choices:
/// readability 10 is roughly high-school level, 100 words saturates the
/// length signal, and most Coleman-Liau values fall under 20.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureCeilings {
    /// Ceiling for readability.
    pub readability: f32,
    /// Ceiling for subjectivity.
    pub subjectivity: f32,
    /// Ceiling for polarity after rescaling to `[0, 1]`.
    pub polarity: f32,
    /// Ceiling for word count.
    pub word_count: f32,
    /// Ceiling for the Coleman-Liau index.
    pub coleman_liau: f32,
}

impl Default for FeatureCeilings {
    fn default() -> Self {
        Self {
            readability: 10.0,
            subjectivity: 1.0,
            polarity: 1.0,
            word_count: 100.0,
            coleman_liau: 20.0,
        }
    }
}

/// Collapses a [`FeatureVector`] into a quality score in `[0, 1]`.
///
/// # Examples
///
/// ```
/// use calificar::features::{QualityAggregator, TextScorer};
///
/// let scorer = TextScorer::new();
/// let features = scorer.score("The staff was friendly and the food delicious.")
///     .expect("scorable text");
/// let quality = QualityAggregator::new().aggregate(&features);
/// assert!((0.0..=1.0).contains(&quality));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct QualityAggregator {
    weights: FeatureWeights,
    ceilings: FeatureCeilings,
}

impl QualityAggregator {
    /// Creates an aggregator with the default weights and ceilings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the weights.
    ///
    /// # Errors
    ///
    /// Returns [`QualityError::InvalidWeights`] unless the weights sum
    /// to 1.0, which keeps the output bounded by `[0, 1]`.
    pub fn with_weights(mut self, weights: FeatureWeights) -> Result<Self> {
        let sum = weights.sum();
        if (sum - 1.0).abs() > 1e-5 {
            return Err(QualityError::InvalidWeights { sum });
        }
        self.weights = weights;
        Ok(self)
    }

    /// Replaces the normalization ceilings.
    #[must_use]
    pub fn with_ceilings(mut self, ceilings: FeatureCeilings) -> Self {
        self.ceilings = ceilings;
        self
    }

    /// Normalizes, weights, and sums the feature vector.
    ///
    /// Pure function of its input; polarity is rescaled from `[-1, 1]`
    /// to `[0, 1]` before normalization.
    #[must_use]
    pub fn aggregate(&self, features: &FeatureVector) -> f32 {
        let normalize = |raw: f32, ceiling: f32| (raw / ceiling).clamp(0.0, 1.0);

        let polarity01 = (features.polarity + 1.0) / 2.0;

        self.weights.readability * normalize(features.readability, self.ceilings.readability)
            + self.weights.subjectivity
                * normalize(features.subjectivity, self.ceilings.subjectivity)
            + self.weights.polarity * normalize(polarity01, self.ceilings.polarity)
            + self.weights.word_count * normalize(features.word_count, self.ceilings.word_count)
            + self.weights.coleman_liau
                * normalize(features.coleman_liau, self.ceilings.coleman_liau)
    }
}
