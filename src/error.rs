//! Error types for calificar operations.
//!
//! Every failure mode is detected at the boundary of the offending
//! component and surfaced to the caller; nothing is retried internally.

use thiserror::Error;

/// Main error type for calificar operations.
#[derive(Debug, Error)]
pub enum QualityError {
    /// Parallel sequences (texts/labels, features/samples) differ in length.
    #[error("parallel sequences must have the same length: expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Length of the first sequence
        expected: usize,
        /// Length of the second sequence
        actual: usize,
    },

    /// A split fraction outside the unit interval.
    #[error("split fraction must be within [0, 1], got {value}")]
    InvalidFraction {
        /// The rejected fraction
        value: f32,
    },

    /// An operation received an empty collection it cannot work with.
    #[error("{what} must not be empty")]
    EmptyInput {
        /// What was empty
        what: &'static str,
    },

    /// The evaluation harness was handed zero test records.
    #[error("cannot evaluate on an empty test set")]
    EmptyTestSet,

    /// Text on which the feature formulas are undefined.
    #[error("text is not scorable: {reason}")]
    UnscorableText {
        /// Why the text cannot be scored
        reason: &'static str,
    },

    /// A metric denominator was zero.
    #[error("division by zero in {what}")]
    ZeroDivision {
        /// Which metric hit the zero denominator
        what: &'static str,
    },

    /// Prediction or transformation was attempted before fitting.
    #[error("model is not fitted; call train() first")]
    NotFitted,

    /// A tier string that is not one of low/medium/high.
    #[error("unknown tier label {value:?}")]
    UnknownTier {
        /// The rejected label
        value: String,
    },

    /// A numeric tier code outside {-1, 0, 1}.
    #[error("invalid tier code {code}, expected -1, 0, or 1")]
    InvalidTierCode {
        /// The rejected code
        code: i8,
    },

    /// Neighbor count incompatible with the training set.
    #[error("k = {k} is invalid for {n_samples} training samples")]
    InvalidNeighborCount {
        /// Requested number of neighbors
        k: usize,
        /// Number of fitted samples
        n_samples: usize,
    },

    /// A class label outside the configured class range.
    #[error("class label {label} is out of range for {n_classes} classes")]
    InvalidClassLabel {
        /// The rejected label
        label: usize,
        /// Number of configured classes
        n_classes: usize,
    },

    /// Aggregation weights that do not sum to one.
    #[error("aggregation weights must sum to 1.0, got {sum}")]
    InvalidWeights {
        /// The actual sum
        sum: f32,
    },

    /// A required CSV column is missing from the header.
    #[error("required column {name:?} not found in header")]
    MissingColumn {
        /// Name of the missing column
        name: &'static str,
    },

    /// A rating cell that cannot be parsed as a number.
    #[error("cannot parse rating value {value:?}")]
    ParseRating {
        /// The rejected cell content
        value: String,
    },

    /// I/O failure from a dataset collaborator.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// CSV read/write failure from a dataset collaborator.
    #[error(transparent)]
    Csv(#[from] csv::Error),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, QualityError>;
