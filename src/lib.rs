//! Calificar: review quality scoring and tier classification in pure Rust.
//!
//! Calificar turns free-text reviews and their numeric ratings into
//! ordered quality tiers, scores review text with readability and
//! sentiment features, and trains two interchangeable tier classifiers
//! whose held-out accuracies can be compared side by side.
//!
//! # Quick Start
//!
//! ```
//! use calificar::prelude::*;
//!
//! // Band a numeric rating into a tier.
//! assert_eq!(Tier::from_rating(4.2), Tier::High);
//!
//! // Score one review text.
//! let scorer = TextScorer::new();
//! let features = scorer
//!     .score("The food was good. Service was friendly and fast.")
//!     .expect("non-empty text");
//! assert!(features.word_count > 0.0);
//!
//! // Collapse the features into one quality score in [0, 1].
//! let aggregator = QualityAggregator::new();
//! let quality = aggregator.aggregate(&features);
//! assert!((0.0..=1.0).contains(&quality));
//! ```
//!
//! # Modules
//!
//! - [`primitives`]: Dense row-major matrix used by the decision models
//! - [`tier`]: Quality tiers and the rating bands that produce them
//! - [`text`]: Tokenizers and the count / TF-IDF vectorizers
//! - [`sentiment`]: Lexicon-backed polarity and subjectivity scoring
//! - [`features`]: Readability features and the quality aggregator
//! - [`model_selection`]: Train/test partitioning
//! - [`classification`]: K-nearest-neighbors and softmax regression
//! - [`quality`]: The two text-to-tier classifier variants
//! - [`metrics`]: Accuracy, precision, and recall over confusion counts
//! - [`evaluate`]: Side-by-side evaluation of both variants
//! - [`dataset`]: CSV readers and writers for review datasets

pub mod classification;
pub mod dataset;
pub mod error;
pub mod evaluate;
pub mod features;
pub mod metrics;
pub mod model_selection;
pub mod prelude;
pub mod primitives;
pub mod quality;
pub mod sentiment;
pub mod text;
pub mod tier;

pub use error::{QualityError, Result};
pub use tier::Tier;
