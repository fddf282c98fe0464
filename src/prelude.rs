//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use calificar::prelude::*;
//! ```

pub use crate::classification::{KNearestNeighbors, SoftmaxRegression};
pub use crate::dataset::{
    export_split, read_labeled, read_reviews, rewrite_categories, ReviewRecord,
};
pub use crate::error::{QualityError, Result};
pub use crate::evaluate::{compare, ComparisonReport};
pub use crate::features::{FeatureVector, QualityAggregator, TextScorer};
pub use crate::metrics::ConfusionCounts;
pub use crate::model_selection::{split_data, train_test_split};
pub use crate::primitives::Matrix;
pub use crate::quality::{KnnQuality, LinearQuality, QualityClassifier};
pub use crate::sentiment::{LexiconSentiment, SentimentModel, SentimentScore};
pub use crate::text::{CountVectorizer, TfidfVectorizer, Tokenizer, WordTokenizer};
pub use crate::tier::Tier;
