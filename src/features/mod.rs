//! Linguistic quality features computed per review text.
//!
//! [`TextScorer`] produces the fixed five-signal [`FeatureVector`];
//! [`QualityAggregator`] collapses it into a single score in `[0, 1]`.
//! This path is an unsupervised quality proxy and does not feed the
//! classifiers.

mod aggregate;

pub use aggregate::{FeatureCeilings, FeatureWeights, QualityAggregator};

use serde::{Deserialize, Serialize};

use crate::error::{QualityError, Result};
use crate::sentiment::{LexiconSentiment, SentimentModel};
use crate::text::tokenize::{SentenceTokenizer, Tokenizer, WordTokenizer};

/// The fixed linguistic signal tuple computed per text.
///
/// Recomputed fresh per call; never cached or mutated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    /// Automated Readability Index.
    pub readability: f32,
    /// Sentiment subjectivity in `[0, 1]`.
    pub subjectivity: f32,
    /// Sentiment polarity in `[-1, 1]`.
    pub polarity: f32,
    /// Number of word tokens.
    pub word_count: f32,
    /// Coleman-Liau index.
    pub coleman_liau: f32,
}

/// Computes a [`FeatureVector`] from raw review text.
///
/// # Examples
///
/// ```
/// use calificar::features::TextScorer;
///
/// let scorer = TextScorer::new();
/// let features = scorer.score("The tacos were wonderful!").expect("scorable text");
/// assert_eq!(features.word_count, 4.0);
/// assert!(features.polarity > 0.0);
/// ```
pub struct TextScorer {
    words: WordTokenizer,
    sentences: SentenceTokenizer,
    sentiment: Box<dyn SentimentModel>,
}

impl TextScorer {
    /// Creates a scorer backed by the bundled lexicon sentiment model.
    #[must_use]
    pub fn new() -> Self {
        Self {
            words: WordTokenizer::new(),
            sentences: SentenceTokenizer::new(),
            sentiment: Box::new(LexiconSentiment::new()),
        }
    }

    /// Replaces the sentiment collaborator.
    #[must_use]
    pub fn with_sentiment(mut self, sentiment: Box<dyn SentimentModel>) -> Self {
        self.sentiment = sentiment;
        self
    }

    /// Scores `text`.
    ///
    /// Character count includes whitespace and punctuation; word and
    /// sentence counts come from the tokenizers.
    ///
    /// # Errors
    ///
    /// Returns [`QualityError::UnscorableText`] when the text has zero
    /// words or zero sentences, on which the readability formulas are
    /// undefined. No NaN or infinity is ever produced.
    pub fn score(&self, text: &str) -> Result<FeatureVector> {
        let word_count = self.words.tokenize(text).len();
        if word_count == 0 {
            return Err(QualityError::UnscorableText {
                reason: "text contains no words",
            });
        }
        let sentence_count = self.sentences.tokenize(text).len();
        if sentence_count == 0 {
            return Err(QualityError::UnscorableText {
                reason: "text contains no sentences",
            });
        }

        let characters = text.chars().count() as f32;
        let words = word_count as f32;
        let sentences = sentence_count as f32;

        // Automated Readability Index.
        let readability = 4.71 * (characters / words) + 0.5 * (words / sentences) - 21.43;

        // Coleman-Liau: letters and sentences per 100 words.
        let l = (characters / words) * 100.0;
        let s = (sentences / words) * 100.0;
        let coleman_liau = 0.0588 * l - 0.296 * s - 15.8;

        let sentiment = self.sentiment.analyze(text);

        Ok(FeatureVector {
            readability,
            subjectivity: sentiment.subjectivity,
            polarity: sentiment.polarity,
            word_count: words,
            coleman_liau,
        })
    }
}

impl Default for TextScorer {
    fn default() -> Self {
        Self::new()
    }
}
