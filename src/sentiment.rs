//! Sentiment collaborator: given text, produce polarity and subjectivity.
//!
//! The feature scorer only depends on the [`SentimentModel`] trait; the
//! bundled [`LexiconSentiment`] is a small weighted keyword model good
//! enough for short review text, and callers can swap in anything that
//! honors the output ranges.

use std::collections::HashMap;

use crate::text::tokenize::{Tokenizer, WordTokenizer};

/// Sentiment analysis output.
///
/// `polarity` lies in `[-1, 1]` (negative to positive) and
/// `subjectivity` in `[0, 1]` (objective to subjective).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SentimentScore {
    /// Negative-to-positive leaning of the text.
    pub polarity: f32,
    /// Objective-to-subjective leaning of the text.
    pub subjectivity: f32,
}

impl SentimentScore {
    /// A neutral, fully objective score.
    #[must_use]
    pub fn neutral() -> Self {
        Self {
            polarity: 0.0,
            subjectivity: 0.0,
        }
    }
}

/// Maps text to a [`SentimentScore`].
pub trait SentimentModel {
    /// Analyzes `text`; must keep polarity in `[-1, 1]` and
    /// subjectivity in `[0, 1]`.
    fn analyze(&self, text: &str) -> SentimentScore;
}

/// Keyword-lexicon sentiment model.
///
/// Each lexicon entry carries a polarity and a subjectivity weight; the
/// score of a text is the average over all matched words, and a text
/// with no matches is neutral.
///
/// # Examples
///
/// ```
/// use calificar::sentiment::{LexiconSentiment, SentimentModel};
///
/// let model = LexiconSentiment::new();
/// let score = model.analyze("The food was wonderful!");
/// assert!(score.polarity > 0.5);
///
/// let score = model.analyze("Terrible, awful service.");
/// assert!(score.polarity < -0.5);
/// ```
#[derive(Debug, Clone)]
pub struct LexiconSentiment {
    lexicon: HashMap<&'static str, (f32, f32)>,
    tokenizer: WordTokenizer,
}

/// (word, polarity, subjectivity) entries for short restaurant-review text.
const LEXICON: &[(&str, f32, f32)] = &[
    ("good", 0.7, 0.6),
    ("great", 0.8, 0.75),
    ("excellent", 1.0, 1.0),
    ("awesome", 1.0, 1.0),
    ("fantastic", 0.9, 0.9),
    ("wonderful", 1.0, 1.0),
    ("amazing", 0.9, 0.9),
    ("friendly", 0.6, 0.7),
    ("delicious", 0.9, 0.9),
    ("tasty", 0.7, 0.8),
    ("nice", 0.6, 0.9),
    ("best", 1.0, 0.3),
    ("love", 0.6, 0.6),
    ("fresh", 0.4, 0.6),
    ("fine", 0.3, 0.5),
    ("okay", 0.2, 0.5),
    ("average", -0.1, 0.4),
    ("mediocre", -0.3, 0.6),
    ("slow", -0.3, 0.4),
    ("bland", -0.4, 0.7),
    ("bad", -0.7, 0.65),
    ("poor", -0.5, 0.6),
    ("rude", -0.6, 0.9),
    ("terrible", -1.0, 1.0),
    ("horrible", -1.0, 1.0),
    ("awful", -1.0, 1.0),
    ("gross", -0.7, 0.9),
    ("disgusting", -0.9, 1.0),
    ("worst", -1.0, 0.3),
];

impl LexiconSentiment {
    /// Creates the bundled review-keyword model.
    #[must_use]
    pub fn new() -> Self {
        Self {
            lexicon: LEXICON
                .iter()
                .map(|&(word, polarity, subjectivity)| (word, (polarity, subjectivity)))
                .collect(),
            tokenizer: WordTokenizer::new(),
        }
    }
}

impl Default for LexiconSentiment {
    fn default() -> Self {
        Self::new()
    }
}

impl SentimentModel for LexiconSentiment {
    fn analyze(&self, text: &str) -> SentimentScore {
        let mut polarity_sum = 0.0;
        let mut subjectivity_sum = 0.0;
        let mut matches = 0usize;

        for token in self.tokenizer.tokenize(text) {
            if let Some(&(polarity, subjectivity)) = self.lexicon.get(token.to_lowercase().as_str())
            {
                polarity_sum += polarity;
                subjectivity_sum += subjectivity;
                matches += 1;
            }
        }

        if matches == 0 {
            return SentimentScore::neutral();
        }

        let n = matches as f32;
        SentimentScore {
            polarity: (polarity_sum / n).clamp(-1.0, 1.0),
            subjectivity: (subjectivity_sum / n).clamp(0.0, 1.0),
        }
    }
}
