//! Vectorizers that map documents into numeric feature space.

use std::collections::{BTreeMap, HashMap};

use crate::error::{QualityError, Result};
use crate::primitives::Matrix;
use crate::text::tokenize::{Tokenizer, WordTokenizer};

/// Bag-of-words vectorizer producing token-count vectors.
///
/// `fit` learns a vocabulary from the training documents; `transform`
/// maps documents onto that fixed vocabulary. Tokens outside the
/// vocabulary are skipped, so unseen words contribute zero signal.
///
/// # Examples
///
/// ```
/// use calificar::text::CountVectorizer;
///
/// let docs = vec!["hello world", "hello rust"];
/// let mut vectorizer = CountVectorizer::new();
/// let matrix = vectorizer.fit_transform(&docs).expect("two non-empty documents");
/// assert_eq!(matrix.shape(), (2, 3));
/// ```
#[derive(Debug, Clone)]
pub struct CountVectorizer {
    tokenizer: WordTokenizer,
    vocabulary: HashMap<String, usize>,
    lowercase: bool,
}

impl CountVectorizer {
    /// Creates a new count vectorizer with lowercasing enabled.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tokenizer: WordTokenizer::new(),
            vocabulary: HashMap::new(),
            lowercase: true,
        }
    }

    /// Sets whether tokens are lowercased before counting.
    #[must_use]
    pub fn with_lowercase(mut self, lowercase: bool) -> Self {
        self.lowercase = lowercase;
        self
    }

    fn tokens(&self, text: &str) -> Vec<String> {
        self.tokenizer
            .tokenize(text)
            .into_iter()
            .map(|t| if self.lowercase { t.to_lowercase() } else { t })
            .collect()
    }

    /// Learns the vocabulary from `documents`.
    ///
    /// Vocabulary indices are assigned in lexicographic term order, which
    /// makes fitted state deterministic for a given document collection.
    ///
    /// # Errors
    ///
    /// Returns [`QualityError::EmptyInput`] if `documents` is empty or no
    /// document contains a single token.
    pub fn fit<S: AsRef<str>>(&mut self, documents: &[S]) -> Result<()> {
        if documents.is_empty() {
            return Err(QualityError::EmptyInput { what: "documents" });
        }

        let mut terms: BTreeMap<String, ()> = BTreeMap::new();
        for doc in documents {
            for token in self.tokens(doc.as_ref()) {
                terms.entry(token).or_insert(());
            }
        }
        if terms.is_empty() {
            return Err(QualityError::EmptyInput { what: "vocabulary" });
        }

        self.vocabulary = terms
            .into_keys()
            .enumerate()
            .map(|(idx, term)| (term, idx))
            .collect();
        Ok(())
    }

    /// Transforms documents into a count matrix over the fitted vocabulary.
    ///
    /// # Errors
    ///
    /// Returns [`QualityError::NotFitted`] before `fit`, or
    /// [`QualityError::EmptyInput`] for an empty document collection.
    pub fn transform<S: AsRef<str>>(&self, documents: &[S]) -> Result<Matrix<f32>> {
        if documents.is_empty() {
            return Err(QualityError::EmptyInput { what: "documents" });
        }

        let vocab_size = self.vocabulary_size();
        let mut data = Vec::with_capacity(documents.len() * vocab_size);
        for doc in documents {
            data.extend(self.transform_one(doc.as_ref())?);
        }
        Matrix::from_vec(documents.len(), vocab_size, data)
    }

    /// Transforms a single document into a count vector.
    ///
    /// # Errors
    ///
    /// Returns [`QualityError::NotFitted`] before `fit`.
    pub fn transform_one(&self, text: &str) -> Result<Vec<f32>> {
        if self.vocabulary.is_empty() {
            return Err(QualityError::NotFitted);
        }

        let mut counts = vec![0.0; self.vocabulary.len()];
        for token in self.tokens(text) {
            if let Some(&idx) = self.vocabulary.get(&token) {
                counts[idx] += 1.0;
            }
        }
        Ok(counts)
    }

    /// Fits the vocabulary and transforms the same documents in one step.
    ///
    /// # Errors
    ///
    /// Propagates the `fit` and `transform` error conditions.
    pub fn fit_transform<S: AsRef<str>>(&mut self, documents: &[S]) -> Result<Matrix<f32>> {
        self.fit(documents)?;
        self.transform(documents)
    }

    /// Returns the fitted vocabulary size (zero before `fit`).
    #[must_use]
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }
}

impl Default for CountVectorizer {
    fn default() -> Self {
        Self::new()
    }
}

/// TF-IDF vectorizer over the [`CountVectorizer`] vocabulary.
///
/// Uses the smoothed inverse document frequency
/// `idf(t) = ln((1 + N) / (1 + df(t))) + 1` and L2-normalizes each
/// document vector, so nearest-neighbor distances compare term profiles
/// rather than document lengths.
///
/// # Examples
///
/// ```
/// use calificar::text::TfidfVectorizer;
///
/// let docs = vec!["the cat sat on the mat", "the dog sat on the log"];
/// let mut vectorizer = TfidfVectorizer::new();
/// let matrix = vectorizer.fit_transform(&docs).expect("two non-empty documents");
/// assert_eq!(matrix.n_rows(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct TfidfVectorizer {
    counts: CountVectorizer,
    idf: Vec<f32>,
}

impl TfidfVectorizer {
    /// Creates a new TF-IDF vectorizer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            counts: CountVectorizer::new(),
            idf: Vec::new(),
        }
    }

    /// Learns vocabulary and inverse document frequencies from `documents`.
    ///
    /// # Errors
    ///
    /// Same error conditions as [`CountVectorizer::fit`].
    pub fn fit<S: AsRef<str>>(&mut self, documents: &[S]) -> Result<()> {
        let counts = self.counts.fit_transform(documents)?;
        let (n_docs, vocab_size) = counts.shape();

        let mut df = vec![0usize; vocab_size];
        for row in 0..n_docs {
            for (col, df_entry) in df.iter_mut().enumerate() {
                if counts.get(row, col) > 0.0 {
                    *df_entry += 1;
                }
            }
        }

        self.idf = df
            .iter()
            .map(|&d| ((1.0 + n_docs as f32) / (1.0 + d as f32)).ln() + 1.0)
            .collect();
        Ok(())
    }

    /// Transforms documents into an L2-normalized TF-IDF matrix.
    ///
    /// # Errors
    ///
    /// Returns [`QualityError::NotFitted`] before `fit`, or
    /// [`QualityError::EmptyInput`] for an empty document collection.
    pub fn transform<S: AsRef<str>>(&self, documents: &[S]) -> Result<Matrix<f32>> {
        if documents.is_empty() {
            return Err(QualityError::EmptyInput { what: "documents" });
        }

        let vocab_size = self.counts.vocabulary_size();
        let mut data = Vec::with_capacity(documents.len() * vocab_size);
        for doc in documents {
            data.extend(self.transform_one(doc.as_ref())?);
        }
        Matrix::from_vec(documents.len(), vocab_size, data)
    }

    /// Transforms a single document into an L2-normalized TF-IDF vector.
    ///
    /// A document with no in-vocabulary tokens maps to the zero vector.
    ///
    /// # Errors
    ///
    /// Returns [`QualityError::NotFitted`] before `fit`.
    pub fn transform_one(&self, text: &str) -> Result<Vec<f32>> {
        if self.idf.is_empty() {
            return Err(QualityError::NotFitted);
        }

        let mut vector = self.counts.transform_one(text)?;
        for (value, &idf) in vector.iter_mut().zip(self.idf.iter()) {
            *value *= idf;
        }

        let norm = vector.iter().map(|v| v * v).sum::<f32>().sqrt();
        if norm > 0.0 {
            for value in &mut vector {
                *value /= norm;
            }
        }
        Ok(vector)
    }

    /// Fits and transforms the same documents in one step.
    ///
    /// # Errors
    ///
    /// Propagates the `fit` and `transform` error conditions.
    pub fn fit_transform<S: AsRef<str>>(&mut self, documents: &[S]) -> Result<Matrix<f32>> {
        self.fit(documents)?;
        self.transform(documents)
    }

    /// Returns the fitted vocabulary size (zero before `fit`).
    #[must_use]
    pub fn vocabulary_size(&self) -> usize {
        self.counts.vocabulary_size()
    }
}

impl Default for TfidfVectorizer {
    fn default() -> Self {
        Self::new()
    }
}
