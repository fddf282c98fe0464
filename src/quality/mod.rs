//! The two review-quality classifier variants.
//!
//! Each variant owns a fitted vectorizer and a fitted decision model and
//! exposes the same [`QualityClassifier`] contract, so the evaluation
//! harness can treat them uniformly. Fitted state is never shared
//! between variants.

use log::debug;

use crate::classification::{KNearestNeighbors, SoftmaxRegression};
use crate::error::{QualityError, Result};
use crate::text::{CountVectorizer, TfidfVectorizer};
use crate::tier::Tier;

/// Neighbors consulted by the distance-based variant.
const KNN_NEIGHBORS: usize = 3;

/// A trainable text-to-tier classifier.
///
/// `train` fits the variant's vectorizer on the training texts and then
/// its decision model; calling it again replaces all fitted state rather
/// than merging. `predict` before `train` fails with
/// [`QualityError::NotFitted`].
pub trait QualityClassifier {
    /// Fits the classifier on paired texts and tiers.
    ///
    /// # Errors
    ///
    /// Fails fast on empty or length-mismatched training data.
    fn train(&mut self, texts: &[String], labels: &[Tier]) -> Result<()>;

    /// Predicts the tier of one text.
    ///
    /// Tokens unseen during training contribute no signal.
    ///
    /// # Errors
    ///
    /// Returns [`QualityError::NotFitted`] before `train`.
    fn predict(&self, text: &str) -> Result<Tier>;
}

fn check_training_input(texts: &[String], labels: &[Tier]) -> Result<()> {
    if texts.len() != labels.len() {
        return Err(QualityError::DimensionMismatch {
            expected: texts.len(),
            actual: labels.len(),
        });
    }
    if texts.is_empty() {
        return Err(QualityError::EmptyInput {
            what: "training texts",
        });
    }
    Ok(())
}

/// Distance-based variant: TF-IDF vectors and a k-nearest-neighbors vote.
///
/// # Examples
///
/// ```
/// use calificar::quality::{KnnQuality, QualityClassifier};
/// use calificar::Tier;
///
/// let texts: Vec<String> = [
///     "terrible awful food",
///     "horrible awful service",
///     "okay average meal",
///     "average okay place",
///     "wonderful excellent food",
///     "excellent wonderful service",
/// ].iter().map(|s| s.to_string()).collect();
/// let labels = vec![
///     Tier::Low, Tier::Low, Tier::Medium, Tier::Medium, Tier::High, Tier::High,
/// ];
///
/// let mut classifier = KnnQuality::new();
/// classifier.train(&texts, &labels).expect("valid training data");
/// let tier = classifier.predict("wonderful excellent meal").expect("trained model");
/// assert_eq!(tier, Tier::High);
/// ```
#[derive(Debug, Clone, Default)]
pub struct KnnQuality {
    vectorizer: TfidfVectorizer,
    model: KNearestNeighbors,
}

impl KnnQuality {
    /// Creates an untrained distance-based classifier.
    #[must_use]
    pub fn new() -> Self {
        Self {
            vectorizer: TfidfVectorizer::new(),
            model: KNearestNeighbors::new(KNN_NEIGHBORS),
        }
    }
}

impl QualityClassifier for KnnQuality {
    fn train(&mut self, texts: &[String], labels: &[Tier]) -> Result<()> {
        check_training_input(texts, labels)?;

        // Fresh fitted state on every call.
        self.vectorizer = TfidfVectorizer::new();
        self.model = KNearestNeighbors::new(KNN_NEIGHBORS);

        let x = self.vectorizer.fit_transform(texts)?;
        let y: Vec<i8> = labels.iter().map(|tier| tier.encode()).collect();
        debug!(
            "training knn variant: {} samples, vocabulary {}",
            texts.len(),
            self.vectorizer.vocabulary_size()
        );
        self.model.fit(&x, &y)
    }

    fn predict(&self, text: &str) -> Result<Tier> {
        let vector = self.vectorizer.transform_one(text)?;
        let code = self.model.predict_one(&vector)?;
        Tier::try_from_code(code)
    }
}

/// Linear-probabilistic variant: token counts and softmax regression.
///
/// # Examples
///
/// ```
/// use calificar::quality::{LinearQuality, QualityClassifier};
/// use calificar::Tier;
///
/// let texts: Vec<String> = [
///     "terrible awful food",
///     "horrible awful service",
///     "okay average meal",
///     "average okay place",
///     "wonderful excellent food",
///     "excellent wonderful service",
/// ].iter().map(|s| s.to_string()).collect();
/// let labels = vec![
///     Tier::Low, Tier::Low, Tier::Medium, Tier::Medium, Tier::High, Tier::High,
/// ];
///
/// let mut classifier = LinearQuality::new();
/// classifier.train(&texts, &labels).expect("valid training data");
/// let tier = classifier.predict("awful terrible service").expect("trained model");
/// assert_eq!(tier, Tier::Low);
/// ```
#[derive(Debug, Clone, Default)]
pub struct LinearQuality {
    vectorizer: CountVectorizer,
    model: SoftmaxRegression,
}

impl LinearQuality {
    /// Creates an untrained linear-probabilistic classifier.
    #[must_use]
    pub fn new() -> Self {
        Self {
            vectorizer: CountVectorizer::new(),
            model: SoftmaxRegression::new(3),
        }
    }
}

impl QualityClassifier for LinearQuality {
    fn train(&mut self, texts: &[String], labels: &[Tier]) -> Result<()> {
        check_training_input(texts, labels)?;

        self.vectorizer = CountVectorizer::new();
        self.model = SoftmaxRegression::new(3);

        let x = self.vectorizer.fit_transform(texts)?;
        let y: Vec<usize> = labels.iter().map(|tier| tier.class_index()).collect();
        debug!(
            "training linear variant: {} samples, vocabulary {}",
            texts.len(),
            self.vectorizer.vocabulary_size()
        );
        self.model.fit(&x, &y)
    }

    fn predict(&self, text: &str) -> Result<Tier> {
        let vector = self.vectorizer.transform_one(text)?;
        let class = self.model.predict_one(&vector)?;
        Tier::try_from_code(class as i8 - 1)
    }
}
