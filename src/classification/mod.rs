//! Decision models fitted over vectorized text.
//!
//! Two fixed models back the classifier variants: an instance-based
//! k-nearest-neighbors voter and a multinomial (softmax) logistic
//! regression trained by batch gradient descent. Both operate on the
//! dense document-term matrices produced by the vectorizers and are
//! read-only after fitting.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{QualityError, Result};
use crate::primitives::Matrix;

/// K-nearest-neighbors classifier over tier codes.
///
/// A lazy learner: `fit` stores the training matrix and its `{-1, 0, 1}`
/// labels, and each prediction takes a Euclidean majority vote among the
/// `k` nearest training rows. Ties break toward the lower code, which
/// keeps predictions deterministic.
///
/// # Examples
///
/// ```
/// use calificar::classification::KNearestNeighbors;
/// use calificar::primitives::Matrix;
///
/// let x = Matrix::from_vec(4, 2, vec![
///     0.0, 0.0,
///     0.0, 1.0,
///     5.0, 5.0,
///     5.0, 6.0,
/// ]).expect("4x2 matrix");
/// let y = vec![-1, -1, 1, 1];
///
/// let mut knn = KNearestNeighbors::new(1);
/// knn.fit(&x, &y).expect("valid training data");
/// assert_eq!(knn.predict_one(&[0.2, 0.3]).expect("fitted model"), -1);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KNearestNeighbors {
    k: usize,
    x_train: Option<Matrix<f32>>,
    y_train: Option<Vec<i8>>,
}

impl KNearestNeighbors {
    /// Creates a classifier voting among `k` neighbors.
    #[must_use]
    pub fn new(k: usize) -> Self {
        Self {
            k,
            x_train: None,
            y_train: None,
        }
    }

    /// Stores the training data.
    ///
    /// Calling `fit` again replaces the stored data wholesale.
    ///
    /// # Errors
    ///
    /// Fails on zero samples, a feature/label length mismatch, or
    /// `k` outside `1..=n_samples`.
    pub fn fit(&mut self, x: &Matrix<f32>, y: &[i8]) -> Result<()> {
        let (n_samples, _) = x.shape();
        if n_samples == 0 {
            return Err(QualityError::EmptyInput {
                what: "training samples",
            });
        }
        if y.len() != n_samples {
            return Err(QualityError::DimensionMismatch {
                expected: n_samples,
                actual: y.len(),
            });
        }
        if self.k == 0 || self.k > n_samples {
            return Err(QualityError::InvalidNeighborCount {
                k: self.k,
                n_samples,
            });
        }

        self.x_train = Some(x.clone());
        self.y_train = Some(y.to_vec());
        Ok(())
    }

    /// Predicts the tier code for one feature vector.
    ///
    /// # Errors
    ///
    /// Returns [`QualityError::NotFitted`] before `fit`, or a dimension
    /// mismatch if the vector width differs from the training matrix.
    pub fn predict_one(&self, features: &[f32]) -> Result<i8> {
        let x_train = self.x_train.as_ref().ok_or(QualityError::NotFitted)?;
        let y_train = self.y_train.as_ref().ok_or(QualityError::NotFitted)?;

        let (n_train, n_features) = x_train.shape();
        if features.len() != n_features {
            return Err(QualityError::DimensionMismatch {
                expected: n_features,
                actual: features.len(),
            });
        }

        let mut distances: Vec<(f32, i8)> = Vec::with_capacity(n_train);
        for (row, &label) in y_train.iter().enumerate() {
            distances.push((euclidean(features, x_train.row(row)), label));
        }
        distances.sort_by(|a, b| a.0.total_cmp(&b.0));

        Ok(majority_vote(&distances[..self.k]))
    }

    /// Predicts tier codes for every row of `x`.
    ///
    /// # Errors
    ///
    /// Same error conditions as [`Self::predict_one`].
    pub fn predict(&self, x: &Matrix<f32>) -> Result<Vec<i8>> {
        (0..x.n_rows()).map(|row| self.predict_one(x.row(row))).collect()
    }
}

impl Default for KNearestNeighbors {
    /// Three neighbors, the voting width used for tier prediction.
    fn default() -> Self {
        Self::new(3)
    }
}

fn euclidean(a: &[f32], b: &[f32]) -> f32 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| (x - y) * (x - y))
        .sum::<f32>()
        .sqrt()
}

/// Majority vote among neighbors; ties go to the lower code.
fn majority_vote(neighbors: &[(f32, i8)]) -> i8 {
    let mut counts: BTreeMap<i8, usize> = BTreeMap::new();
    for &(_, label) in neighbors {
        *counts.entry(label).or_insert(0) += 1;
    }

    let mut winner = neighbors[0].1;
    let mut best = 0usize;
    for (&label, &count) in &counts {
        if count > best {
            winner = label;
            best = count;
        }
    }
    winner
}

/// Multinomial logistic regression (softmax) classifier.
///
/// Fits one linear decision boundary per class over the input vectors
/// using batch gradient descent on the cross-entropy loss, and predicts
/// the class with the highest posterior probability.
///
/// # Examples
///
/// ```
/// use calificar::classification::SoftmaxRegression;
/// use calificar::primitives::Matrix;
///
/// let x = Matrix::from_vec(4, 2, vec![
///     0.0, 0.0,
///     0.0, 1.0,
///     5.0, 5.0,
///     5.0, 6.0,
/// ]).expect("4x2 matrix");
/// let y = vec![0, 0, 1, 1];
///
/// let mut model = SoftmaxRegression::new(2);
/// model.fit(&x, &y).expect("valid training data");
/// let predictions = model.predict(&x).expect("fitted model");
/// assert_eq!(predictions, vec![0, 0, 1, 1]);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SoftmaxRegression {
    /// Per-class weight rows (`n_classes` x `n_features`), set by `fit`.
    weights: Option<Matrix<f32>>,
    /// Per-class bias terms.
    intercepts: Vec<f32>,
    n_classes: usize,
    learning_rate: f32,
    max_iter: usize,
    tol: f32,
}

impl SoftmaxRegression {
    /// Creates a classifier over `n_classes` classes with default
    /// hyperparameters.
    #[must_use]
    pub fn new(n_classes: usize) -> Self {
        Self {
            weights: None,
            intercepts: Vec::new(),
            n_classes,
            learning_rate: 0.1,
            max_iter: 500,
            tol: 1e-4,
        }
    }

    /// Sets the gradient-descent learning rate.
    #[must_use]
    pub fn with_learning_rate(mut self, learning_rate: f32) -> Self {
        self.learning_rate = learning_rate;
        self
    }

    /// Sets the maximum number of iterations.
    #[must_use]
    pub fn with_max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = max_iter;
        self
    }

    /// Sets the convergence tolerance on the gradient.
    #[must_use]
    pub fn with_tolerance(mut self, tol: f32) -> Self {
        self.tol = tol;
        self
    }

    /// Fits the decision boundaries to the training data.
    ///
    /// Calling `fit` again replaces the fitted weights wholesale.
    ///
    /// # Errors
    ///
    /// Fails on zero samples, a feature/label length mismatch, or a
    /// label outside `0..n_classes`.
    pub fn fit(&mut self, x: &Matrix<f32>, y: &[usize]) -> Result<()> {
        let (n_samples, n_features) = x.shape();
        if n_samples == 0 {
            return Err(QualityError::EmptyInput {
                what: "training samples",
            });
        }
        if y.len() != n_samples {
            return Err(QualityError::DimensionMismatch {
                expected: n_samples,
                actual: y.len(),
            });
        }
        for &label in y {
            if label >= self.n_classes {
                return Err(QualityError::InvalidClassLabel {
                    label,
                    n_classes: self.n_classes,
                });
            }
        }

        let mut weights = vec![0.0f32; self.n_classes * n_features];
        let mut intercepts = vec![0.0f32; self.n_classes];

        for _ in 0..self.max_iter {
            let mut weight_grad = vec![0.0f32; self.n_classes * n_features];
            let mut intercept_grad = vec![0.0f32; self.n_classes];

            for (i, &label) in y.iter().enumerate() {
                let probs = softmax_row(&weights, &intercepts, self.n_classes, x.row(i));
                for (c, &p) in probs.iter().enumerate() {
                    let error = p - if c == label { 1.0 } else { 0.0 };
                    intercept_grad[c] += error;
                    for (j, &value) in x.row(i).iter().enumerate() {
                        weight_grad[c * n_features + j] += error * value;
                    }
                }
            }

            let n = n_samples as f32;
            let mut max_grad = 0.0f32;
            for (w, g) in weights.iter_mut().zip(weight_grad.iter()) {
                let g = g / n;
                *w -= self.learning_rate * g;
                max_grad = max_grad.max(g.abs());
            }
            for (b, g) in intercepts.iter_mut().zip(intercept_grad.iter()) {
                let g = g / n;
                *b -= self.learning_rate * g;
                max_grad = max_grad.max(g.abs());
            }

            if max_grad < self.tol {
                break;
            }
        }

        self.weights = Some(Matrix::from_vec(self.n_classes, n_features, weights)?);
        self.intercepts = intercepts;
        Ok(())
    }

    /// Returns per-class probabilities for one feature vector.
    ///
    /// # Errors
    ///
    /// Returns [`QualityError::NotFitted`] before `fit`, or a dimension
    /// mismatch if the vector width differs from the fitted weights.
    pub fn predict_proba_one(&self, features: &[f32]) -> Result<Vec<f32>> {
        let weights = self.weights.as_ref().ok_or(QualityError::NotFitted)?;
        let (_, n_features) = weights.shape();
        if features.len() != n_features {
            return Err(QualityError::DimensionMismatch {
                expected: n_features,
                actual: features.len(),
            });
        }

        let mut scores = Vec::with_capacity(self.n_classes);
        for c in 0..self.n_classes {
            let mut z = self.intercepts[c];
            for (j, &value) in features.iter().enumerate() {
                z += weights.get(c, j) * value;
            }
            scores.push(z);
        }
        Ok(stable_softmax(&scores))
    }

    /// Predicts the class index for one feature vector.
    ///
    /// # Errors
    ///
    /// Same error conditions as [`Self::predict_proba_one`].
    pub fn predict_one(&self, features: &[f32]) -> Result<usize> {
        let probs = self.predict_proba_one(features)?;
        let mut best = 0usize;
        for (c, &p) in probs.iter().enumerate() {
            if p > probs[best] {
                best = c;
            }
        }
        Ok(best)
    }

    /// Predicts class indices for every row of `x`.
    ///
    /// # Errors
    ///
    /// Same error conditions as [`Self::predict_proba_one`].
    pub fn predict(&self, x: &Matrix<f32>) -> Result<Vec<usize>> {
        (0..x.n_rows()).map(|row| self.predict_one(x.row(row))).collect()
    }
}

impl Default for SoftmaxRegression {
    /// Three classes, one per quality tier.
    fn default() -> Self {
        Self::new(3)
    }
}

/// Softmax of one linear layer evaluated on `features`.
fn softmax_row(weights: &[f32], intercepts: &[f32], n_classes: usize, features: &[f32]) -> Vec<f32> {
    let n_features = features.len();
    let mut scores = Vec::with_capacity(n_classes);
    for c in 0..n_classes {
        let mut z = intercepts[c];
        for (j, &value) in features.iter().enumerate() {
            z += weights[c * n_features + j] * value;
        }
        scores.push(z);
    }
    stable_softmax(&scores)
}

/// Softmax with max-subtraction so large scores cannot overflow.
fn stable_softmax(scores: &[f32]) -> Vec<f32> {
    let max = scores.iter().copied().fold(f32::NEG_INFINITY, f32::max);
    let exps: Vec<f32> = scores.iter().map(|&z| (z - max).exp()).collect();
    let sum: f32 = exps.iter().sum();
    exps.iter().map(|&e| e / sum).collect()
}
