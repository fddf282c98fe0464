//! Comparative evaluation of the two classifier variants.

use log::info;
use serde::{Deserialize, Serialize};

use crate::error::{QualityError, Result};
use crate::quality::{KnnQuality, LinearQuality, QualityClassifier};
use crate::tier::Tier;

/// Held-out accuracies of both classifier variants.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComparisonReport {
    /// Accuracy of the distance-based variant.
    pub knn_accuracy: f32,
    /// Accuracy of the linear-probabilistic variant.
    pub linear_accuracy: f32,
    /// Number of test records both variants were scored on.
    pub n_test: usize,
}

/// Trains both variants on the same training partition and scores them
/// on the same held-out partition.
///
/// Each variant is fitted independently; predictions and true labels
/// are compared in the canonical `{-1, 0, 1}` encoding and accuracy is
/// `correct / n_test` per variant.
///
/// # Errors
///
/// Fails fast on length-mismatched partitions, an empty training
/// partition, or an empty test partition, and propagates any training
/// or prediction failure.
///
/// # Examples
///
/// ```
/// use calificar::evaluate::compare;
/// use calificar::Tier;
///
/// let train: Vec<String> = [
///     "terrible awful food", "horrible awful service", "gross terrible place",
///     "okay average meal", "average okay place", "fine okay service",
///     "wonderful excellent food", "excellent fantastic place", "wonderful fantastic service",
/// ].iter().map(|s| s.to_string()).collect();
/// let train_labels = vec![
///     Tier::Low, Tier::Low, Tier::Low,
///     Tier::Medium, Tier::Medium, Tier::Medium,
///     Tier::High, Tier::High, Tier::High,
/// ];
/// let test: Vec<String> = [
///     "awful terrible service",
///     "wonderful excellent place",
/// ].iter().map(|s| s.to_string()).collect();
/// let test_labels = vec![Tier::Low, Tier::High];
///
/// let report = compare(&train, &train_labels, &test, &test_labels)
///     .expect("valid partitions");
/// assert_eq!(report.n_test, 2);
/// assert!(report.knn_accuracy > 0.0);
/// ```
pub fn compare(
    train_texts: &[String],
    train_labels: &[Tier],
    test_texts: &[String],
    test_labels: &[Tier],
) -> Result<ComparisonReport> {
    if test_texts.len() != test_labels.len() {
        return Err(QualityError::DimensionMismatch {
            expected: test_texts.len(),
            actual: test_labels.len(),
        });
    }
    if test_texts.is_empty() {
        return Err(QualityError::EmptyTestSet);
    }

    let mut knn = KnnQuality::new();
    knn.train(train_texts, train_labels)?;
    let mut linear = LinearQuality::new();
    linear.train(train_texts, train_labels)?;

    let mut knn_correct = 0usize;
    let mut linear_correct = 0usize;
    for (text, expected) in test_texts.iter().zip(test_labels.iter()) {
        let truth = expected.encode();
        if knn.predict(text)?.encode() == truth {
            knn_correct += 1;
        }
        if linear.predict(text)?.encode() == truth {
            linear_correct += 1;
        }
    }

    let n_test = test_texts.len();
    let report = ComparisonReport {
        knn_accuracy: knn_correct as f32 / n_test as f32,
        linear_accuracy: linear_correct as f32 / n_test as f32,
        n_test,
    };
    info!(
        "evaluated {} test records: knn accuracy {:.3}, linear accuracy {:.3}",
        report.n_test, report.knn_accuracy, report.linear_accuracy
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn partitions() -> (Vec<String>, Vec<Tier>, Vec<String>, Vec<Tier>) {
        let train: Vec<String> = [
            "terrible awful horrible food",
            "awful horrible gross service",
            "terrible gross awful place",
            "okay average fine meal",
            "average fine okay spot",
            "okay fine average service",
            "wonderful excellent fantastic food",
            "excellent fantastic delicious spot",
            "wonderful delicious excellent service",
        ]
        .iter()
        .map(|s| (*s).to_string())
        .collect();
        let train_labels = vec![
            Tier::Low,
            Tier::Low,
            Tier::Low,
            Tier::Medium,
            Tier::Medium,
            Tier::Medium,
            Tier::High,
            Tier::High,
            Tier::High,
        ];
        let test: Vec<String> = [
            "awful terrible food",
            "average okay meal",
            "excellent wonderful food",
        ]
        .iter()
        .map(|s| (*s).to_string())
        .collect();
        let test_labels = vec![Tier::Low, Tier::Medium, Tier::High];
        (train, train_labels, test, test_labels)
    }

    #[test]
    fn test_compare_reports_both_variants() {
        let (train, train_labels, test, test_labels) = partitions();
        let report = compare(&train, &train_labels, &test, &test_labels)
            .expect("valid partitions");

        assert_eq!(report.n_test, 3);
        assert!((0.0..=1.0).contains(&report.knn_accuracy));
        assert!((0.0..=1.0).contains(&report.linear_accuracy));
        // Fully separable vocabulary: both variants should be well
        // above chance.
        assert!(report.knn_accuracy > 1.0 / 3.0);
        assert!(report.linear_accuracy > 1.0 / 3.0);
    }

    #[test]
    fn test_compare_rejects_empty_test_set() {
        let (train, train_labels, _, _) = partitions();
        assert!(matches!(
            compare(&train, &train_labels, &[], &[]),
            Err(QualityError::EmptyTestSet)
        ));
    }

    #[test]
    fn test_compare_rejects_mismatched_test_lengths() {
        let (train, train_labels, test, mut test_labels) = partitions();
        test_labels.pop();
        assert!(matches!(
            compare(&train, &train_labels, &test, &test_labels),
            Err(QualityError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn test_compare_rejects_empty_training_set() {
        let (_, _, test, test_labels) = partitions();
        assert!(matches!(
            compare(&[], &[], &test, &test_labels),
            Err(QualityError::EmptyInput { .. })
        ));
    }
}
