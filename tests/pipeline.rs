//! End-to-end pipeline: raw review CSV through tier labeling,
//! partitioning, and side-by-side classifier evaluation.

use std::io::Cursor;

use calificar::dataset::{read_labeled, rewrite_categories};
use calificar::evaluate::compare;
use calificar::features::{QualityAggregator, TextScorer};
use calificar::model_selection::train_test_split;
use calificar::quality::{KnnQuality, QualityClassifier};
use calificar::Tier;

/// Eighteen reviews, six per tier, with distinctive per-tier vocabulary.
fn raw_csv() -> String {
    let rows: &[(&str, f32)] = &[
        ("terrible awful food and rude staff", 1.0),
        ("horrible disgusting meal, terrible place", 1.2),
        ("gross awful service, horrible visit", 1.5),
        ("rude staff and disgusting terrible food", 1.3),
        ("awful horrible gross experience", 1.1),
        ("terrible rude disgusting service", 1.7),
        ("okay average food, decent place", 2.5),
        ("fine ordinary meal, passable service", 3.0),
        ("decent average staff, okay visit", 2.8),
        ("passable fine food, ordinary place", 3.3),
        ("average okay decent experience", 2.2),
        ("ordinary passable fine service", 3.1),
        ("wonderful excellent food, amazing staff", 4.8),
        ("fantastic delicious meal, superb place", 4.5),
        ("amazing wonderful service, excellent visit", 5.0),
        ("superb fantastic staff, delicious food", 4.2),
        ("excellent amazing superb experience", 3.9),
        ("wonderful delicious fantastic service", 4.6),
    ];

    let mut csv = String::from("text,rating\n");
    for (text, rating) in rows {
        csv.push_str(&format!("\"{text}\",{rating}\n"));
    }
    csv
}

#[test]
fn test_full_pipeline_from_raw_csv() {
    // Numeric ratings become tier labels.
    let mut labeled = Vec::new();
    rewrite_categories(Cursor::new(raw_csv()), &mut labeled).expect("well-formed csv");

    let (texts, labels) = read_labeled(Cursor::new(labeled)).expect("labeled csv");
    assert_eq!(texts.len(), 18);
    for tier in [Tier::Low, Tier::Medium, Tier::High] {
        assert_eq!(labels.iter().filter(|&&l| l == tier).count(), 6);
    }

    // Seeded partition: floor(18 * 0.75) = 13 train, 5 test.
    let (train_texts, test_texts, train_labels, test_labels) =
        train_test_split(&texts, &labels, 0.25, Some(42)).expect("valid paired input");
    assert_eq!(train_texts.len(), 13);
    assert_eq!(test_texts.len(), 5);

    let report = compare(&train_texts, &train_labels, &test_texts, &test_labels)
        .expect("valid partitions");
    assert_eq!(report.n_test, 5);
    assert!((0.0..=1.0).contains(&report.knn_accuracy));
    assert!((0.0..=1.0).contains(&report.linear_accuracy));
    // The vocabulary is fully tier-separable, so both variants should
    // be comfortably above chance.
    assert!(report.knn_accuracy >= 0.6);
    assert!(report.linear_accuracy >= 0.6);
}

#[test]
fn test_seeded_pipeline_is_reproducible() {
    let mut labeled = Vec::new();
    rewrite_categories(Cursor::new(raw_csv()), &mut labeled).expect("well-formed csv");
    let (texts, labels) = read_labeled(Cursor::new(labeled)).expect("labeled csv");

    let run = || {
        let (train_texts, test_texts, train_labels, test_labels) =
            train_test_split(&texts, &labels, 0.25, Some(7)).expect("valid paired input");
        compare(&train_texts, &train_labels, &test_texts, &test_labels)
            .expect("valid partitions")
    };
    assert_eq!(run(), run());
}

#[test]
fn test_every_review_is_scorable() {
    let mut labeled = Vec::new();
    rewrite_categories(Cursor::new(raw_csv()), &mut labeled).expect("well-formed csv");
    let (texts, _) = read_labeled(Cursor::new(labeled)).expect("labeled csv");

    let scorer = TextScorer::new();
    let aggregator = QualityAggregator::new();
    for text in &texts {
        let features = scorer.score(text).expect("non-empty review text");
        let quality = aggregator.aggregate(&features);
        assert!((0.0..=1.0).contains(&quality), "quality out of range for {text:?}");
    }
}

#[test]
fn test_trained_classifier_generalizes_over_tier_vocabulary() {
    let mut labeled = Vec::new();
    rewrite_categories(Cursor::new(raw_csv()), &mut labeled).expect("well-formed csv");
    let (texts, labels) = read_labeled(Cursor::new(labeled)).expect("labeled csv");

    let mut classifier = KnnQuality::new();
    classifier.train(&texts, &labels).expect("valid training data");

    assert_eq!(
        classifier.predict("awful terrible meal").expect("trained"),
        Tier::Low
    );
    assert_eq!(
        classifier.predict("delicious wonderful meal").expect("trained"),
        Tier::High
    );
}
