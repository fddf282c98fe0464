//! Dataset partitioning into training and test subsets.
//!
//! The only non-determinism in the whole pipeline lives here: the
//! uniform shuffle before the cut. Pass a seed to make it reproducible;
//! omit it for process-level entropy.

use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::error::{QualityError, Result};

/// Splits `data` into `(train, test)` under `train_fraction`.
///
/// Produces a uniformly random permutation of the input and cuts it at
/// `floor(len * train_fraction)`; the two parts are disjoint and jointly
/// exhaustive over the input.
///
/// # Errors
///
/// Returns [`QualityError::InvalidFraction`] if `train_fraction` lies
/// outside `[0, 1]`.
///
/// # Examples
///
/// ```
/// use calificar::model_selection::split_data;
///
/// let data: Vec<u32> = (0..10).collect();
/// let (train, test) = split_data(&data, 0.7, Some(42)).expect("valid fraction");
/// assert_eq!(train.len(), 7);
/// assert_eq!(test.len(), 3);
/// ```
pub fn split_data<T: Clone>(
    data: &[T],
    train_fraction: f32,
    random_state: Option<u64>,
) -> Result<(Vec<T>, Vec<T>)> {
    if !(0.0..=1.0).contains(&train_fraction) {
        return Err(QualityError::InvalidFraction {
            value: train_fraction,
        });
    }

    let mut shuffled = data.to_vec();
    if let Some(seed) = random_state {
        let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
        shuffled.shuffle(&mut rng);
    } else {
        let mut rng = rand::thread_rng();
        shuffled.shuffle(&mut rng);
    }

    let cut = (data.len() as f32 * train_fraction).floor() as usize;
    let test = shuffled.split_off(cut);
    Ok((shuffled, test))
}

/// Splits paired feature and label sequences into train and test subsets.
///
/// One index permutation drives both sides, so `ys_train[i]` is always
/// the label originally paired with `xs_train[i]` (and likewise for the
/// test side).
///
/// # Errors
///
/// Fails fast with [`QualityError::DimensionMismatch`] when the
/// sequences differ in length, and [`QualityError::InvalidFraction`]
/// when `test_size` lies outside `[0, 1]`.
///
/// # Examples
///
/// ```
/// use calificar::model_selection::train_test_split;
///
/// let xs: Vec<String> = (0..8).map(|i| format!("text {i}")).collect();
/// let ys: Vec<u32> = (0..8).collect();
///
/// let (xs_train, xs_test, ys_train, ys_test) =
///     train_test_split(&xs, &ys, 0.25, Some(42)).expect("valid paired input");
/// assert_eq!(xs_train.len(), 6);
/// assert_eq!(xs_test.len(), 2);
/// assert_eq!(ys_train.len(), 6);
/// assert_eq!(ys_test.len(), 2);
/// ```
#[allow(clippy::type_complexity)]
pub fn train_test_split<X: Clone, Y: Clone>(
    xs: &[X],
    ys: &[Y],
    test_size: f32,
    random_state: Option<u64>,
) -> Result<(Vec<X>, Vec<X>, Vec<Y>, Vec<Y>)> {
    if xs.len() != ys.len() {
        return Err(QualityError::DimensionMismatch {
            expected: xs.len(),
            actual: ys.len(),
        });
    }
    if !(0.0..=1.0).contains(&test_size) {
        return Err(QualityError::InvalidFraction { value: test_size });
    }

    let indices: Vec<usize> = (0..xs.len()).collect();
    let (train_idx, test_idx) = split_data(&indices, 1.0 - test_size, random_state)?;

    Ok((
        gather(xs, &train_idx),
        gather(xs, &test_idx),
        gather(ys, &train_idx),
        gather(ys, &test_idx),
    ))
}

fn gather<T: Clone>(items: &[T], indices: &[usize]) -> Vec<T> {
    indices.iter().map(|&i| items[i].clone()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_split_lengths() {
        let data: Vec<u32> = (0..10).collect();
        let (train, test) = split_data(&data, 0.75, Some(1)).expect("valid fraction");
        // floor(10 * 0.75) = 7
        assert_eq!(train.len(), 7);
        assert_eq!(test.len(), 3);
    }

    #[test]
    fn test_split_is_disjoint_and_exhaustive() {
        let data: Vec<u32> = (0..50).collect();
        let (train, test) = split_data(&data, 0.6, Some(7)).expect("valid fraction");

        let train_set: HashSet<u32> = train.iter().copied().collect();
        let test_set: HashSet<u32> = test.iter().copied().collect();
        assert!(train_set.is_disjoint(&test_set));

        let mut all: Vec<u32> = train.into_iter().chain(test).collect();
        all.sort_unstable();
        assert_eq!(all, data);
    }

    #[test]
    fn test_split_extreme_fractions() {
        let data: Vec<u32> = (0..5).collect();

        let (train, test) = split_data(&data, 1.0, Some(3)).expect("valid fraction");
        assert_eq!(train.len(), 5);
        assert!(test.is_empty());

        let (train, test) = split_data(&data, 0.0, Some(3)).expect("valid fraction");
        assert!(train.is_empty());
        assert_eq!(test.len(), 5);
    }

    #[test]
    fn test_split_rejects_invalid_fraction() {
        let data = [1, 2, 3];
        assert!(matches!(
            split_data(&data, 1.5, None),
            Err(QualityError::InvalidFraction { .. })
        ));
        assert!(matches!(
            split_data(&data, -0.1, None),
            Err(QualityError::InvalidFraction { .. })
        ));
        assert!(matches!(
            split_data(&data, f32::NAN, None),
            Err(QualityError::InvalidFraction { .. })
        ));
    }

    #[test]
    fn test_seeded_split_is_reproducible() {
        let data: Vec<u32> = (0..30).collect();
        let first = split_data(&data, 0.5, Some(42)).expect("valid fraction");
        let second = split_data(&data, 0.5, Some(42)).expect("valid fraction");
        assert_eq!(first, second);

        let other = split_data(&data, 0.5, Some(43)).expect("valid fraction");
        assert_ne!(first, other);
    }

    #[test]
    fn test_train_test_split_preserves_pairing() {
        let xs: Vec<String> = (0..20).map(|i| format!("text-{i}")).collect();
        let ys: Vec<usize> = (0..20).collect();

        let (xs_train, xs_test, ys_train, ys_test) =
            train_test_split(&xs, &ys, 0.25, Some(9)).expect("valid paired input");

        assert_eq!(xs_train.len() + xs_test.len(), 20);
        for (x, y) in xs_train.iter().zip(ys_train.iter()) {
            assert_eq!(x, &format!("text-{y}"));
        }
        for (x, y) in xs_test.iter().zip(ys_test.iter()) {
            assert_eq!(x, &format!("text-{y}"));
        }
    }

    #[test]
    fn test_train_test_split_cut_size() {
        let xs: Vec<u32> = (0..9).collect();
        let ys: Vec<u32> = (0..9).collect();
        // train_fraction = 0.75, floor(9 * 0.75) = 6
        let (xs_train, xs_test, _, _) =
            train_test_split(&xs, &ys, 0.25, Some(4)).expect("valid paired input");
        assert_eq!(xs_train.len(), 6);
        assert_eq!(xs_test.len(), 3);
    }

    #[test]
    fn test_train_test_split_length_mismatch() {
        let xs = [1, 2, 3];
        let ys = [1, 2];
        assert!(matches!(
            train_test_split(&xs, &ys, 0.5, None),
            Err(QualityError::DimensionMismatch {
                expected: 3,
                actual: 2
            })
        ));
    }

    #[test]
    fn test_split_with_duplicates() {
        let data = [1, 1, 1, 2, 2, 2];
        let (train, test) = split_data(&data, 0.5, Some(5)).expect("valid fraction");
        assert_eq!(train.len(), 3);
        assert_eq!(test.len(), 3);
    }
}
