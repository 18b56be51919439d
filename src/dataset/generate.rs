//! Utility functions for building small labeled datasets

use ndarray::{concatenate, Array, Array1, ArrayBase, Axis, Data, Ix1};
use ndarray_rand::{
    rand::Rng,
    rand_distr::{Distribution, StandardNormal},
    RandomExt,
};

use super::{BinaryLabel, Dataset};
use crate::error::{Result, SvmError};

/// Two visually distinct clusters in the plane
///
/// Seven positive samples are spread around `(3, 5)` and eight negative samples around
/// `(4.5, 2)`. The clusters are linearly separable.
pub fn separable_clusters() -> Dataset<f64> {
    let rows = [
        ([3.0, 4.0], 1),
        ([2.5, 5.0], 1),
        ([1.5, 3.5], 1),
        ([2.5, 6.0], 1),
        ([3.5, 5.0], 1),
        ([4.0, 6.0], 1),
        ([4.0, 5.0], 1),
        ([5.0, 3.0], -1),
        ([3.0, 1.0], -1),
        ([3.5, 1.0], -1),
        ([3.5, 2.5], -1),
        ([5.5, 2.0], -1),
        ([4.5, 2.5], -1),
        ([4.0, 2.5], -1),
        ([5.0, 2.3], -1),
    ];

    Dataset::from_rows(&rows).expect("reference rows are well formed")
}

/// Special case of `two_blobs_with_distribution` with a standard normal distribution.
pub fn two_blobs(
    blob_size: usize,
    positive_centroid: &ArrayBase<impl Data<Elem = f64>, Ix1>,
    negative_centroid: &ArrayBase<impl Data<Elem = f64>, Ix1>,
    rng: &mut impl Rng,
) -> Result<Dataset<f64>> {
    two_blobs_with_distribution(
        blob_size,
        positive_centroid,
        negative_centroid,
        StandardNormal,
        rng,
    )
}

/// Generate `blob_size` positive samples around `positive_centroid` followed by `blob_size`
/// negative samples around `negative_centroid`.
///
/// Each blob is sampled from `distribution` and shifted to its centroid. Both centroids must have
/// the same number of features.
pub fn two_blobs_with_distribution(
    blob_size: usize,
    positive_centroid: &ArrayBase<impl Data<Elem = f64>, Ix1>,
    negative_centroid: &ArrayBase<impl Data<Elem = f64>, Ix1>,
    distribution: impl Distribution<f64> + Clone,
    rng: &mut impl Rng,
) -> Result<Dataset<f64>> {
    if positive_centroid.len() != negative_centroid.len() {
        return Err(SvmError::DimensionMismatch {
            expected: positive_centroid.len(),
            actual: negative_centroid.len(),
        });
    }

    let shape = (blob_size, positive_centroid.len());
    let positive = Array::random_using(shape, distribution.clone(), rng) + positive_centroid;
    let negative = Array::random_using(shape, distribution, rng) + negative_centroid;

    let records = concatenate(Axis(0), &[positive.view(), negative.view()])?;
    let targets = std::iter::repeat(BinaryLabel::Positive)
        .take(blob_size)
        .chain(std::iter::repeat(BinaryLabel::Negative).take(blob_size))
        .collect::<Array1<_>>();

    Dataset::new(records, targets)
}
