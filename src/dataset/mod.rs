//! Datasets
//!
//! This module implements the labeled dataset consumed by the trainer, the binary label type and
//! the floating point trait bound shared by the whole crate.
use ndarray::{Array1, Array2, ArrayView1, Axis, ScalarOperand};
use num_traits::{FromPrimitive, NumAssignOps, NumCast, Signed};
use rand::distributions::uniform::SampleUniform;

#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

use std::convert::TryFrom;
use std::fmt;
use std::iter::Sum;

use crate::error::{Result, SvmError};

pub mod generate;

/// Floating point numbers
///
/// This trait bound multiplexes to the most common assumption of floating point number and
/// implement them for 32bit and 64bit floating points. They are used in the records of a dataset
/// and in the fitted weight vector.
pub trait Float:
    FromPrimitive
    + num_traits::Float
    + PartialOrd
    + Sync
    + Send
    + Default
    + fmt::Display
    + fmt::Debug
    + Signed
    + Sum
    + NumAssignOps
    + SampleUniform
    + ScalarOperand
    + approx::AbsDiffEq
{
    fn cast<T: NumCast>(x: T) -> Self {
        NumCast::from(x).unwrap()
    }
}

impl Float for f32 {}

impl Float for f64 {}

/// Binary class labels
///
/// The hinge loss works with labels in `{+1, -1}`, this type restricts targets to exactly these
/// two values.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryLabel {
    Positive,
    Negative,
}

impl BinaryLabel {
    /// The label as a signed unit, `1` for positive and `-1` for negative samples
    pub fn sign<F: Float>(self) -> F {
        match self {
            BinaryLabel::Positive => F::one(),
            BinaryLabel::Negative => -F::one(),
        }
    }

    /// Classify a decision value, non-negative scores belong to the positive class
    pub fn from_score<F: Float>(score: F) -> Self {
        if score >= F::zero() {
            BinaryLabel::Positive
        } else {
            BinaryLabel::Negative
        }
    }
}

impl TryFrom<i32> for BinaryLabel {
    type Error = SvmError;

    fn try_from(label: i32) -> Result<Self> {
        match label {
            1 => Ok(BinaryLabel::Positive),
            -1 => Ok(BinaryLabel::Negative),
            other => Err(SvmError::InvalidLabel(other)),
        }
    }
}

impl From<bool> for BinaryLabel {
    fn from(positive: bool) -> Self {
        if positive {
            BinaryLabel::Positive
        } else {
            BinaryLabel::Negative
        }
    }
}

impl From<BinaryLabel> for i32 {
    fn from(label: BinaryLabel) -> i32 {
        match label {
            BinaryLabel::Positive => 1,
            BinaryLabel::Negative => -1,
        }
    }
}

impl fmt::Display for BinaryLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label: i32 = (*self).into();
        write!(f, "{:+}", label)
    }
}

/// A single labeled sample
#[derive(Debug, Clone, PartialEq)]
pub struct DataPoint<F> {
    features: Array1<F>,
    label: BinaryLabel,
}

impl<F: Float> DataPoint<F> {
    /// Create a sample from its features and an integer label, which must be `1` or `-1`
    pub fn new(features: Vec<F>, label: i32) -> Result<Self> {
        Ok(Self::with_label(features, BinaryLabel::try_from(label)?))
    }

    pub fn with_label(features: Vec<F>, label: BinaryLabel) -> Self {
        DataPoint {
            features: Array1::from(features),
            label,
        }
    }

    pub fn features(&self) -> ArrayView1<'_, F> {
        self.features.view()
    }

    pub fn label(&self) -> BinaryLabel {
        self.label
    }

    pub fn nfeatures(&self) -> usize {
        self.features.len()
    }
}

/// Dataset
///
/// An ordered collection of labeled samples. The records are stored as an `Array2` with shape
/// `(nsamples, nfeatures)` and the targets as an `Array1` of labels. Every sample has the same
/// number of features; this is checked whenever a dataset is constructed.
///
/// An empty dataset is valid and yields an empty weight vector when trained on.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset<F> {
    records: Array2<F>,
    targets: Array1<BinaryLabel>,
}

impl<F: Float> Dataset<F> {
    /// Create a dataset from a record matrix and one label per row
    pub fn new(records: Array2<F>, targets: Array1<BinaryLabel>) -> Result<Self> {
        if records.nrows() != targets.len() {
            return Err(SvmError::SampleMismatch {
                records: records.nrows(),
                targets: targets.len(),
            });
        }

        Ok(Dataset { records, targets })
    }

    /// Collect samples into a dataset
    ///
    /// The dimensionality is taken from the first sample, every following sample must agree with
    /// it.
    pub fn from_points(points: Vec<DataPoint<F>>) -> Result<Self> {
        let nfeatures = points.first().map(DataPoint::nfeatures).unwrap_or(0);
        let mut records = Vec::with_capacity(points.len() * nfeatures);
        let mut targets = Vec::with_capacity(points.len());

        for point in points {
            if point.nfeatures() != nfeatures {
                return Err(SvmError::DimensionMismatch {
                    expected: nfeatures,
                    actual: point.nfeatures(),
                });
            }
            records.extend(point.features.iter().cloned());
            targets.push(point.label);
        }

        let records = Array2::from_shape_vec((targets.len(), nfeatures), records)?;
        Dataset::new(records, Array1::from(targets))
    }

    /// Create a dataset from rows of features and integer labels
    pub fn from_rows<T: AsRef<[F]>>(rows: &[(T, i32)]) -> Result<Self> {
        rows.iter()
            .map(|(features, label)| DataPoint::new(features.as_ref().to_vec(), *label))
            .collect::<Result<Vec<_>>>()
            .and_then(Dataset::from_points)
    }

    pub fn records(&self) -> &Array2<F> {
        &self.records
    }

    pub fn targets(&self) -> &Array1<BinaryLabel> {
        &self.targets
    }

    pub fn nsamples(&self) -> usize {
        self.records.nrows()
    }

    pub fn nfeatures(&self) -> usize {
        self.records.ncols()
    }

    pub fn is_empty(&self) -> bool {
        self.nsamples() == 0
    }

    /// Iterate over `(features, label)` pairs in dataset order
    pub fn iter(&self) -> impl Iterator<Item = (ArrayView1<'_, F>, BinaryLabel)> + '_ {
        self.records
            .axis_iter(Axis(0))
            .zip(self.targets.iter().cloned())
    }

    /// Number of samples carrying `label`
    pub fn count(&self, label: BinaryLabel) -> usize {
        self.targets.iter().filter(|target| **target == label).count()
    }
}
