use std::fmt;

use ndarray::{s, Array1, ArrayBase, ArrayView1, Data, Ix1, Ix2};
use rand::Rng;
use rand_xoshiro::Xoshiro256Plus;

use crate::dataset::{BinaryLabel, Dataset};
use crate::error::{Result, SvmError};
use crate::hyperparams::SvmParams;
use crate::inner::dot;
use crate::traits::Predict;
use crate::Float;

/// Trained parameters of a linear SVM
///
/// The parameters are stored as the flat sequence `[w_0, ..., w_{d-1}, b]`, the `d` feature
/// weights followed by the bias. Training on an empty dataset yields an empty sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightVector<F>(Array1<F>);

impl<F: Float> WeightVector<F> {
    /// Append `bias` to the feature weights
    pub fn new(weights: Array1<F>, bias: F) -> Self {
        let mut parameters = weights.to_vec();
        parameters.push(bias);

        WeightVector(Array1::from(parameters))
    }

    /// The result of training on an empty dataset
    pub fn empty() -> Self {
        WeightVector(Array1::zeros(0))
    }

    /// The feature weights, without the bias
    pub fn weights(&self) -> ArrayView1<'_, F> {
        self.0.slice(s![..self.nfeatures()])
    }

    /// The bias, `None` for an empty weight vector
    pub fn bias(&self) -> Option<F> {
        self.0.iter().last().cloned()
    }

    /// Number of feature weights, one less than the length of the flat sequence
    pub fn nfeatures(&self) -> usize {
        self.0.len().saturating_sub(1)
    }

    /// Length of the flat sequence, `nfeatures + 1` or zero
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_array(&self) -> &Array1<F> {
        &self.0
    }

    pub fn as_slice(&self) -> &[F] {
        // the array is always owned and contiguous
        self.0.as_slice().unwrap_or(&[])
    }

    pub fn to_vec(&self) -> Vec<F> {
        self.0.to_vec()
    }

    /// Signed distance-like score `w·x + b` of a sample
    pub fn decision_function<D: Data<Elem = F>>(&self, x: &ArrayBase<D, Ix1>) -> Result<F> {
        let bias = self.bias().ok_or(SvmError::EmptyModel)?;

        Ok(dot(&self.weights(), x)? + bias)
    }

    /// The margin `y * (w·x + b)` of a labeled sample
    pub fn margin<D: Data<Elem = F>>(
        &self,
        x: &ArrayBase<D, Ix1>,
        label: BinaryLabel,
    ) -> Result<F> {
        Ok(label.sign::<F>() * self.decision_function(x)?)
    }
}

impl<F: Float> From<Vec<F>> for WeightVector<F> {
    fn from(parameters: Vec<F>) -> Self {
        WeightVector(Array1::from(parameters))
    }
}

/// Per-epoch record of a training run
#[derive(Debug, Clone, PartialEq)]
pub struct TrainingSummary<F> {
    learning_rates: Vec<F>,
    violations: Vec<usize>,
}

/// Upper bound on the number of epochs reserved up front, longer runs grow the record on demand
const MAX_RESERVED_EPOCHS: usize = 1 << 16;

impl<F: Float> TrainingSummary<F> {
    pub(crate) fn with_capacity(epochs: usize) -> Self {
        let capacity = epochs.min(MAX_RESERVED_EPOCHS);

        TrainingSummary {
            learning_rates: Vec::with_capacity(capacity),
            violations: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn record(&mut self, learning_rate: F, violations: usize) {
        self.learning_rates.push(learning_rate);
        self.violations.push(violations);
    }

    /// Number of completed epochs
    pub fn epochs(&self) -> usize {
        self.learning_rates.len()
    }

    /// The learning rate used in every epoch
    pub fn learning_rates(&self) -> &[F] {
        &self.learning_rates
    }

    /// Number of margin-violating samples, and thus updates, in every epoch
    pub fn violations(&self) -> &[usize] {
        &self.violations
    }

    /// The learning rate used in the last epoch
    pub fn final_learning_rate(&self) -> Option<F> {
        self.learning_rates.last().cloned()
    }
}

impl<F: Float> Default for TrainingSummary<F> {
    fn default() -> Self {
        TrainingSummary::with_capacity(0)
    }
}

/// Fitted linear Support Vector Machine
///
/// This is the result of training with [`SvmParams`](crate::SvmParams) and contains the separating
/// hyperplane together with a summary of the training run.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearSvm<F> {
    parameters: WeightVector<F>,
    summary: TrainingSummary<F>,
}

impl<F: Float> LinearSvm<F> {
    /// Create default hyperparameters, the initial weights are drawn from a seeded
    /// `Xoshiro256Plus`
    pub fn params() -> SvmParams<F, Xoshiro256Plus> {
        SvmParams::default()
    }

    /// Create default hyperparameters drawing the initial weights from `rng`
    pub fn params_with_rng<R: Rng>(rng: R) -> SvmParams<F, R> {
        SvmParams::new(rng)
    }

    pub(crate) fn new(parameters: WeightVector<F>, summary: TrainingSummary<F>) -> Self {
        LinearSvm {
            parameters,
            summary,
        }
    }

    /// The fitted `[w_0, ..., w_{d-1}, b]` parameters
    pub fn parameters(&self) -> &WeightVector<F> {
        &self.parameters
    }

    pub fn summary(&self) -> &TrainingSummary<F> {
        &self.summary
    }

    /// Consume the model and return its parameters
    pub fn into_parameters(self) -> WeightVector<F> {
        self.parameters
    }

    /// Score a single sample, positive values fall on the side of the positive class
    pub fn decision_function<D: Data<Elem = F>>(&self, x: &ArrayBase<D, Ix1>) -> Result<F> {
        self.parameters.decision_function(x)
    }
}

impl<F: Float, D: Data<Elem = F>> Predict<&ArrayBase<D, Ix2>, Result<Array1<BinaryLabel>>>
    for LinearSvm<F>
{
    /// Given an input matrix `x`, with shape `(n_samples, n_features)`, `predict` returns the
    /// class of every row according to the sign of its decision value.
    fn predict(&self, x: &ArrayBase<D, Ix2>) -> Result<Array1<BinaryLabel>> {
        x.outer_iter()
            .map(|row| self.decision_function(&row).map(BinaryLabel::from_score))
            .collect()
    }
}

impl<F: Float> Predict<&Dataset<F>, Result<Array1<BinaryLabel>>> for LinearSvm<F> {
    fn predict(&self, dataset: &Dataset<F>) -> Result<Array1<BinaryLabel>> {
        self.predict(dataset.records())
    }
}

/// Display the training outcome
impl<F: Float> fmt::Display for LinearSvm<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (
            self.summary.final_learning_rate(),
            self.summary.violations().last(),
        ) {
            (Some(learning_rate), Some(violations)) => write!(
                f,
                "Trained for {} epochs with final learning rate {} and {} margin violations in the last epoch",
                self.summary.epochs(),
                learning_rate,
                violations
            ),
            _ => write!(f, "Untrained model, the dataset was empty"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::array;

    #[test]
    fn flat_layout() {
        let parameters = WeightVector::new(array![0.5, -1.5], 2.0);

        assert_eq!(parameters.to_vec(), vec![0.5, -1.5, 2.0]);
        assert_eq!(parameters.len(), 3);
        assert_eq!(parameters.nfeatures(), 2);
        assert_eq!(parameters.weights(), array![0.5, -1.5]);
        assert_eq!(parameters.bias(), Some(2.0));
    }

    #[test]
    fn empty_weight_vector() {
        let parameters = WeightVector::<f64>::empty();

        assert!(parameters.is_empty());
        assert_eq!(parameters.len(), 0);
        assert_eq!(parameters.nfeatures(), 0);
        assert_eq!(parameters.bias(), None);
        assert_eq!(parameters.as_slice(), &[] as &[f64]);
        assert!(matches!(
            parameters.decision_function(&array![1.0]),
            Err(SvmError::EmptyModel)
        ));
    }

    #[test]
    fn decision_and_margin() {
        let parameters = WeightVector::from(vec![1.0, 2.0, -1.0]);

        assert_abs_diff_eq!(parameters.decision_function(&array![1.0, 1.0]).unwrap(), 2.0);
        assert_abs_diff_eq!(
            parameters
                .margin(&array![1.0, 1.0], BinaryLabel::Negative)
                .unwrap(),
            -2.0
        );
        assert!(matches!(
            parameters.decision_function(&array![1.0, 1.0, 1.0]),
            Err(SvmError::DimensionMismatch {
                expected: 2,
                actual: 3
            })
        ));
    }

    #[test]
    fn predict_by_sign() {
        let model = LinearSvm::new(
            WeightVector::from(vec![0.0, 1.0, -3.0]),
            TrainingSummary::default(),
        );
        let records = array![[0.0, 5.0], [10.0, 1.0], [2.0, 3.0]];

        let predicted = model.predict(&records).unwrap();
        assert_eq!(
            predicted,
            array![
                BinaryLabel::Positive,
                BinaryLabel::Negative,
                BinaryLabel::Positive
            ]
        );
        assert!(model.predict(&array![[1.0, 2.0, 3.0]]).is_err());
    }

    #[test]
    fn summary_records_epochs() {
        let mut summary = TrainingSummary::with_capacity(2);
        summary.record(0.1, 4);
        summary.record(0.099, 1);

        assert_eq!(summary.epochs(), 2);
        assert_eq!(summary.violations(), &[4, 1]);
        assert_eq!(summary.final_learning_rate(), Some(0.099));

        let model = LinearSvm::new(WeightVector::from(vec![1.0, 0.0]), summary);
        assert_eq!(
            model.to_string(),
            "Trained for 2 epochs with final learning rate 0.099 and 1 margin violations in the last epoch"
        );
    }

    #[test]
    fn huge_epoch_counts_reserve_bounded_memory() {
        let mut summary = TrainingSummary::<f64>::with_capacity(usize::MAX);
        assert_eq!(summary.epochs(), 0);

        summary.record(0.5, 2);
        assert_eq!(summary.violations(), &[2]);
        assert!(summary.learning_rates.capacity() <= MAX_RESERVED_EPOCHS);
    }

    #[test]
    fn display_untrained() {
        let model = LinearSvm::<f32>::new(WeightVector::empty(), TrainingSummary::default());
        assert_eq!(model.to_string(), "Untrained model, the dataset was empty");
    }
}
