use ndarray::{Array1, Zip};
use rand::{distributions::Uniform, Rng};

use crate::dataset::Dataset;
use crate::error::{Result, SvmError};
use crate::hyperparams::SvmValidParams;
use crate::inner::dot;
use crate::model::{LinearSvm, TrainingSummary, WeightVector};
use crate::traits::Fit;
use crate::Float;

/// Half-width of the interval the initial weights are drawn from
const INIT_BOUND: f64 = 0.1;

impl<F: Float, R: Rng + Clone> Fit<Dataset<F>, SvmError> for SvmValidParams<F, R> {
    type Object = LinearSvm<F>;

    /// Fit a linear SVM given a labeled dataset
    ///
    /// Runs exactly `epochs` passes of hinge-loss sub-gradient descent over the samples in
    /// dataset order. An empty dataset results in a model with an empty weight vector.
    fn fit(&self, dataset: &Dataset<F>) -> Result<Self::Object> {
        let mut summary = if dataset.is_empty() {
            TrainingSummary::default()
        } else {
            TrainingSummary::with_capacity(self.epochs())
        };
        let parameters = run_epochs(dataset, self, |learning_rate, violations| {
            summary.record(learning_rate, violations)
        })?;

        Ok(LinearSvm::new(parameters, summary))
    }
}

/// Train a linear SVM and return the flat `[w_0, ..., w_{d-1}, b]` parameters
///
/// Gives the same parameters as fitting with the `Fit` trait, without keeping a training summary.
pub fn train<F: Float, R: Rng + Clone>(
    dataset: &Dataset<F>,
    params: &SvmValidParams<F, R>,
) -> Result<WeightVector<F>> {
    run_epochs(dataset, params, |_, _| {})
}

/// Run all epochs, calling `on_epoch` with the learning rate and the number of margin
/// violations of every finished epoch
fn run_epochs<F: Float, R: Rng + Clone>(
    dataset: &Dataset<F>,
    params: &SvmValidParams<F, R>,
    mut on_epoch: impl FnMut(F, usize),
) -> Result<WeightVector<F>> {
    if dataset.is_empty() {
        return Ok(WeightVector::empty());
    }

    let mut rng = params.rng().clone();
    let mut weights = initial_weights(dataset.nfeatures(), &mut rng);
    let mut bias = F::zero();

    let lambda = params.lambda();
    let mut learning_rate = params.learning_rate();

    for _ in 0..params.epochs() {
        let mut violations = 0;

        for (x, label) in dataset.iter() {
            let y = label.sign::<F>();
            let margin = y * (dot(&weights, &x)? + bias);

            // samples outside of the margin have a zero sub-gradient
            if margin < F::one() {
                Zip::from(&mut weights).and(&x).for_each(|w, &x_i| {
                    *w -= learning_rate * (lambda * *w - y * x_i);
                });
                bias += learning_rate * y;
                violations += 1;
            }
        }

        on_epoch(learning_rate, violations);
        learning_rate *= params.decay();
    }

    Ok(WeightVector::new(weights, bias))
}

/// Draw `nfeatures` weights uniformly from the open interval `(-0.1, 0.1)`
fn initial_weights<F: Float, R: Rng>(nfeatures: usize, rng: &mut R) -> Array1<F> {
    let bound = F::cast(INIT_BOUND);
    let uniform = Uniform::new(-bound, bound);

    Array1::from_shape_simple_fn(nfeatures, || loop {
        // `Uniform` samples from the half-open `[-bound, bound)`
        let w = rng.sample(&uniform);
        if w != -bound {
            break w;
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::generate::separable_clusters;
    use crate::metrics::margin_satisfaction;
    use crate::param_guard::ParamGuard;
    use crate::traits::Predict;
    use approx::assert_abs_diff_eq;
    use ndarray::array;
    use rand::{rngs::SmallRng, SeedableRng};
    use rand_xoshiro::Xoshiro256Plus;

    #[test]
    fn initial_weights_are_small() {
        let mut rng = Xoshiro256Plus::seed_from_u64(3);
        let weights: Array1<f64> = initial_weights(1000, &mut rng);

        assert_eq!(weights.len(), 1000);
        assert!(weights.iter().all(|w| *w > -0.1 && *w < 0.1));
        // not all the same value
        assert!(weights.iter().any(|w| *w != weights[0]));
    }

    #[test]
    fn output_has_one_more_entry_than_features() {
        let dataset = Dataset::from_rows(&[([1.0, 2.0, 3.0], 1), ([-1.0, -2.0, -3.0], -1)])
            .unwrap();
        let params = LinearSvm::<f64>::params().epochs(5).check().unwrap();

        let parameters = train(&dataset, &params).unwrap();
        assert_eq!(parameters.len(), 4);
        assert_eq!(parameters.nfeatures(), 3);
    }

    #[test]
    fn empty_dataset_gives_empty_result() {
        let dataset = Dataset::<f64>::from_points(Vec::new()).unwrap();
        let model = LinearSvm::<f64>::params().fit(&dataset).unwrap();

        assert!(model.parameters().is_empty());
        assert_eq!(model.summary().epochs(), 0);
    }

    #[test]
    fn single_update_step() {
        // one sample, one epoch, weights start inside (-0.1, 0.1) and the bias at zero, so the
        // margin of a far away sample is violated exactly once
        let dataset = Dataset::from_rows(&[([2.0], 1)]).unwrap();
        let params = LinearSvm::<f64>::params_with_rng(SmallRng::seed_from_u64(1))
            .learning_rate(0.1)
            .lambda(0.5)
            .epochs(1)
            .check()
            .unwrap();

        let mut rng = params.rng().clone();
        let w0: f64 = initial_weights::<f64, _>(1, &mut rng)[0];

        let parameters = train(&dataset, &params).unwrap();
        assert_abs_diff_eq!(parameters.weights()[0], w0 - 0.1 * (0.5 * w0 - 2.0));
        assert_abs_diff_eq!(parameters.bias().unwrap(), 0.1);
    }

    #[test]
    fn zero_lambda_is_plain_hinge_step() {
        let dataset = Dataset::from_rows(&[([1.0, -2.0], -1)]).unwrap();
        let params = LinearSvm::<f64>::params_with_rng(SmallRng::seed_from_u64(5))
            .learning_rate(0.2)
            .lambda(0.0)
            .epochs(1)
            .check()
            .unwrap();

        let mut rng = params.rng().clone();
        let init: Array1<f64> = initial_weights(2, &mut rng);

        let parameters = train(&dataset, &params).unwrap();
        // w[i] -= lr * (-y * x[i]) with y = -1
        assert_abs_diff_eq!(
            parameters.weights(),
            array![init[0] - 0.2 * 1.0, init[1] - 0.2 * -2.0],
            epsilon = 1e-12
        );
        assert_abs_diff_eq!(parameters.bias().unwrap(), -0.2);
    }

    #[test]
    fn satisfied_margins_are_not_updated() {
        // once both samples sit outside the margin the parameters stop changing
        let dataset = Dataset::from_rows(&[([10.0], 1), ([-10.0], -1)]).unwrap();
        let params = LinearSvm::<f64>::params().epochs(50).check().unwrap();

        let model = params.fit(&dataset).unwrap();
        let violations = model.summary().violations();
        assert!(violations[0] > 0);
        assert_eq!(violations[violations.len() - 1], 0);
        assert_abs_diff_eq!(
            margin_satisfaction(model.parameters(), &dataset).unwrap(),
            1.0
        );
    }

    #[test]
    fn learning_rate_decays_every_epoch() {
        let dataset = separable_clusters();
        let params = LinearSvm::<f64>::params().epochs(300).check().unwrap();

        let model = params.fit(&dataset).unwrap();
        let rates = model.summary().learning_rates();
        assert_eq!(rates.len(), 300);
        for (epoch, rate) in rates.iter().enumerate() {
            assert_abs_diff_eq!(*rate, params.learning_rate_at(epoch), epsilon = 1e-12);
        }
        assert_abs_diff_eq!(rates[1], 0.01 * 0.99, epsilon = 1e-15);
    }

    #[test]
    fn fitting_twice_is_deterministic() {
        let dataset = separable_clusters();
        let params = LinearSvm::<f64>::params().epochs(200);

        let first = params.fit(&dataset).unwrap();
        let second = params.fit(&dataset).unwrap();
        assert_eq!(first.parameters(), second.parameters());

        let other = LinearSvm::params_with_rng(Xoshiro256Plus::seed_from_u64(7))
            .epochs(200)
            .fit(&dataset)
            .unwrap();
        assert_ne!(first.parameters(), other.parameters());
    }

    #[test]
    fn train_matches_fit() {
        let dataset = separable_clusters();
        let params = LinearSvm::<f64>::params().epochs(100).check().unwrap();

        let model = params.fit(&dataset).unwrap();
        assert_eq!(&train(&dataset, &params).unwrap(), model.parameters());
        assert_eq!(model.summary().epochs(), 100);
    }

    #[test]
    fn huge_epoch_count_is_a_valid_setting() {
        let params = LinearSvm::<f64>::params().epochs(usize::MAX).check().unwrap();
        let summary = TrainingSummary::<f64>::with_capacity(params.epochs());

        assert_eq!(summary.epochs(), 0);
    }

    #[test]
    fn invalid_params_are_reported() {
        let dataset = separable_clusters();
        let res = LinearSvm::<f64>::params().learning_rate(-1.0).fit(&dataset);

        assert!(matches!(res, Err(SvmError::InvalidParams(_))));
    }

    #[test]
    fn separates_reference_clusters() {
        let dataset = separable_clusters();
        let model = LinearSvm::<f64>::params().fit(&dataset).unwrap();

        assert_eq!(model.parameters().len(), 3);
        assert!(model.decision_function(&array![3.0, 5.0]).unwrap() > 0.0);
        assert!(model.decision_function(&array![4.5, 2.0]).unwrap() < 0.0);
        assert_eq!(&model.predict(&dataset).unwrap(), dataset.targets());
    }
}
