//! Common metrics for evaluating a separating hyperplane
//!
//! All metrics take the flat `[w_0, ..., w_{d-1}, b]` parameters, so they apply equally to a
//! fitted model and to hand-made or initial weight vectors.
use crate::dataset::{BinaryLabel, Dataset};
use crate::error::{Result, SvmError};
use crate::inner::dot;
use crate::model::WeightVector;
use crate::Float;

/// Check that the parameters can score the samples of `dataset`
fn check_compatible<F: Float>(weights: &WeightVector<F>, dataset: &Dataset<F>) -> Result<()> {
    if weights.is_empty() {
        Err(SvmError::EmptyModel)
    } else if weights.nfeatures() != dataset.nfeatures() {
        Err(SvmError::DimensionMismatch {
            expected: weights.nfeatures(),
            actual: dataset.nfeatures(),
        })
    } else if dataset.is_empty() {
        Err(SvmError::NotEnoughSamples)
    } else {
        Ok(())
    }
}

/// Margins `y * (w·x + b)` of every sample
fn margins<F: Float>(weights: &WeightVector<F>, dataset: &Dataset<F>) -> Result<Vec<F>> {
    dataset
        .iter()
        .map(|(x, label)| weights.margin(&x, label))
        .collect()
}

fn fraction(count: usize, total: usize) -> f32 {
    count as f32 / total as f32
}

/// Fraction of samples whose predicted class matches their label
pub fn accuracy<F: Float>(weights: &WeightVector<F>, dataset: &Dataset<F>) -> Result<f32> {
    check_compatible(weights, dataset)?;

    let mut correct = 0;
    for (x, label) in dataset.iter() {
        if BinaryLabel::from_score(weights.decision_function(&x)?) == label {
            correct += 1;
        }
    }

    Ok(fraction(correct, dataset.nsamples()))
}

/// Fraction of samples which are classified with sufficient confidence, `y * (w·x + b) >= 1`
pub fn margin_satisfaction<F: Float>(
    weights: &WeightVector<F>,
    dataset: &Dataset<F>,
) -> Result<f32> {
    check_compatible(weights, dataset)?;

    let satisfied = margins(weights, dataset)?
        .into_iter()
        .filter(|margin| *margin >= F::one())
        .count();

    Ok(fraction(satisfied, dataset.nsamples()))
}

/// Regularized hinge loss `mean(max(0, 1 - margin)) + (lambda / 2) * ||w||^2`
pub fn hinge_loss<F: Float>(
    weights: &WeightVector<F>,
    dataset: &Dataset<F>,
    lambda: F,
) -> Result<F> {
    check_compatible(weights, dataset)?;

    let loss = margins(weights, dataset)?
        .into_iter()
        .map(|margin| F::zero().max(F::one() - margin))
        .sum::<F>()
        / F::cast(dataset.nsamples());

    let w = weights.weights();
    let norm = dot(&w, &w)?;

    Ok(loss + lambda / F::cast(2.) * norm)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn dataset() -> Dataset<f64> {
        Dataset::from_rows(&[
            ([2.0, 0.0], 1),
            ([0.5, 0.0], 1),
            ([-2.0, 0.0], -1),
            ([0.2, 1.0], -1),
        ])
        .unwrap()
    }

    #[test]
    fn accuracy_counts_matching_signs() {
        let weights = WeightVector::from(vec![1.0, 0.0, 0.0]);

        // the last sample lies on the positive side
        assert_abs_diff_eq!(accuracy(&weights, &dataset()).unwrap(), 0.75);
    }

    #[test]
    fn margin_satisfaction_needs_unit_margin() {
        let weights = WeightVector::from(vec![1.0, 0.0, 0.0]);

        // margins are 2, 0.5, 2 and -0.2
        assert_abs_diff_eq!(
            margin_satisfaction(&weights, &dataset()).unwrap(),
            0.5
        );
    }

    #[test]
    fn hinge_loss_with_regularization() {
        let weights = WeightVector::from(vec![1.0, 0.0, 0.0]);

        // losses are 0, 0.5, 0 and 1.2
        assert_abs_diff_eq!(
            hinge_loss(&weights, &dataset(), 0.0).unwrap(),
            1.7 / 4.0,
            epsilon = 1e-12
        );
        assert_abs_diff_eq!(
            hinge_loss(&weights, &dataset(), 0.5).unwrap(),
            1.7 / 4.0 + 0.25,
            epsilon = 1e-12
        );
    }

    #[test]
    fn incompatible_inputs() {
        let dataset = dataset();

        assert!(matches!(
            accuracy(&WeightVector::empty(), &dataset),
            Err(SvmError::EmptyModel)
        ));
        assert!(matches!(
            margin_satisfaction(&WeightVector::from(vec![1.0, 0.0]), &dataset),
            Err(SvmError::DimensionMismatch {
                expected: 1,
                actual: 2
            })
        ));

        let empty = Dataset::from_points(Vec::new()).unwrap();
        assert!(matches!(
            hinge_loss(&WeightVector::from(vec![0.0]), &empty, 0.1),
            Err(SvmError::NotEnoughSamples)
        ));
    }
}
