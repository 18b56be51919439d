use crate::error::SvmParamsError;
use crate::param_guard::ParamGuard;
use crate::Float;
use rand::Rng;
use rand_xoshiro::{rand_core::SeedableRng, Xoshiro256Plus};

#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

/// A verified hyper-parameter set ready for training a linear SVM
///
/// See [`SvmParams`](crate::SvmParams) for more information.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Clone, Debug, PartialEq)]
pub struct SvmValidParams<F: Float, R: Rng> {
    /// Step size of the first epoch
    learning_rate: F,
    /// Number of full passes over the dataset
    epochs: usize,
    /// Strength of the L2 shrinkage applied on every update
    lambda: F,
    /// Factor applied to the learning rate after every epoch
    decay: F,
    /// The random number generator used to draw the initial weights
    rng: R,
}

impl<F: Float, R: Rng> SvmValidParams<F, R> {
    pub fn learning_rate(&self) -> F {
        self.learning_rate
    }

    pub fn epochs(&self) -> usize {
        self.epochs
    }

    pub fn lambda(&self) -> F {
        self.lambda
    }

    pub fn decay(&self) -> F {
        self.decay
    }

    /// Returns the random generator
    pub fn rng(&self) -> &R {
        &self.rng
    }

    /// The learning rate used in the (zero-indexed) epoch `epoch`, `learning_rate * decay^epoch`
    pub fn learning_rate_at(&self, epoch: usize) -> F {
        self.learning_rate * self.decay.powf(F::cast(epoch))
    }
}

/// Linear SVM hyperparameters
///
/// The training process is controlled by the initial learning rate, the number of epochs, the
/// regularization strength `lambda` and the per-epoch learning rate decay. The initial weights
/// are drawn from the random number generator stored here; the generator is cloned for every
/// fit, so fitting twice with the same parameters gives identical models.
///
/// ## Example
///
/// ```rust
/// use linfa_hinge::prelude::*;
/// use rand::{rngs::SmallRng, SeedableRng};
///
/// let params = LinearSvm::<f64>::params_with_rng(SmallRng::seed_from_u64(7))
///     .learning_rate(0.05)
///     .epochs(500)
///     .lambda(0.001);
/// assert!(params.check_ref().is_ok());
/// ```
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Clone, Debug, PartialEq)]
pub struct SvmParams<F: Float, R: Rng>(SvmValidParams<F, R>);

impl<F: Float, R: Rng> SvmParams<F, R> {
    /// Create hyper parameter set with a given random number generator
    ///
    /// Defaults are provided if optional parameters are not specified:
    /// * `learning_rate = 0.01`
    /// * `epochs = 10000`
    /// * `lambda = 0.01`
    /// * `decay = 0.99`
    pub fn new(rng: R) -> Self {
        Self(SvmValidParams {
            learning_rate: F::cast(0.01),
            epochs: 10000,
            lambda: F::cast(0.01),
            decay: F::cast(0.99),
            rng,
        })
    }

    /// Set the step size of the first epoch.
    ///
    /// `learning_rate` must be positive and finite
    pub fn learning_rate(mut self, learning_rate: F) -> Self {
        self.0.learning_rate = learning_rate;
        self
    }

    /// Set the number of passes over the dataset. Training always runs all of them.
    pub fn epochs(mut self, epochs: usize) -> Self {
        self.0.epochs = epochs;
        self
    }

    /// Set the L2 regularization strength.
    ///
    /// `lambda` must be non-negative and finite, a value of zero disables the shrinkage.
    pub fn lambda(mut self, lambda: F) -> Self {
        self.0.lambda = lambda;
        self
    }

    /// Set the factor the learning rate is multiplied with after every epoch.
    ///
    /// `decay` must be in range `(0, 1]`
    pub fn decay(mut self, decay: F) -> Self {
        self.0.decay = decay;
        self
    }

    /// Set random number generator used to initialize the weights
    pub fn rng(mut self, rng: R) -> Self {
        self.0.rng = rng;
        self
    }
}

impl<F: Float> Default for SvmParams<F, Xoshiro256Plus> {
    fn default() -> Self {
        Self::new(Xoshiro256Plus::seed_from_u64(42))
    }
}

impl<F: Float, R: Rng> ParamGuard for SvmParams<F, R> {
    type Checked = SvmValidParams<F, R>;
    type Error = SvmParamsError;

    fn check_ref(&self) -> Result<&Self::Checked, Self::Error> {
        let params = &self.0;

        if !params.learning_rate.is_finite() || params.learning_rate <= F::zero() {
            Err(SvmParamsError::LearningRate(to_f32(params.learning_rate)))
        } else if params.epochs == 0 {
            Err(SvmParamsError::Epochs)
        } else if !params.lambda.is_finite() || params.lambda < F::zero() {
            Err(SvmParamsError::Lambda(to_f32(params.lambda)))
        } else if !(params.decay > F::zero() && params.decay <= F::one()) {
            Err(SvmParamsError::Decay(to_f32(params.decay)))
        } else {
            Ok(params)
        }
    }

    fn check(self) -> Result<Self::Checked, Self::Error> {
        self.check_ref()?;
        Ok(self.0)
    }
}

fn to_f32<F: Float>(x: F) -> f32 {
    x.to_f32().unwrap_or(f32::NAN)
}
