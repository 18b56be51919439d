//! # Linear Support Vector Machines
//!
//! `linfa-hinge` trains a binary linear classifier by sub-gradient descent on the hinge loss with
//! L2 regularization, and reports the learned separating hyperplane.
//!
//! ## The objective
//!
//! For labels `y` in `{+1, -1}` the trainer minimizes
//!
//! ```text
//! (lambda / 2) * ||w||^2 + max(0, 1 - y * (w·x + b))
//! ```
//!
//! one sample at a time. A sample whose margin `y * (w·x + b)` is below one triggers an update
//!
//! ```text
//! w[i] -= learning_rate * (lambda * w[i] - y * x[i])
//! b    += learning_rate * y
//! ```
//!
//! while samples outside of the margin leave the parameters untouched. After every pass over the
//! dataset the learning rate is multiplied by a decay factor (`0.99` by default). The training
//! always runs the configured number of epochs, there is no convergence check.
//!
//! The weights start at small values drawn uniformly from `(-0.1, 0.1)` using the random number
//! generator stored in the hyperparameters, the bias starts at zero. Fitting twice with the same
//! hyperparameters gives bit-identical results.
//!
//! ## Example
//!
//! ```rust
//! use linfa_hinge::prelude::*;
//! use linfa_hinge::dataset::generate;
//! use ndarray::array;
//!
//! let dataset = generate::separable_clusters();
//! let model = LinearSvm::params()
//!     .learning_rate(0.01)
//!     .epochs(10000)
//!     .lambda(0.01)
//!     .fit(&dataset)?;
//!
//! // [w0, w1, b]
//! assert_eq!(model.parameters().len(), 3);
//! assert!(model.decision_function(&array![3.0, 5.0])? > 0.0);
//! assert!(model.decision_function(&array![4.5, 2.0])? < 0.0);
//! # Ok::<(), SvmError>(())
//! ```
//!
//! The fitted parameters can be printed with [`Report`](report::Report) and drawn with
//! [`Plot`](plot::Plot).

mod algorithm;
pub mod dataset;
pub mod error;
mod hyperparams;
pub mod inner;
pub mod metrics;
mod model;
pub mod param_guard;
pub mod plot;
pub mod prelude;
pub mod report;
pub mod traits;

pub use algorithm::train;
pub use dataset::{BinaryLabel, DataPoint, Dataset, Float};
pub use error::{Result, SvmError, SvmParamsError};
pub use hyperparams::{SvmParams, SvmValidParams};
pub use model::{LinearSvm, TrainingSummary, WeightVector};
pub use param_guard::ParamGuard;
