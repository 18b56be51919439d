//! Error types in linfa-hinge
//!

use thiserror::Error;

use ndarray::ShapeError;
pub type Result<T> = std::result::Result<T, SvmError>;

/// An error when a hyperparameter is set to an invalid value
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SvmParamsError {
    #[error("learning rate should be positive and finite, but is {0}")]
    LearningRate(f32),
    #[error("number of epochs cannot be 0")]
    Epochs,
    #[error("lambda should be non-negative and finite, but is {0}")]
    Lambda(f32),
    #[error("decay should be in range (0, 1], but is {0}")]
    Decay(f32),
}

/// An error when building datasets, fitting or evaluating a linear SVM
#[derive(Error, Debug, Clone)]
pub enum SvmError {
    #[error("expected {expected} features, but got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
    #[error("number of records ({records}) does not match number of targets ({targets})")]
    SampleMismatch { records: usize, targets: usize },
    #[error("label must be either 1 or -1, but is {0}")]
    InvalidLabel(i32),
    #[error("weight vector is empty, the model was trained on an empty dataset")]
    EmptyModel,
    #[error("not enough samples to evaluate the model")]
    NotEnoughSamples,
    #[error("invalid hyperparameter: {0}")]
    InvalidParams(#[from] SvmParamsError),
    #[error("invalid ndarray shape {0}")]
    NdShape(#[from] ShapeError),
}
