//! Provide traits for different classes of algorithms
//!

/// Fittable algorithms
///
/// A fittable algorithm takes a dataset and creates a concept of some kind about it. For example
/// a linear SVM learns a separating hyperplane from a labeled dataset.
pub trait Fit<D, E: std::error::Error> {
    type Object;

    fn fit(&self, dataset: &D) -> Result<Self::Object, E>;
}

/// Predict with a fitted model
///
/// This predicts a target for every record in `x`, for example the class label of each row in a
/// feature matrix.
pub trait Predict<R, T> {
    fn predict(&self, x: R) -> T;
}
