use ndarray::{ArrayBase, Data, Ix1};

use crate::error::{Result, SvmError};
use crate::Float;

/// Inner product of two samples
///
/// Returns the sum of pairwise products of `a` and `b`. Both arrays must have the same length,
/// otherwise `DimensionMismatch` is returned instead of silently truncating to the shorter one.
pub fn dot<F, D1, D2>(a: &ArrayBase<D1, Ix1>, b: &ArrayBase<D2, Ix1>) -> Result<F>
where
    F: Float,
    D1: Data<Elem = F>,
    D2: Data<Elem = F>,
{
    if a.len() != b.len() {
        return Err(SvmError::DimensionMismatch {
            expected: a.len(),
            actual: b.len(),
        });
    }

    Ok(a.dot(b))
}
