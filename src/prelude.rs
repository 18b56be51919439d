//! linfa-hinge prelude.
//!
//! This module contains the most used types, type aliases, traits and
//! functions that you can import easily as a group.
//!

#[doc(no_inline)]
pub use crate::error::{Result, SvmError, SvmParamsError};

#[doc(no_inline)]
pub use crate::traits::*;

#[doc(no_inline)]
pub use crate::param_guard::ParamGuard;

#[doc(no_inline)]
pub use crate::dataset::{BinaryLabel, DataPoint, Dataset, Float};

#[doc(no_inline)]
pub use crate::{LinearSvm, SvmParams, SvmValidParams, WeightVector};

#[doc(no_inline)]
pub use crate::metrics::{accuracy, hinge_loss, margin_satisfaction};
