use std::fmt;

use crate::model::WeightVector;
use crate::Float;

/// Human readable summary of a separating hyperplane
///
/// Prints the fitted parameters followed by the hyperplane equation, with the feature index
/// starting at one:
///
/// ```text
/// Model parameters: w0 = -0.9825, w1 = 1.0186, b = -0.1242
/// Final SVM Hyperplane: -0.9825*x1 + 1.0186*x2 - 0.1242 = 0
/// ```
///
/// ### Usage
///
/// ```rust
/// use linfa_hinge::{report::Report, WeightVector};
///
/// let parameters = WeightVector::from(vec![0.5, -2.0, 1.0]);
/// let report = Report::new(&parameters).precision(1).to_string();
/// assert_eq!(
///     report,
///     "Model parameters: w0 = 0.5, w1 = -2.0, b = 1.0\nFinal SVM Hyperplane: 0.5*x1 - 2.0*x2 + 1.0 = 0"
/// );
/// ```
pub struct Report<'a, F> {
    parameters: &'a WeightVector<F>,
    precision: usize,
}

impl<'a, F: Float> Report<'a, F> {
    pub fn new(parameters: &'a WeightVector<F>) -> Self {
        Report {
            parameters,
            precision: 4,
        }
    }

    /// Number of decimal places printed for every parameter
    pub fn precision(mut self, precision: usize) -> Self {
        self.precision = precision;

        self
    }

    fn format_parameters(&self, bias: F) -> String {
        let mut out = String::from("Model parameters: ");
        for (i, w) in self.parameters.weights().iter().enumerate() {
            out.push_str(&format!("w{} = {:.*}, ", i, self.precision, w));
        }
        out.push_str(&format!("b = {:.*}", self.precision, bias));

        out
    }

    /// Append ` + |value|` or ` - |value|` depending on the sign
    fn push_signed(&self, out: &mut String, value: F, suffix: &str) {
        if value < F::zero() {
            out.push_str(&format!(" - {:.*}{}", self.precision, -value, suffix));
        } else {
            out.push_str(&format!(" + {:.*}{}", self.precision, value, suffix));
        }
    }

    fn format_equation(&self, bias: F) -> String {
        let mut out = String::from("Final SVM Hyperplane:");
        let weights = self.parameters.weights();

        match weights.iter().next() {
            Some(first) => {
                out.push_str(&format!(" {:.*}*x1", self.precision, first));
                for (i, w) in weights.iter().enumerate().skip(1) {
                    self.push_signed(&mut out, *w, &format!("*x{}", i + 1));
                }
                self.push_signed(&mut out, bias, "");
            }
            None => out.push_str(&format!(" {:.*}", self.precision, bias)),
        }
        out.push_str(" = 0");

        out
    }
}

impl<'a, F: Float> fmt::Display for Report<'a, F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.parameters.bias() {
            Some(bias) => write!(
                f,
                "{}\n{}",
                self.format_parameters(bias),
                self.format_equation(bias)
            ),
            None => write!(f, "Model parameters: (none)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_features() {
        let parameters = WeightVector::from(vec![-0.98253, 1.01864, -0.12424]);

        assert_eq!(
            Report::new(&parameters).to_string(),
            "Model parameters: w0 = -0.9825, w1 = 1.0186, b = -0.1242\n\
             Final SVM Hyperplane: -0.9825*x1 + 1.0186*x2 - 0.1242 = 0"
        );
    }

    #[test]
    fn three_features_with_zero_weight() {
        let parameters = WeightVector::from(vec![1.0f32, 0.0, -3.5, 2.0]);

        assert_eq!(
            Report::new(&parameters).precision(2).to_string(),
            "Model parameters: w0 = 1.00, w1 = 0.00, w2 = -3.50, b = 2.00\n\
             Final SVM Hyperplane: 1.00*x1 + 0.00*x2 - 3.50*x3 + 2.00 = 0"
        );
    }

    #[test]
    fn bias_only() {
        let parameters = WeightVector::from(vec![0.5]);

        assert_eq!(
            Report::new(&parameters).precision(1).to_string(),
            "Model parameters: b = 0.5\nFinal SVM Hyperplane: 0.5 = 0"
        );
    }

    #[test]
    fn empty_parameters() {
        let parameters = WeightVector::<f64>::empty();

        assert_eq!(
            Report::new(&parameters).to_string(),
            "Model parameters: (none)"
        );
    }
}
