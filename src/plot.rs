use std::fmt;

use crate::dataset::{BinaryLabel, Dataset};
use crate::error::{Result, SvmError};
use crate::model::WeightVector;
use crate::Float;

/// Affine map from the feature plane to screen coordinates
///
/// Maps `(x0, x1)` to `(origin_x + scale * x0, origin_y - scale * x1)`, the vertical axis is
/// flipped so that larger `x1` values are drawn higher up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenTransform {
    origin_x: f64,
    origin_y: f64,
    scale: f64,
}

impl Default for ScreenTransform {
    fn default() -> Self {
        ScreenTransform {
            origin_x: 200.,
            origin_y: 200.,
            scale: 30.,
        }
    }
}

impl ScreenTransform {
    pub fn to_screen<F: Float>(&self, x0: F, x1: F) -> (f64, f64) {
        (
            self.origin_x + self.scale * to_f64(x0),
            self.origin_y - self.scale * to_f64(x1),
        )
    }

    /// The feature value `x0` drawn at screen column `screen_x`
    pub fn to_feature_x(&self, screen_x: f64) -> f64 {
        (screen_x - self.origin_x) / self.scale
    }
}

fn to_f64<F: Float>(x: F) -> f64 {
    x.to_f64().unwrap_or_default()
}

/// Solve `w0*x0 + w1*x1 + b = 0` for `x1`
///
/// Returns `None` when the parameters do not describe a line in the plane, either because there
/// are not exactly two features or because the boundary is vertical (`w1 == 0`).
pub fn boundary_x1<F: Float>(parameters: &WeightVector<F>, x0: F) -> Option<F> {
    match *parameters.as_slice() {
        [w0, w1, b] if w1 != F::zero() => Some((-b - w0 * x0) / w1),
        _ => None,
    }
}

/// Struct to export a 2-D dataset and its separating line as an SVG document
///
/// Every sample is drawn as a filled circle, green for the positive and red for the negative
/// class. The decision boundary is traced across every screen column and clipped to the
/// canvas.
///
/// ### Usage
///
/// ```rust
/// use linfa_hinge::prelude::*;
/// use linfa_hinge::{dataset::generate, plot::Plot};
///
/// let dataset = generate::separable_clusters();
/// let model = LinearSvm::params().epochs(100).fit(&dataset).unwrap();
/// let svg = Plot::new(&dataset, model.parameters()).unwrap().to_string();
/// // Now you can write svg to the preferred destination
/// assert!(svg.starts_with("<svg"));
/// ```
pub struct Plot<'a, F> {
    dataset: &'a Dataset<F>,
    parameters: &'a WeightVector<F>,
    transform: ScreenTransform,
    width: u32,
    height: u32,
}

impl<'a, F: Float> Plot<'a, F> {
    /// Create a plot of a dataset with exactly two features
    pub fn new(dataset: &'a Dataset<F>, parameters: &'a WeightVector<F>) -> Result<Self> {
        if !dataset.is_empty() && dataset.nfeatures() != 2 {
            return Err(SvmError::DimensionMismatch {
                expected: 2,
                actual: dataset.nfeatures(),
            });
        }

        Ok(Plot {
            dataset,
            parameters,
            transform: ScreenTransform::default(),
            width: 640,
            height: 480,
        })
    }

    /// Width of the canvas in pixels
    pub fn width(mut self, width: u32) -> Self {
        self.width = width;

        self
    }

    /// Height of the canvas in pixels
    pub fn height(mut self, height: u32) -> Self {
        self.height = height;

        self
    }

    pub fn transform(mut self, transform: ScreenTransform) -> Self {
        self.transform = transform;

        self
    }

    /// Screen coordinates of the decision boundary, one per column inside the canvas
    pub fn boundary(&self) -> Vec<(f64, f64)> {
        (0..self.width)
            .filter_map(|column| {
                let screen_x = f64::from(column);
                let x0 = F::cast(self.transform.to_feature_x(screen_x));
                let x1 = boundary_x1(self.parameters, x0)?;
                let (_, screen_y) = self.transform.to_screen(x0, x1);

                if screen_y >= 0. && screen_y <= f64::from(self.height) {
                    Some((screen_x, screen_y))
                } else {
                    None
                }
            })
            .collect()
    }

    fn format_point(&self, x0: F, x1: F, label: BinaryLabel) -> String {
        let (cx, cy) = self.transform.to_screen(x0, x1);
        let color = match label {
            BinaryLabel::Positive => "green",
            BinaryLabel::Negative => "red",
        };

        format!(
            "\t<circle cx=\"{:.1}\" cy=\"{:.1}\" r=\"5\" fill=\"{}\" stroke=\"{}\"/>\n",
            cx, cy, color, color
        )
    }
}

impl<'a, F: Float> fmt::Display for Plot<'a, F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut out = format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n\
             \t<rect width=\"{w}\" height=\"{h}\" fill=\"black\"/>\n",
            w = self.width,
            h = self.height
        );

        for (x, label) in self.dataset.iter() {
            out.push_str(&self.format_point(x[0], x[1], label));
        }

        let boundary = self.boundary();
        if !boundary.is_empty() {
            let points = boundary
                .iter()
                .map(|(x, y)| format!("{:.1},{:.1}", x, y))
                .collect::<Vec<_>>()
                .join(" ");
            out.push_str(&format!(
                "\t<polyline points=\"{}\" fill=\"none\" stroke=\"white\"/>\n",
                points
            ));
        }
        out.push_str("</svg>\n");

        write!(f, "{}", out)
    }
}
