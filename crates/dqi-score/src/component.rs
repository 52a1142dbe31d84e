//! Declarative component catalogs and the generic evaluator.
//!
//! An index is mostly data: an ordered list of components, each naming a
//! column and a scoring kernel with its cut-points. The evaluator
//! dispatches on the kernel tag; calculators add their index-specific
//! pieces (alcohol curves, population-relative components) on top.

use polars::prelude::DataFrame;

use dqi_model::Gender;

use crate::error::ScoreError;
use crate::frame::{Scores, numeric_column};
use crate::kernels;
pub use crate::kernels::ThresholdOp;

/// Scoring recipe for one component.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Kernel {
    /// Linear between the zero-score and full-score cut-points.
    Linear { zero: f64, full: f64, points: f64 },
    /// Linear with a gender-specific full-score cut-point.
    GenderLinear {
        zero: f64,
        full_female: f64,
        full_male: f64,
        points: f64,
    },
    /// Fixed points when the comparison against the cut-off holds.
    Threshold {
        cutoff: f64,
        op: ThresholdOp,
        points: f64,
    },
    /// Proportional credit toward the cut-off, capped at full points.
    GradedThreshold {
        cutoff: f64,
        op: ThresholdOp,
        points: f64,
    },
}

/// One scored component: a column and its kernel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Component {
    pub column: &'static str,
    pub kernel: Kernel,
}

/// Score every component of a catalog against the validated frame.
///
/// `genders` is required only when the catalog contains gender-stratified
/// kernels; passing `None` for such a catalog is a contract error.
pub fn score_components(
    df: &DataFrame,
    components: &[Component],
    genders: Option<&[Gender]>,
) -> Result<Vec<Scores>, ScoreError> {
    components
        .iter()
        .map(|component| {
            let values = numeric_column(df, component.column)?;
            match component.kernel {
                Kernel::Linear { zero, full, points } => {
                    Ok(kernels::linear(&values, zero, full, points))
                }
                Kernel::GenderLinear {
                    zero,
                    full_female,
                    full_male,
                    points,
                } => {
                    let genders = genders.ok_or_else(|| ScoreError::GenderRequired {
                        column: component.column.to_string(),
                    })?;
                    Ok(kernels::gender_linear(
                        &values,
                        genders,
                        zero,
                        full_female,
                        full_male,
                        points,
                    ))
                }
                Kernel::Threshold { cutoff, op, points } => {
                    Ok(kernels::threshold(&values, cutoff, op, points))
                }
                Kernel::GradedThreshold { cutoff, op, points } => {
                    Ok(kernels::graded_threshold(&values, cutoff, op, points))
                }
            }
        })
        .collect()
}

/// Column names of a catalog, in declaration order.
pub fn catalog_columns(components: &[Component]) -> Vec<&'static str> {
    components.iter().map(|component| component.column).collect()
}
