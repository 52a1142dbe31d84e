//! Dietary Inflammatory Index.
//!
//! For each food parameter the intake is standardized against the published
//! global mean and standard deviation, mapped through the standard normal
//! CDF to a percentile, centered to [-1, 1] and weighted by the parameter's
//! inflammatory effect score. The index is the sum of the weighted,
//! centered percentiles. Missing intakes are imputed with the global mean
//! and therefore contribute exactly 0.

use polars::prelude::DataFrame;

use dqi_standards::DiiParameter;
use dqi_validate::{ValidateOptions, validate_frame};

use crate::error::ScoreError;
use crate::frame::{Scores, numeric_column};
use crate::kernels::normal_cdf;

/// Columns the DII calculator requires: one per loaded parameter.
pub fn dii_required_columns(parameters: &[DiiParameter]) -> Vec<String> {
    parameters.iter().map(|p| p.name.clone()).collect()
}

/// Calculate the Dietary Inflammatory Index for every row.
pub fn calculate_dii(
    df: &DataFrame,
    parameters: &[DiiParameter],
) -> Result<Scores, ScoreError> {
    let keys: Vec<&str> = parameters.iter().map(|p| p.name.as_str()).collect();
    let coerced = validate_frame(df, &keys, &ValidateOptions::default())?;

    let mut totals = vec![0.0; coerced.height()];
    for parameter in parameters {
        let values = numeric_column(&coerced, &parameter.name)?;
        for (total, value) in totals.iter_mut().zip(&values) {
            let intake = value.unwrap_or(parameter.mean);
            let z = (intake - parameter.mean) / parameter.sd;
            let centered = 2.0 * normal_cdf(z) - 1.0;
            *total += centered * parameter.effect;
        }
    }
    Ok(totals.into_iter().map(Some).collect())
}
