//! DASH score, quintile-based.
//!
//! Each component is ranked into cohort quintiles within the scoring call.
//! Healthy components score their quintile rank (1-5); for sodium,
//! red/processed meat and sweetened beverages the rank is reversed
//! (6 - rank), so the lowest-intake quintile earns 5 points.

use polars::prelude::DataFrame;

use dqi_validate::{ValidateOptions, validate_frame};

use crate::error::ScoreError;
use crate::frame::{Scores, numeric_column, sum_components};
use crate::quantile::quantile_bins;

const DASH_HEALTHY: [&str; 5] = [
    "fruits",
    "vegetables",
    "nuts_legumes",
    "whole_grains",
    "low_fat_dairy",
];

const DASH_UNHEALTHY: [&str; 3] = ["sodium", "red_processed_meats", "sweetened_beverages"];

pub const DASH_COMPONENT_KEYS: [&str; 8] = [
    "fruits",
    "vegetables",
    "nuts_legumes",
    "whole_grains",
    "low_fat_dairy",
    "sodium",
    "red_processed_meats",
    "sweetened_beverages",
];

fn quintile_rank_scores(values: &[Option<f64>], reversed: bool) -> Scores {
    quantile_bins(values, 5)
        .into_iter()
        .map(|bin| {
            bin.map(|b| {
                let rank = (b + 1) as f64;
                if reversed { 6.0 - rank } else { rank }
            })
        })
        .collect()
}

/// Calculate the quintile-based DASH score (8-40).
pub fn calculate_dash(df: &DataFrame) -> Result<Scores, ScoreError> {
    let coerced = validate_frame(df, &DASH_COMPONENT_KEYS, &ValidateOptions::default())?;

    let mut parts = Vec::with_capacity(DASH_COMPONENT_KEYS.len());
    for column in DASH_HEALTHY {
        parts.push(quintile_rank_scores(
            &numeric_column(&coerced, column)?,
            false,
        ));
    }
    for column in DASH_UNHEALTHY {
        parts.push(quintile_rank_scores(
            &numeric_column(&coerced, column)?,
            true,
        ));
    }
    Ok(sum_components(&parts, coerced.height()))
}
