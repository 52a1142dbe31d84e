//! HCNS 2013 survey aggregation for MIND scoring.
//!
//! The HCNS food-frequency export spreads each MIND component over several
//! raw frequency columns. This step sums each group into the MIND serving
//! column it feeds (the olive-oil column is a presence flag, not a sum)
//! and is strictly upstream of the MIND calculator.

use polars::prelude::{DataFrame, IntoColumn, NamedFrom, Series};

use dqi_validate::{ValidateOptions, validate_frame};

use crate::error::ScoreError;
use crate::frame::{Scores, numeric_column};
use crate::mind::{MIND_COMPONENT_KEYS, calculate_mind};

/// HCNS 2013 raw frequency columns feeding each MIND component.
pub const HCNS_MIND_MAP: [(&str, &[&str]); 15] = [
    ("leafy_green_veg_servings", &["C3A_FF_13"]),
    ("other_veg_servings", &["C3B_FF_13"]),
    ("berry_servings", &["C4A_FF_13", "C4B_FF_13"]),
    (
        "nut_servings",
        &["C5A_FF_13", "C5B_FF_13", "C5C_FF_13", "C5D_FF_13"],
    ),
    (
        "whole_grains_servings",
        &["C6A_FF_13", "C6B_FF_13", "C6C_FF_13", "C6D_FF_13"],
    ),
    ("fish_servings", &["C7A_FF_13", "C7B_FF_13"]),
    ("bean_servings", &["C8A_FF_13", "C8B_FF_13", "C8C_FF_13"]),
    ("poultry_servings", &["C7E_FF_13", "C7F_FF_13"]),
    ("olive_oil_daily_use", &["C9A_FF_13"]),
    ("wine_servings", &["C9B_FF_13"]),
    (
        "red_meat_servings",
        &["C9C_FF_13", "C9D_FF_13", "C9E_FF_13"],
    ),
    ("butter_servings", &["C9F_FF_13"]),
    ("cheese_servings", &["C9G_FF_13", "C9H_FF_13"]),
    (
        "pastry_sweets_servings",
        &["C9I_FF_13", "C9J_FF_13", "C9K_FF_13"],
    ),
    ("fried_food_servings", &["C9L_FF_13", "C9M_FF_13"]),
];

/// Aggregate HCNS 2013 raw columns into MIND component servings.
///
/// The returned frame has exactly the MIND component columns, in MIND
/// declaration order.
pub fn aggregate_hcns_to_mind(df: &DataFrame) -> Result<DataFrame, ScoreError> {
    let required: Vec<&str> = HCNS_MIND_MAP
        .iter()
        .flat_map(|(_, sources)| sources.iter().copied())
        .collect();
    let coerced = validate_frame(df, &required, &ValidateOptions::default())?;

    let mut columns = Vec::with_capacity(MIND_COMPONENT_KEYS.len());
    for target in MIND_COMPONENT_KEYS {
        let sources = HCNS_MIND_MAP
            .iter()
            .find(|(name, _)| *name == target)
            .map(|(_, sources)| *sources)
            .unwrap_or(&[]);
        let values: Scores = if target == "olive_oil_daily_use" {
            let flags = numeric_column(&coerced, sources[0])?;
            flags
                .iter()
                .map(|value| Some(if value.is_some_and(|v| v != 0.0) { 1.0 } else { 0.0 }))
                .collect()
        } else {
            let mut totals = vec![0.0; coerced.height()];
            for source in sources {
                let values = numeric_column(&coerced, source)?;
                for (total, value) in totals.iter_mut().zip(&values) {
                    if let Some(value) = value {
                        *total += value;
                    }
                }
            }
            totals.into_iter().map(Some).collect()
        };
        columns.push(Series::new(target.into(), values).into_column());
    }
    Ok(DataFrame::new(columns)?)
}

/// Calculate the MIND score directly from HCNS 2013 raw columns.
pub fn calculate_mind_from_hcns(df: &DataFrame) -> Result<Scores, ScoreError> {
    let servings = aggregate_hcns_to_mind(df)?;
    calculate_mind(&servings)
}
