//! Healthy Eating Index family: HEI-2015, HEI-2020 and HEI-Toddlers-2020.
//!
//! One generic evaluator over a per-version standards table. Food-group
//! components are densities per 1000 kcal scored as adequacy (0 at zero
//! intake) or moderation (full points at or below the lower cut, 0 at or
//! above the upper); fatty-acid quality is the (MUFA+PUFA)/SFA ratio;
//! added sugars and saturated fat are scored as percent of energy. All
//! versions total 0-100.

use polars::prelude::DataFrame;

use dqi_validate::{ValidateOptions, validate_frame};

use crate::error::ScoreError;
use crate::frame::{Scores, numeric_column, sum_components};
use crate::kernels::{density_per_1000, linear, percent_of_energy, ratio2};

/// Per-version scoring standards. Adequacy fields are the density at which
/// full points are reached; moderation fields are (full, zero) cut pairs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeiStandards {
    pub total_fruit_full: f64,
    pub whole_fruit_full: f64,
    pub total_veg_full: f64,
    pub greens_beans_full: f64,
    pub whole_grains_full: f64,
    pub dairy_full: f64,
    pub protein_full: f64,
    pub seafood_plant_full: f64,
    pub fatty_acid_zero: f64,
    pub fatty_acid_full: f64,
    pub refined_grains_full: f64,
    pub refined_grains_zero: f64,
    pub sodium_full_mg: f64,
    pub sodium_zero_mg: f64,
    pub added_sugars_full_pct: f64,
    pub added_sugars_zero_pct: f64,
    pub sat_fat_full_pct: f64,
    pub sat_fat_zero_pct: f64,
}

pub const HEI_2015: HeiStandards = HeiStandards {
    total_fruit_full: 0.8,
    whole_fruit_full: 0.4,
    total_veg_full: 1.1,
    greens_beans_full: 0.2,
    whole_grains_full: 1.5,
    dairy_full: 1.3,
    protein_full: 2.5,
    seafood_plant_full: 0.8,
    fatty_acid_zero: 1.2,
    fatty_acid_full: 2.5,
    refined_grains_full: 1.8,
    refined_grains_zero: 4.3,
    sodium_full_mg: 1100.0,
    sodium_zero_mg: 2000.0,
    added_sugars_full_pct: 6.5,
    added_sugars_zero_pct: 26.0,
    sat_fat_full_pct: 8.0,
    sat_fat_zero_pct: 16.0,
};

/// HEI-2020 kept the HEI-2015 scoring standards; only the toddler variant
/// changed cut-points.
pub const HEI_2020: HeiStandards = HEI_2015;

pub const HEI_TODDLERS_2020: HeiStandards = HeiStandards {
    total_fruit_full: 0.7,
    whole_fruit_full: 0.3,
    total_veg_full: 0.9,
    greens_beans_full: 0.1,
    whole_grains_full: 1.5,
    dairy_full: 2.0,
    protein_full: 2.0,
    seafood_plant_full: 0.5,
    fatty_acid_zero: 0.9,
    fatty_acid_full: 1.5,
    refined_grains_full: 1.5,
    refined_grains_zero: 3.4,
    sodium_full_mg: 1100.0,
    sodium_zero_mg: 1700.0,
    added_sugars_full_pct: 1.25,
    added_sugars_zero_pct: 13.8,
    sat_fat_full_pct: 8.0,
    sat_fat_zero_pct: 16.4,
};

pub const HEI_COMPONENT_KEYS: [&str; 14] = [
    "total_fruit_cup",
    "whole_fruit_cup",
    "total_veg_cup",
    "greens_beans_cup",
    "whole_grains_oz",
    "dairy_cup",
    "protein_oz",
    "seafood_plant_oz",
    "monounsaturated_fat_g",
    "polyunsaturated_fat_g",
    "saturated_fat_g",
    "refined_grains_oz",
    "sodium_mg",
    "added_sugars_g",
];

/// Energy column required alongside the component columns.
pub const HEI_ENERGY_COLUMN: &str = "energy_kcal";

fn evaluate(df: &DataFrame, standards: &HeiStandards) -> Result<Scores, ScoreError> {
    let mut required: Vec<&str> = HEI_COMPONENT_KEYS.to_vec();
    required.push(HEI_ENERGY_COLUMN);
    let coerced = validate_frame(df, &required, &ValidateOptions::default())?;
    let energy = numeric_column(&coerced, HEI_ENERGY_COLUMN)?;

    let adequacy: [(&str, f64, f64); 8] = [
        ("total_fruit_cup", standards.total_fruit_full, 5.0),
        ("whole_fruit_cup", standards.whole_fruit_full, 5.0),
        ("total_veg_cup", standards.total_veg_full, 5.0),
        ("greens_beans_cup", standards.greens_beans_full, 5.0),
        ("whole_grains_oz", standards.whole_grains_full, 10.0),
        ("dairy_cup", standards.dairy_full, 10.0),
        ("protein_oz", standards.protein_full, 5.0),
        ("seafood_plant_oz", standards.seafood_plant_full, 5.0),
    ];

    let mut parts = Vec::with_capacity(13);
    for (column, full, points) in adequacy {
        let density = density_per_1000(&numeric_column(&coerced, column)?, &energy);
        parts.push(linear(&density, 0.0, full, points));
    }

    let fatty_ratio = ratio2(
        &numeric_column(&coerced, "monounsaturated_fat_g")?,
        &numeric_column(&coerced, "polyunsaturated_fat_g")?,
        &numeric_column(&coerced, "saturated_fat_g")?,
    );
    parts.push(linear(
        &fatty_ratio,
        standards.fatty_acid_zero,
        standards.fatty_acid_full,
        10.0,
    ));

    let refined = density_per_1000(&numeric_column(&coerced, "refined_grains_oz")?, &energy);
    parts.push(linear(
        &refined,
        standards.refined_grains_zero,
        standards.refined_grains_full,
        10.0,
    ));

    let sodium = density_per_1000(&numeric_column(&coerced, "sodium_mg")?, &energy);
    parts.push(linear(
        &sodium,
        standards.sodium_zero_mg,
        standards.sodium_full_mg,
        10.0,
    ));

    let sugars_pct = percent_of_energy(&numeric_column(&coerced, "added_sugars_g")?, &energy, 4.0);
    parts.push(linear(
        &sugars_pct,
        standards.added_sugars_zero_pct,
        standards.added_sugars_full_pct,
        10.0,
    ));

    let sat_fat_pct =
        percent_of_energy(&numeric_column(&coerced, "saturated_fat_g")?, &energy, 9.0);
    parts.push(linear(
        &sat_fat_pct,
        standards.sat_fat_zero_pct,
        standards.sat_fat_full_pct,
        10.0,
    ));

    Ok(sum_components(&parts, coerced.height()))
}

/// Calculate HEI-2015 (0-100).
pub fn calculate_hei_2015(df: &DataFrame) -> Result<Scores, ScoreError> {
    evaluate(df, &HEI_2015)
}

/// Calculate HEI-2020 (0-100).
pub fn calculate_hei_2020(df: &DataFrame) -> Result<Scores, ScoreError> {
    evaluate(df, &HEI_2020)
}

/// Calculate HEI-Toddlers-2020 (0-100), for 12-23 month olds.
pub fn calculate_hei_toddlers_2020(df: &DataFrame) -> Result<Scores, ScoreError> {
    evaluate(df, &HEI_TODDLERS_2020)
}
