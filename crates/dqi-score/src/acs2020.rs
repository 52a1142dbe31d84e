//! American Cancer Society 2020 diet score.
//!
//! Most components are ranked into gender-stratified cohort quartiles and
//! mapped through explicit point schedules; sugar-sweetened beverages use a
//! fixed piecewise schedule. Version 2 replaces the processed-food ratio
//! with raw servings normalized per 1000 kcal before ranking. A missing
//! component makes the row's total missing.

use polars::prelude::DataFrame;

use dqi_model::Gender;
use dqi_validate::{ValidateOptions, validate_frame};

use crate::error::ScoreError;
use crate::frame::{Scores, gender_column, numeric_column, sum_components_strict};
use crate::quantile::grouped_quantile_bins;

pub const ACS2020_V1_KEYS: [&str; 9] = [
    "gender",
    "VEG_SERV_ACS2020",
    "VEG_ITEMS_SERV_ACS2020",
    "FRT_SERV_ACS2020",
    "FRT_ITEMS_SERV_ACS2020",
    "WGRAIN_SERV_ACS2020",
    "REDPROC_MEAT_SERV_ACS2020",
    "HPFRG_RATIO_SERV_ACS2020",
    "SSB_FRTJ_SERV_ACS2020",
];

pub const ACS2020_V2_KEYS: [&str; 10] = [
    "gender",
    "VEG_SERV_ACS2020",
    "VEG_ITEMS_SERV_ACS2020",
    "FRT_SERV_ACS2020",
    "FRT_ITEMS_SERV_ACS2020",
    "WGRAIN_SERV_ACS2020",
    "REDPROC_MEAT_SERV_ACS2020",
    "HPFRG_SERV_ACS2020",
    "SSB_FRTJ_SERV_ACS2020",
    "TOTALKCAL_ACS2020",
];

/// Quarter-point schedule for vegetable and fruit quantity/variety.
const QUARTER_POINTS: [f64; 4] = [0.0, 0.25, 0.5, 0.75];
/// Whole-grain schedule rewards the top quartile with 3 points.
const WGRAIN_POINTS: [f64; 4] = [0.0, 1.0, 2.0, 3.0];
/// Red/processed meat is reverse-scored.
const RED_MEAT_POINTS: [f64; 4] = [3.0, 2.0, 1.0, 0.0];
/// Highly processed food is reverse-scored in half-point steps.
const HPFRG_POINTS: [f64; 4] = [1.5, 1.0, 0.5, 0.0];

fn quartile_scores(values: &[Option<f64>], genders: &[Gender], schedule: [f64; 4]) -> Scores {
    grouped_quantile_bins(values, genders, 4)
        .into_iter()
        .map(|bin| bin.map(|b| schedule[b.min(3)]))
        .collect()
}

/// Fixed SSB schedule; zero consumption earns the full 1.5 points and a
/// missing value earns 0 rather than propagating.
fn ssb_scores(values: &[Option<f64>]) -> Scores {
    values
        .iter()
        .map(|value| {
            Some(match value {
                Some(v) if *v >= 1.0 => 0.0,
                Some(v) if *v >= 0.428 => 0.5,
                Some(v) if *v > 0.0 => 1.0,
                Some(_) => 1.5,
                None => 0.0,
            })
        })
        .collect()
}

fn quartile_parts(
    df: &DataFrame,
    genders: &[Gender],
    processed_food: Scores,
) -> Result<Vec<Scores>, ScoreError> {
    let mut parts = Vec::with_capacity(8);
    for column in [
        "VEG_SERV_ACS2020",
        "VEG_ITEMS_SERV_ACS2020",
        "FRT_SERV_ACS2020",
        "FRT_ITEMS_SERV_ACS2020",
    ] {
        parts.push(quartile_scores(
            &numeric_column(df, column)?,
            genders,
            QUARTER_POINTS,
        ));
    }
    parts.push(quartile_scores(
        &numeric_column(df, "WGRAIN_SERV_ACS2020")?,
        genders,
        WGRAIN_POINTS,
    ));
    parts.push(quartile_scores(
        &numeric_column(df, "REDPROC_MEAT_SERV_ACS2020")?,
        genders,
        RED_MEAT_POINTS,
    ));
    parts.push(quartile_scores(&processed_food, genders, HPFRG_POINTS));
    parts.push(ssb_scores(&numeric_column(df, "SSB_FRTJ_SERV_ACS2020")?));
    Ok(parts)
}

/// Calculate ACS2020 version 1 (0-9), ratio-based processed-food input.
pub fn calculate_acs2020_v1(df: &DataFrame) -> Result<Scores, ScoreError> {
    let coerced = validate_frame(df, &ACS2020_V1_KEYS, &ValidateOptions::default())?;
    let genders = gender_column(&coerced)?;
    let processed = numeric_column(&coerced, "HPFRG_RATIO_SERV_ACS2020")?;
    let parts = quartile_parts(&coerced, &genders, processed)?;
    Ok(sum_components_strict(&parts, coerced.height()))
}

/// Calculate ACS2020 version 2 (0-9), processed-food servings normalized
/// per 1000 kcal of total energy before ranking.
pub fn calculate_acs2020_v2(df: &DataFrame) -> Result<Scores, ScoreError> {
    let coerced = validate_frame(df, &ACS2020_V2_KEYS, &ValidateOptions::default())?;
    let genders = gender_column(&coerced)?;

    let servings = numeric_column(&coerced, "HPFRG_SERV_ACS2020")?;
    let energy = numeric_column(&coerced, "TOTALKCAL_ACS2020")?;
    let processed: Scores = servings
        .iter()
        .zip(&energy)
        .map(|(servings, energy)| match (servings, energy) {
            (Some(s), Some(e)) if *e > 0.0 => Some(s / (e / 1000.0)),
            _ => None,
        })
        .collect();

    let parts = quartile_parts(&coerced, &genders, processed)?;
    Ok(sum_components_strict(&parts, coerced.height()))
}
