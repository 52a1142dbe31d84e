//! Alternative Healthy Eating Index (AHEI-2010).
//!
//! Nine components score 0-10 against fixed cut-points (whole grains with
//! gender-specific maxima, alcohol through a gender-specific J-curve);
//! sodium is population-relative, scored by cohort decile of sodium intake
//! per 2000 kcal.

use polars::prelude::DataFrame;

use dqi_model::Gender;
use dqi_validate::{ValidateOptions, validate_frame};

use crate::component::{Component, Kernel, score_components};
use crate::error::ScoreError;
use crate::frame::{Scores, gender_column, numeric_column, sum_components};
use crate::quantile::quantile_bins;

const AHEI_COMPONENTS: [Component; 9] = [
    Component {
        column: "veg_serv",
        kernel: Kernel::Linear { zero: 0.0, full: 5.0, points: 10.0 },
    },
    Component {
        column: "fruit_serv",
        kernel: Kernel::Linear { zero: 0.0, full: 4.0, points: 10.0 },
    },
    Component {
        column: "whole_grain",
        kernel: Kernel::GenderLinear {
            zero: 0.0,
            full_female: 75.0,
            full_male: 90.0,
            points: 10.0,
        },
    },
    Component {
        column: "nuts_legumes_serv",
        kernel: Kernel::Linear { zero: 0.0, full: 1.0, points: 10.0 },
    },
    Component {
        column: "n3_fat",
        kernel: Kernel::Linear { zero: 0.0, full: 250.0, points: 10.0 },
    },
    Component {
        column: "pufa_pct_energy",
        kernel: Kernel::Linear { zero: 2.0, full: 10.0, points: 10.0 },
    },
    Component {
        column: "ssb_fruit_juice_serv",
        kernel: Kernel::Linear { zero: 1.0, full: 0.0, points: 10.0 },
    },
    Component {
        column: "red_processed_meat_serv",
        kernel: Kernel::Linear { zero: 1.5, full: 0.0, points: 10.0 },
    },
    Component {
        column: "trans_fat_pct",
        kernel: Kernel::Linear { zero: 4.0, full: 0.5, points: 10.0 },
    },
];

pub const AHEI_COMPONENT_KEYS: [&str; 13] = [
    "veg_serv",
    "fruit_serv",
    "whole_grain",
    "nuts_legumes_serv",
    "n3_fat",
    "pufa_pct_energy",
    "ssb_fruit_juice_serv",
    "red_processed_meat_serv",
    "trans_fat_pct",
    "alcohol_serv",
    "sodium",
    "total_kcal",
    "gender",
];

/// J-curve alcohol score: full points inside the gender-specific optimal
/// range, linear decline above it, partial credit below 0.5 servings and a
/// fixed 2.5 points at (near-)zero consumption.
fn alcohol_score(values: &[Option<f64>], genders: &[Gender]) -> Scores {
    values
        .iter()
        .zip(genders)
        .map(|(value, gender)| {
            value.map(|v| {
                let score = if v <= 0.125 {
                    2.5
                } else if v < 0.5 {
                    v / 0.5 * 10.0
                } else {
                    match gender {
                        Gender::Female => {
                            if v <= 1.5 {
                                10.0
                            } else if v < 2.5 {
                                (2.5 - v) / (2.5 - 1.5) * 10.0
                            } else {
                                0.0
                            }
                        }
                        Gender::Male => {
                            if v <= 2.0 {
                                10.0
                            } else if v < 3.5 {
                                (3.5 - v) / (3.5 - 2.0) * 10.0
                            } else {
                                0.0
                            }
                        }
                    }
                };
                score.clamp(0.0, 10.0)
            })
        })
        .collect()
}

/// Sodium scored by cohort decile of sodium per 2000 kcal: the lowest
/// decile earns 10 points, the highest 0, spaced evenly in between.
fn sodium_decile_score(sodium: &[Option<f64>], kcal: &[Option<f64>]) -> Scores {
    let density: Vec<Option<f64>> = sodium
        .iter()
        .zip(kcal)
        .map(|(sodium, kcal)| match (sodium, kcal) {
            (Some(s), Some(k)) if *k > 0.0 => Some(s / (k / 2000.0)),
            _ => None,
        })
        .collect();
    quantile_bins(&density, 10)
        .into_iter()
        .map(|bin| bin.map(|b| (9 - b) as f64 * (10.0 / 9.0)))
        .collect()
}

/// Calculate the AHEI (0-110).
pub fn calculate_ahei(df: &DataFrame) -> Result<Scores, ScoreError> {
    let coerced = validate_frame(df, &AHEI_COMPONENT_KEYS, &ValidateOptions::default())?;
    let genders = gender_column(&coerced)?;

    let mut parts = score_components(&coerced, &AHEI_COMPONENTS, Some(&genders))?;
    parts.push(alcohol_score(
        &numeric_column(&coerced, "alcohol_serv")?,
        &genders,
    ));
    parts.push(sodium_decile_score(
        &numeric_column(&coerced, "sodium")?,
        &numeric_column(&coerced, "total_kcal")?,
    ));
    Ok(sum_components(&parts, coerced.height()))
}
