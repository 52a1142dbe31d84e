//! DASH Index with nutrient cut-points from the DASH trial.
//!
//! Unlike the quintile-based DASH score, DASHI scores each nutrient 0-1
//! against fixed trial targets; the total ranges 0-9.

use polars::prelude::DataFrame;

use dqi_validate::{ValidateOptions, validate_frame};

use crate::component::{Component, Kernel, score_components};
use crate::error::ScoreError;
use crate::frame::{Scores, sum_components};

const DASHI_COMPONENTS: [Component; 9] = [
    Component {
        column: "TOTAL_FAT_DASHI",
        kernel: Kernel::Linear { zero: 37.0, full: 27.0, points: 1.0 },
    },
    Component {
        column: "SAT_FAT_DASHI",
        kernel: Kernel::Linear { zero: 16.0, full: 6.0, points: 1.0 },
    },
    Component {
        column: "PROTEIN_DASHI",
        kernel: Kernel::Linear { zero: 15.0, full: 18.0, points: 1.0 },
    },
    Component {
        column: "CHOLESTEROL_DASHI",
        kernel: Kernel::Linear { zero: 285.7, full: 142.8, points: 1.0 },
    },
    Component {
        column: "FIBER_DASHI",
        kernel: Kernel::Linear { zero: 8.6, full: 29.5, points: 1.0 },
    },
    Component {
        column: "POTASSIUM_DASHI",
        kernel: Kernel::Linear { zero: 1619.0, full: 4476.0, points: 1.0 },
    },
    Component {
        column: "MAGNESIUM_DASHI",
        kernel: Kernel::Linear { zero: 157.0, full: 476.0, points: 1.0 },
    },
    Component {
        column: "CALCIUM_DASHI",
        kernel: Kernel::Linear { zero: 429.0, full: 1181.0, points: 1.0 },
    },
    Component {
        column: "SODIUM_DASHI",
        kernel: Kernel::Linear { zero: 2857.0, full: 2286.0, points: 1.0 },
    },
];

pub const DASHI_COMPONENT_KEYS: [&str; 9] = [
    "TOTAL_FAT_DASHI",
    "SAT_FAT_DASHI",
    "PROTEIN_DASHI",
    "CHOLESTEROL_DASHI",
    "FIBER_DASHI",
    "POTASSIUM_DASHI",
    "MAGNESIUM_DASHI",
    "CALCIUM_DASHI",
    "SODIUM_DASHI",
];

/// Calculate the DASH Index (0-9).
pub fn calculate_dashi(df: &DataFrame) -> Result<Scores, ScoreError> {
    let coerced = validate_frame(df, &DASHI_COMPONENT_KEYS, &ValidateOptions::default())?;
    let parts = score_components(&coerced, &DASHI_COMPONENTS, None)?;
    Ok(sum_components(&parts, coerced.height()))
}
