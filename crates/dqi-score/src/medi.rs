//! Mediterranean Diet Index (MEDI), PREDIMED serving cut-offs.
//!
//! Eleven components each contribute 0 or 1 point against a fixed serving
//! cut-off. The v2 variant grades the same components continuously:
//! proportional credit toward an adequacy cut-off, reversed for
//! moderation items.

use polars::prelude::DataFrame;

use dqi_validate::{ValidateOptions, validate_frame};

use crate::component::{Component, Kernel, ThresholdOp, score_components};
use crate::error::ScoreError;
use crate::frame::{Scores, sum_components};

const OLIVE_OIL_CUTOFF: f64 = 5.0;
const WEEKLY_3: f64 = 3.0 / 7.0;
const WEEKLY_2: f64 = 2.0 / 7.0;

const MEDI_COMPONENTS: [(&str, f64, ThresholdOp); 11] = [
    ("olive_oil_serv_medi", OLIVE_OIL_CUTOFF, ThresholdOp::AtLeast),
    ("frt_serv_medi", 3.0, ThresholdOp::AtLeast),
    ("veg_serv_medi", 2.0, ThresholdOp::AtLeast),
    ("legumes_serv_medi", WEEKLY_3, ThresholdOp::AtLeast),
    ("nuts_serv_medi", WEEKLY_3, ThresholdOp::AtLeast),
    ("fish_seafood_serv_medi", WEEKLY_3, ThresholdOp::AtLeast),
    ("alcohol_serv_medi", 1.0, ThresholdOp::AtLeast),
    ("ssb_serv_medi", 1.0, ThresholdOp::Below),
    ("sweets_serv_medi", WEEKLY_2, ThresholdOp::Below),
    ("discret_fat_serv_medi", 1.0, ThresholdOp::Below),
    ("redproc_meat_serv_medi", 1.0, ThresholdOp::Below),
];

pub const MEDI_COMPONENT_KEYS: [&str; 11] = [
    "olive_oil_serv_medi",
    "frt_serv_medi",
    "veg_serv_medi",
    "legumes_serv_medi",
    "nuts_serv_medi",
    "fish_seafood_serv_medi",
    "alcohol_serv_medi",
    "ssb_serv_medi",
    "sweets_serv_medi",
    "discret_fat_serv_medi",
    "redproc_meat_serv_medi",
];

/// The graded variant scores the same columns.
pub const MEDI_V2_COMPONENT_KEYS: [&str; 11] = MEDI_COMPONENT_KEYS;

fn catalog(graded: bool) -> Vec<Component> {
    MEDI_COMPONENTS
        .iter()
        .copied()
        .map(|(column, cutoff, op)| Component {
            column,
            kernel: if graded {
                Kernel::GradedThreshold {
                    cutoff,
                    op,
                    points: 1.0,
                }
            } else {
                Kernel::Threshold {
                    cutoff,
                    op,
                    points: 1.0,
                }
            },
        })
        .collect()
}

/// Calculate the binary MEDI screener (0-11).
pub fn calculate_medi(df: &DataFrame) -> Result<Scores, ScoreError> {
    let coerced = validate_frame(df, &MEDI_COMPONENT_KEYS, &ValidateOptions::default())?;
    let parts = score_components(&coerced, &catalog(false), None)?;
    Ok(sum_components(&parts, coerced.height()))
}

/// Calculate the graded MEDI v2 (0-11, continuous).
pub fn calculate_medi_v2(df: &DataFrame) -> Result<Scores, ScoreError> {
    let coerced = validate_frame(df, &MEDI_V2_COMPONENT_KEYS, &ValidateOptions::default())?;
    let parts = score_components(&coerced, &catalog(true), None)?;
    Ok(sum_components(&parts, coerced.height()))
}
