//! Planetary Health Diet Index (PHDI).
//!
//! Fifteen components score linearly against EAT-Lancet gram targets
//! (legumes and soy cap at 5 points, everything else at 10; whole grains
//! use gender-specific maxima). The v2 variant accepts raw grams for the
//! two added-fat components and added sugar, converting them to percent of
//! energy (9 kcal/g for fats, 4 kcal/g for sugar) before delegating to the
//! standard kernel.

use polars::prelude::{DataFrame, IntoColumn, NamedFrom, Series};

use dqi_validate::{ValidateOptions, validate_frame};

use crate::component::{Component, Kernel, score_components};
use crate::error::ScoreError;
use crate::frame::{Scores, gender_column, numeric_column, sum_components};
use crate::kernels::percent_of_energy;

const PHDI_COMPONENTS: [Component; 15] = [
    Component {
        column: "wgrain_serv_phdi",
        kernel: Kernel::GenderLinear {
            zero: 0.0,
            full_female: 75.0,
            full_male: 90.0,
            points: 10.0,
        },
    },
    Component {
        column: "starchy_veg_serv_phdi",
        kernel: Kernel::Linear { zero: 200.0, full: 50.0, points: 10.0 },
    },
    Component {
        column: "veg_serv_phdi",
        kernel: Kernel::Linear { zero: 0.0, full: 300.0, points: 10.0 },
    },
    Component {
        column: "frt_serv_phdi",
        kernel: Kernel::Linear { zero: 0.0, full: 200.0, points: 10.0 },
    },
    Component {
        column: "dairy_serv_phdi",
        kernel: Kernel::Linear { zero: 1000.0, full: 250.0, points: 10.0 },
    },
    Component {
        column: "redproc_meat_serv_phdi",
        kernel: Kernel::Linear { zero: 100.0, full: 14.0, points: 10.0 },
    },
    Component {
        column: "poultry_serv_phdi",
        kernel: Kernel::Linear { zero: 100.0, full: 29.0, points: 10.0 },
    },
    Component {
        column: "egg_serv_phdi",
        kernel: Kernel::Linear { zero: 120.0, full: 13.0, points: 10.0 },
    },
    Component {
        column: "fish_serv_phdi",
        kernel: Kernel::Linear { zero: 0.0, full: 28.0, points: 10.0 },
    },
    Component {
        column: "nuts_serv_phdi",
        kernel: Kernel::Linear { zero: 0.0, full: 50.0, points: 10.0 },
    },
    Component {
        column: "legumes_serv_phdi",
        kernel: Kernel::Linear { zero: 0.0, full: 100.0, points: 5.0 },
    },
    Component {
        column: "soy_serv_phdi",
        kernel: Kernel::Linear { zero: 0.0, full: 50.0, points: 5.0 },
    },
    Component {
        column: "added_fat_unsat_serv_phdi",
        kernel: Kernel::Linear { zero: 3.5, full: 21.0, points: 10.0 },
    },
    Component {
        column: "added_fat_sat_trans_serv_phdi",
        kernel: Kernel::Linear { zero: 10.0, full: 0.0, points: 10.0 },
    },
    Component {
        column: "added_sugar_serv_phdi",
        kernel: Kernel::Linear { zero: 25.0, full: 5.0, points: 10.0 },
    },
];

pub const PHDI_COMPONENT_KEYS: [&str; 16] = [
    "wgrain_serv_phdi",
    "starchy_veg_serv_phdi",
    "veg_serv_phdi",
    "frt_serv_phdi",
    "dairy_serv_phdi",
    "redproc_meat_serv_phdi",
    "poultry_serv_phdi",
    "egg_serv_phdi",
    "fish_serv_phdi",
    "nuts_serv_phdi",
    "legumes_serv_phdi",
    "soy_serv_phdi",
    "added_fat_unsat_serv_phdi",
    "added_fat_sat_trans_serv_phdi",
    "added_sugar_serv_phdi",
    "gender",
];

/// Energy column required by the gram-based v2 inputs.
pub const PHDI_V2_ENERGY_COLUMN: &str = "totalkcal_phdi";

/// Calculate the PHDI (0-140).
pub fn calculate_phdi(df: &DataFrame) -> Result<Scores, ScoreError> {
    let coerced = validate_frame(df, &PHDI_COMPONENT_KEYS, &ValidateOptions::default())?;
    let genders = gender_column(&coerced)?;
    let parts = score_components(&coerced, &PHDI_COMPONENTS, Some(&genders))?;
    Ok(sum_components(&parts, coerced.height()))
}

/// Calculate the PHDI from gram-based fat and sugar inputs.
///
/// Rescales the added-fat and added-sugar columns to percent of energy in a
/// copy of the frame, then applies the standard PHDI kernel. The caller's
/// frame is never modified.
pub fn calculate_phdi_v2(df: &DataFrame) -> Result<Scores, ScoreError> {
    let mut required: Vec<&str> = PHDI_COMPONENT_KEYS.to_vec();
    required.push(PHDI_V2_ENERGY_COLUMN);
    let mut coerced = validate_frame(df, &required, &ValidateOptions::default())?;
    let energy = numeric_column(&coerced, PHDI_V2_ENERGY_COLUMN)?;

    for (column, kcal_per_gram) in [
        ("added_fat_unsat_serv_phdi", 9.0),
        ("added_fat_sat_trans_serv_phdi", 9.0),
        ("added_sugar_serv_phdi", 4.0),
    ] {
        let rescaled = percent_of_energy(&numeric_column(&coerced, column)?, &energy, kcal_per_gram);
        coerced.with_column(Series::new(column.into(), rescaled).into_column())?;
    }
    calculate_phdi(&coerced)
}
