//! Alternate Mediterranean Diet Score (aMED).
//!
//! Each food component is scored against the cohort's own median within
//! the scoring call, not a fixed external cut-point: healthy components
//! earn a point at or above the median (and above zero), unhealthy
//! components below the median or at zero. Alcohol uses the fixed
//! 10-25 g/day range.

use polars::prelude::DataFrame;

use dqi_validate::{ValidateOptions, validate_frame};

use crate::error::ScoreError;
use crate::frame::{Scores, numeric_column, sum_components};
use crate::quantile::interpolated_quantile;

#[derive(Clone, Copy, PartialEq, Eq)]
enum MedComponent {
    Healthy,
    Unhealthy,
    Alcohol,
}

const AMED_COMPONENTS: [(&str, MedComponent); 9] = [
    ("FRT_FRTJ_SERV_MED", MedComponent::Healthy),
    ("VEG_SERV_MED", MedComponent::Healthy),
    ("WGRAIN_SERV_MED", MedComponent::Healthy),
    ("LEGUMES_SERV_MED", MedComponent::Healthy),
    ("NUTS_SERV_MED", MedComponent::Healthy),
    ("FISH_SERV_MED", MedComponent::Healthy),
    ("REDPROC_MEAT_SERV_MED", MedComponent::Unhealthy),
    ("MONSATFAT_SERV_MED", MedComponent::Healthy),
    ("ALCOHOL_SERV_MED", MedComponent::Alcohol),
];

pub const AMED_COMPONENT_KEYS: [&str; 9] = [
    "FRT_FRTJ_SERV_MED",
    "VEG_SERV_MED",
    "WGRAIN_SERV_MED",
    "LEGUMES_SERV_MED",
    "NUTS_SERV_MED",
    "FISH_SERV_MED",
    "REDPROC_MEAT_SERV_MED",
    "MONSATFAT_SERV_MED",
    "ALCOHOL_SERV_MED",
];

fn cohort_median(values: &[Option<f64>]) -> Option<f64> {
    let mut present: Vec<f64> = values.iter().flatten().copied().collect();
    if present.is_empty() {
        return None;
    }
    present.sort_by(f64::total_cmp);
    Some(interpolated_quantile(&present, 0.5))
}

/// Calculate the aMED score (0-9).
pub fn calculate_amed(df: &DataFrame) -> Result<Scores, ScoreError> {
    let coerced = validate_frame(df, &AMED_COMPONENT_KEYS, &ValidateOptions::default())?;

    let mut parts = Vec::with_capacity(AMED_COMPONENTS.len());
    for (column, component) in AMED_COMPONENTS {
        let values = numeric_column(&coerced, column)?;
        let scores: Scores = match component {
            MedComponent::Alcohol => values
                .iter()
                .map(|value| {
                    let met = value.is_some_and(|v| (10.0..=25.0).contains(&v));
                    Some(if met { 1.0 } else { 0.0 })
                })
                .collect(),
            MedComponent::Healthy | MedComponent::Unhealthy => {
                let median = cohort_median(&values);
                values
                    .iter()
                    .map(|value| {
                        let met = match (value, median, component) {
                            (Some(v), Some(median), MedComponent::Healthy) => {
                                *v >= median && *v > 0.0
                            }
                            (Some(v), Some(median), MedComponent::Unhealthy) => {
                                *v < median || *v == 0.0
                            }
                            _ => false,
                        };
                        Some(if met { 1.0 } else { 0.0 })
                    })
                    .collect()
            }
        };
        parts.push(scores);
    }
    Ok(sum_components(&parts, coerced.height()))
}
