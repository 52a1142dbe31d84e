//! MIND diet score (Morris et al., 2015).
//!
//! Fifteen components scored in 0/0.5/1 steps against weekly serving
//! thresholds. Brain-healthy foods earn more with higher consumption,
//! unhealthy foods with lower consumption; olive oil is a daily-use flag
//! worth a full point. Total ranges 0-15.

use polars::prelude::DataFrame;

use dqi_validate::{ValidateOptions, validate_frame};

use crate::error::ScoreError;
use crate::frame::{Scores, numeric_column, sum_components};

#[derive(Debug, Clone, Copy, PartialEq)]
enum MindKind {
    /// 1 point at or above `high` servings, 0.5 from `med` up to `high`.
    Healthy { high: f64, med: f64 },
    /// 1 point at or below `high` servings, 0.5 above `high` up to `med`.
    Unhealthy { high: f64, med: f64 },
    /// Daily-use flag: any nonzero value earns the point.
    Flag,
}

const MIND_COMPONENTS: [(&str, MindKind); 15] = [
    ("leafy_green_veg_servings", MindKind::Healthy { high: 6.0, med: 3.0 }),
    ("other_veg_servings", MindKind::Healthy { high: 6.0, med: 3.0 }),
    ("nut_servings", MindKind::Healthy { high: 5.0, med: 3.0 }),
    ("berry_servings", MindKind::Healthy { high: 2.0, med: 1.0 }),
    ("bean_servings", MindKind::Healthy { high: 3.0, med: 1.5 }),
    ("whole_grains_servings", MindKind::Healthy { high: 3.0, med: 1.5 }),
    ("fish_servings", MindKind::Healthy { high: 1.0, med: 0.5 }),
    ("poultry_servings", MindKind::Healthy { high: 2.0, med: 1.0 }),
    ("olive_oil_daily_use", MindKind::Flag),
    ("wine_servings", MindKind::Healthy { high: 1.0, med: 0.5 }),
    ("red_meat_servings", MindKind::Unhealthy { high: 0.0, med: 1.0 }),
    ("butter_servings", MindKind::Unhealthy { high: 1.0, med: 1.5 }),
    ("cheese_servings", MindKind::Unhealthy { high: 1.0, med: 3.0 }),
    ("pastry_sweets_servings", MindKind::Unhealthy { high: 1.0, med: 3.0 }),
    ("fried_food_servings", MindKind::Unhealthy { high: 1.0, med: 3.0 }),
];

pub const MIND_COMPONENT_KEYS: [&str; 15] = [
    "leafy_green_veg_servings",
    "other_veg_servings",
    "nut_servings",
    "berry_servings",
    "bean_servings",
    "whole_grains_servings",
    "fish_servings",
    "poultry_servings",
    "olive_oil_daily_use",
    "wine_servings",
    "red_meat_servings",
    "butter_servings",
    "cheese_servings",
    "pastry_sweets_servings",
    "fried_food_servings",
];

fn component_score(value: Option<f64>, kind: MindKind) -> f64 {
    let Some(v) = value else { return 0.0 };
    match kind {
        MindKind::Healthy { high, med } => {
            if v >= high {
                1.0
            } else if v >= med {
                0.5
            } else {
                0.0
            }
        }
        MindKind::Unhealthy { high, med } => {
            if v <= high {
                1.0
            } else if v <= med {
                0.5
            } else {
                0.0
            }
        }
        MindKind::Flag => {
            if v != 0.0 {
                1.0
            } else {
                0.0
            }
        }
    }
}

/// Calculate the MIND diet score (0-15).
pub fn calculate_mind(df: &DataFrame) -> Result<Scores, ScoreError> {
    let coerced = validate_frame(df, &MIND_COMPONENT_KEYS, &ValidateOptions::default())?;

    let mut parts = Vec::with_capacity(MIND_COMPONENTS.len());
    for (column, kind) in MIND_COMPONENTS {
        let values = numeric_column(&coerced, column)?;
        parts.push(
            values
                .iter()
                .map(|value| Some(component_score(*value, kind)))
                .collect(),
        );
    }
    Ok(sum_components(&parts, coerced.height()))
}
