//! Serving-based Alternative Healthy Eating Index (AHEI-P).

use polars::prelude::DataFrame;

use dqi_validate::{ValidateOptions, validate_frame};

use crate::component::{Component, Kernel, score_components};
use crate::error::ScoreError;
use crate::frame::{Scores, sum_components};

/// Component cut-points: each scores 0-10 linearly between its extremes.
const AHEIP_COMPONENTS: [Component; 9] = [
    Component {
        column: "VEG_SERV_AHEIP",
        kernel: Kernel::Linear { zero: 0.0, full: 5.0, points: 10.0 },
    },
    Component {
        column: "FRT_SERV_AHEIP",
        kernel: Kernel::Linear { zero: 0.0, full: 4.0, points: 10.0 },
    },
    Component {
        column: "WHITERED_RT_SERV_AHEIP",
        kernel: Kernel::Linear { zero: 0.0, full: 4.0, points: 10.0 },
    },
    Component {
        column: "FIBER_SERV_AHEIP",
        kernel: Kernel::Linear { zero: 0.0, full: 25.0, points: 10.0 },
    },
    Component {
        column: "TRANS_SERV_AHEIP",
        kernel: Kernel::Linear { zero: 4.0, full: 0.5, points: 10.0 },
    },
    Component {
        column: "POLYSAT_RT_SERV_AHEIP",
        kernel: Kernel::Linear { zero: 0.1, full: 1.0, points: 10.0 },
    },
    Component {
        column: "CALCIUM_SERV_AHEIP",
        kernel: Kernel::Linear { zero: 0.0, full: 1200.0, points: 10.0 },
    },
    Component {
        column: "FOLATE_SERV_AHEIP",
        kernel: Kernel::Linear { zero: 0.0, full: 600.0, points: 10.0 },
    },
    Component {
        column: "IRON_SERV_AHEIP",
        kernel: Kernel::Linear { zero: 0.0, full: 27.0, points: 10.0 },
    },
];

pub const AHEIP_COMPONENT_KEYS: [&str; 9] = [
    "VEG_SERV_AHEIP",
    "FRT_SERV_AHEIP",
    "WHITERED_RT_SERV_AHEIP",
    "FIBER_SERV_AHEIP",
    "TRANS_SERV_AHEIP",
    "POLYSAT_RT_SERV_AHEIP",
    "CALCIUM_SERV_AHEIP",
    "FOLATE_SERV_AHEIP",
    "IRON_SERV_AHEIP",
];

/// Calculate the serving-based AHEI-P (0-90).
pub fn calculate_aheip(df: &DataFrame) -> Result<Scores, ScoreError> {
    let coerced = validate_frame(df, &AHEIP_COMPONENT_KEYS, &ValidateOptions::default())?;
    let parts = score_components(&coerced, &AHEIP_COMPONENTS, None)?;
    Ok(sum_components(&parts, coerced.height()))
}
