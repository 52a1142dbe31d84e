//! Descriptive statistics reported alongside each computed score column.

use serde::{Deserialize, Serialize};

/// Summary statistics over one score column.
///
/// Quintile boundaries are the interpolated quantiles at 0.2/0.4/0.6/0.8.
/// Missing scores are excluded before any statistic is computed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreSummary {
    pub mean: f64,
    /// Sample standard deviation (n - 1 denominator); 0 for a single value.
    pub std: f64,
    pub min: f64,
    pub max: f64,
    pub median: f64,
    pub quintiles: [f64; 4],
}
