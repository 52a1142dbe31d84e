//! Summary statistics over a computed score column.

use dqi_model::ScoreSummary;

use crate::frame::Scores;
use crate::quantile::interpolated_quantile;

/// Compute mean, sample std, min, max, median and quintile boundaries.
///
/// Missing and non-finite scores are excluded. Returns `None` when nothing
/// remains to summarize.
pub fn summarize(scores: &Scores) -> Option<ScoreSummary> {
    let mut values: Vec<f64> = scores
        .iter()
        .flatten()
        .copied()
        .filter(|value| value.is_finite())
        .collect();
    if values.is_empty() {
        return None;
    }
    values.sort_by(f64::total_cmp);

    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let std = if values.len() > 1 {
        let variance = values
            .iter()
            .map(|value| (value - mean).powi(2))
            .sum::<f64>()
            / (n - 1.0);
        variance.sqrt()
    } else {
        0.0
    };

    Some(ScoreSummary {
        mean,
        std,
        min: values[0],
        max: values[values.len() - 1],
        median: interpolated_quantile(&values, 0.5),
        quintiles: [
            interpolated_quantile(&values, 0.2),
            interpolated_quantile(&values, 0.4),
            interpolated_quantile(&values, 0.6),
            interpolated_quantile(&values, 0.8),
        ],
    })
}
