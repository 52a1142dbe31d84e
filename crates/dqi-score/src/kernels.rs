//! Scoring kernels shared across index calculators.
//!
//! Every kernel maps a column of values to a column of component scores.
//! Missing inputs stay missing unless a kernel documents otherwise; callers
//! decide how missing components enter the index total.

use dqi_model::Gender;

use crate::frame::Scores;

/// Linear score between a zero-score and a full-score cut-point.
///
/// `clamp((v - zero) / (full - zero), 0, 1) * points`. Adequacy components
/// pass `zero < full`, moderation components `zero > full`; either way a
/// value at or beyond `full` scores exactly `points` and at or beyond
/// `zero` scores exactly 0.
pub fn linear(values: &[Option<f64>], zero: f64, full: f64, points: f64) -> Scores {
    values
        .iter()
        .map(|value| value.map(|v| ((v - zero) / (full - zero)).clamp(0.0, 1.0) * points))
        .collect()
}

/// Linear score with a gender-specific full-score cut-point.
pub fn gender_linear(
    values: &[Option<f64>],
    genders: &[Gender],
    zero: f64,
    full_female: f64,
    full_male: f64,
    points: f64,
) -> Scores {
    values
        .iter()
        .zip(genders)
        .map(|(value, gender)| {
            let full = gender.pick(full_female, full_male);
            value.map(|v| ((v - zero) / (full - zero)).clamp(0.0, 1.0) * points)
        })
        .collect()
}

/// Threshold comparison applied per value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThresholdOp {
    /// Point awarded when `value >= cutoff`.
    AtLeast,
    /// Point awarded when `value < cutoff` (good-when-low components).
    Below,
}

/// Binary threshold score: `points` when the comparison holds, else 0.
/// Missing values never meet the threshold.
pub fn threshold(values: &[Option<f64>], cutoff: f64, op: ThresholdOp, points: f64) -> Scores {
    values
        .iter()
        .map(|value| {
            let met = match (value, op) {
                (Some(v), ThresholdOp::AtLeast) => *v >= cutoff,
                (Some(v), ThresholdOp::Below) => *v < cutoff,
                (None, _) => false,
            };
            Some(if met { points } else { 0.0 })
        })
        .collect()
}

/// Graded threshold: fraction of the cutoff attained, capped at `points`.
///
/// `AtLeast` components earn `min(v / cutoff, 1) * points`; `Below`
/// components earn full points at zero intake declining linearly to 0 at
/// the cutoff. Missing values earn 0.
pub fn graded_threshold(
    values: &[Option<f64>],
    cutoff: f64,
    op: ThresholdOp,
    points: f64,
) -> Scores {
    values
        .iter()
        .map(|value| {
            let fraction = match (value, op) {
                (Some(v), ThresholdOp::AtLeast) => (v / cutoff).clamp(0.0, 1.0),
                (Some(v), ThresholdOp::Below) => (1.0 - v / cutoff).clamp(0.0, 1.0),
                (None, _) => 0.0,
            };
            Some(fraction * points)
        })
        .collect()
}

/// Two-numerator ratio `(a + b) / c`; a zero or missing denominator yields
/// a missing value rather than an error.
pub fn ratio2(a: &[Option<f64>], b: &[Option<f64>], c: &[Option<f64>]) -> Scores {
    a.iter()
        .zip(b)
        .zip(c)
        .map(|((a, b), c)| match (a, b, c) {
            (Some(a), Some(b), Some(c)) if *c != 0.0 => Some((a + b) / c),
            _ => None,
        })
        .collect()
}

/// Percent of total energy contributed by a nutrient:
/// `v * kcal_per_gram / energy * 100`. Non-positive or missing energy
/// yields a missing value.
pub fn percent_of_energy(
    values: &[Option<f64>],
    energy: &[Option<f64>],
    kcal_per_gram: f64,
) -> Scores {
    values
        .iter()
        .zip(energy)
        .map(|(value, energy)| match (value, energy) {
            (Some(v), Some(e)) if *e > 0.0 => Some(v * kcal_per_gram / e * 100.0),
            _ => None,
        })
        .collect()
}

/// Density per 1000 kcal: `v / energy * 1000`. Non-positive or missing
/// energy yields a missing value.
pub fn density_per_1000(values: &[Option<f64>], energy: &[Option<f64>]) -> Scores {
    values
        .iter()
        .zip(energy)
        .map(|(value, energy)| match (value, energy) {
            (Some(v), Some(e)) if *e > 0.0 => Some(v / e * 1000.0),
            _ => None,
        })
        .collect()
}

/// Standard normal CDF, `Φ(z) = (1 + erf(z / √2)) / 2`, via `libm::erf`.
pub fn normal_cdf(z: f64) -> f64 {
    0.5 * (1.0 + libm::erf(z / std::f64::consts::SQRT_2))
}
