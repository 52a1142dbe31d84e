//! DataFrame access helpers shared by all calculators.
//!
//! Calculators operate on plain `Vec<Option<f64>>` columns extracted once
//! from the validated frame; `None` is a missing value throughout.

use polars::prelude::{DataFrame, IntoColumn, NamedFrom, Series};

use dqi_ingest::any_to_f64;
use dqi_model::Gender;

use crate::error::ScoreError;

/// One score or component column: row-aligned, `None` = missing.
pub type Scores = Vec<Option<f64>>;

fn resolve_name(df: &DataFrame, name: &str) -> Option<String> {
    let wanted = name.trim().to_lowercase();
    df.get_column_names_owned()
        .iter()
        .find(|candidate| candidate.trim().to_lowercase() == wanted)
        .map(|candidate| candidate.to_string())
}

/// Extract a column as numeric values, matching the name case-insensitively.
pub fn numeric_column(df: &DataFrame, name: &str) -> Result<Scores, ScoreError> {
    let resolved = resolve_name(df, name);
    let column = df.column(resolved.as_deref().unwrap_or(name))?;
    let mut values = Vec::with_capacity(df.height());
    for idx in 0..df.height() {
        values.push(any_to_f64(column.get(idx)?));
    }
    Ok(values)
}

/// Extract and decode the `gender` column (2 = female, else male).
pub fn gender_column(df: &DataFrame) -> Result<Vec<Gender>, ScoreError> {
    let codes = numeric_column(df, "gender")?;
    Ok(codes.into_iter().map(Gender::from_code).collect())
}

/// Sum component columns row-wise, skipping missing components.
///
/// A row with every component missing sums to 0, mirroring the reference
/// implementation's skip-missing summation.
pub fn sum_components(parts: &[Scores], rows: usize) -> Scores {
    let mut totals = vec![0.0; rows];
    for part in parts {
        for (total, value) in totals.iter_mut().zip(part) {
            if let Some(value) = value {
                *total += value;
            }
        }
    }
    totals.into_iter().map(Some).collect()
}

/// Sum component columns row-wise; any missing component makes the row's
/// total missing. Used by indices whose reference semantics propagate
/// missingness (ACS2020).
pub fn sum_components_strict(parts: &[Scores], rows: usize) -> Scores {
    let mut totals: Scores = vec![Some(0.0); rows];
    for part in parts {
        for (total, value) in totals.iter_mut().zip(part) {
            *total = match (*total, value) {
                (Some(acc), Some(value)) => Some(acc + value),
                _ => None,
            };
        }
    }
    totals
}

/// Convert a score vector into a named Polars series for output.
pub fn scores_to_series(name: &str, scores: &Scores) -> Series {
    Series::new(name.into(), scores.clone())
}

/// Append a score column to a frame, row-aligned with the input.
pub fn attach_scores(
    df: &mut DataFrame,
    name: &str,
    scores: &Scores,
) -> Result<(), ScoreError> {
    df.with_column(scores_to_series(name, scores).into_column())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{sum_components, sum_components_strict};

    #[test]
    fn skipping_sum_treats_missing_as_zero() {
        let parts = vec![vec![Some(1.0), None], vec![Some(2.0), Some(3.0)]];
        assert_eq!(sum_components(&parts, 2), vec![Some(3.0), Some(3.0)]);
    }

    #[test]
    fn strict_sum_propagates_missing() {
        let parts = vec![vec![Some(1.0), None], vec![Some(2.0), Some(3.0)]];
        assert_eq!(sum_components_strict(&parts, 2), vec![Some(3.0), None]);
    }
}
