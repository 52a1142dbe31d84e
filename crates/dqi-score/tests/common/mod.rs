//! Shared frame-building helpers for calculator tests.
#![allow(dead_code)]

use polars::prelude::{DataFrame, IntoColumn, NamedFrom, Series};

/// Build a frame from (name, values) pairs.
pub fn frame(columns: &[(&str, Vec<f64>)]) -> DataFrame {
    let columns = columns
        .iter()
        .map(|(name, values)| Series::new((*name).into(), values.clone()).into_column())
        .collect();
    DataFrame::new(columns).unwrap()
}

/// Build a frame with every listed column holding the same constant value.
pub fn constant_frame(names: &[&str], rows: usize, fill: f64) -> DataFrame {
    let columns: Vec<(&str, Vec<f64>)> =
        names.iter().map(|name| (*name, vec![fill; rows])).collect();
    frame(&columns)
}

/// Unwrap a score vector that should have no missing entries.
pub fn unwrap_scores(scores: &[Option<f64>]) -> Vec<f64> {
    scores
        .iter()
        .map(|score| score.expect("score should be present"))
        .collect()
}
