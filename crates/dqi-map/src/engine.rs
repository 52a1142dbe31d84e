//! Rename source columns to canonical scoring names.

use std::collections::BTreeSet;

use polars::prelude::{DataFrame, PolarsResult};
use tracing::info;

/// Rename the columns of `df` according to `mapping`.
///
/// Only columns present in both the frame and the mapping are renamed.
/// Source entries absent from the frame and frame columns left unmapped are
/// logged at info level, never treated as errors. When two source columns
/// map to the same target, the first one present wins and the rest are left
/// untouched.
pub fn apply_mapping(df: &DataFrame, mapping: &[(&str, &str)]) -> PolarsResult<DataFrame> {
    let columns: BTreeSet<String> = df
        .get_column_names_owned()
        .iter()
        .map(|name| name.to_string())
        .collect();

    let mut out = df.clone();
    let mut taken: BTreeSet<String> = columns.clone();
    let mut missing_sources: Vec<&str> = Vec::new();
    for (source, target) in mapping.iter().copied() {
        if !columns.contains(source) {
            missing_sources.push(source);
            continue;
        }
        if taken.contains(target) {
            info!(source, target, "target column already present, not renamed");
            continue;
        }
        out.rename(source, target.into())?;
        taken.remove(source);
        taken.insert(target.to_string());
    }

    if !missing_sources.is_empty() {
        missing_sources.sort_unstable();
        info!(?missing_sources, "unmapped source columns skipped");
    }
    let mapped_sources: BTreeSet<&str> = mapping.iter().map(|(source, _)| *source).collect();
    let mut unmapped: Vec<&String> = columns
        .iter()
        .filter(|column| !mapped_sources.contains(column.as_str()))
        .collect();
    if !unmapped.is_empty() {
        unmapped.sort();
        info!(?unmapped, "columns left unmapped");
    }

    Ok(out)
}

/// Normalize the column-case variations seen in DII validation datasets.
pub fn normalize_dii_headers(df: &DataFrame) -> PolarsResult<DataFrame> {
    apply_mapping(df, crate::tables::DII_CASE_MAP)
}
