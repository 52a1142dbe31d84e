//! Required-column checks and numeric coercion.
//!
//! Every calculator validates its input through [`validate_frame`] before
//! scoring: all required columns must be present (compared after trimming
//! and case-folding), and every non-identifier column is coerced to f64.
//! Validation never mutates the caller's frame; the coerced copy is
//! returned.

use polars::prelude::{DataFrame, DataType, IntoColumn, NamedFrom, Series};

use dqi_ingest::{any_to_f64, any_to_string};

use crate::error::ValidateError;

/// How unparsable cells are handled during coercion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CoercionMode {
    /// Unparsable non-empty values become missing.
    Permissive,
    /// Any unparsable non-empty value fails validation.
    #[default]
    Strict,
}

/// Validation options shared by all calculators.
#[derive(Debug, Clone)]
pub struct ValidateOptions {
    pub mode: CoercionMode,
    /// Identifier column exempt from numeric coercion.
    pub id_column: String,
}

impl Default for ValidateOptions {
    fn default() -> Self {
        Self {
            mode: CoercionMode::default(),
            id_column: "id".to_string(),
        }
    }
}

impl ValidateOptions {
    pub fn permissive() -> Self {
        Self {
            mode: CoercionMode::Permissive,
            ..Self::default()
        }
    }
}

fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Check that every required column is present.
///
/// Comparison trims surrounding whitespace and ignores case, matching the
/// tolerance applied to headers of uploaded files. On failure the error
/// lists every missing column in the order requested.
pub fn require_columns(df: &DataFrame, required: &[&str]) -> Result<(), ValidateError> {
    let present: Vec<String> = df
        .get_column_names_owned()
        .iter()
        .map(|name| normalize(name))
        .collect();
    let missing: Vec<String> = required
        .iter()
        .filter(|name| !present.contains(&normalize(name)))
        .map(|name| (*name).to_string())
        .collect();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(ValidateError::MissingColumns(missing))
    }
}

/// Coerce every non-identifier column to f64, returning a new frame.
///
/// Column names are trimmed of surrounding whitespace. Columns that are
/// already numeric are kept as-is; string columns are parsed cell by cell.
/// Blank cells are missing in both modes.
pub fn coerce_numeric(
    df: &DataFrame,
    options: &ValidateOptions,
) -> Result<DataFrame, ValidateError> {
    let id_column = normalize(&options.id_column);
    let mut columns = Vec::with_capacity(df.width());
    for column in df.get_columns() {
        let trimmed = column.name().trim().to_string();
        if normalize(&trimmed) == id_column {
            let mut kept = column.clone();
            kept.rename(trimmed.into());
            columns.push(kept);
            continue;
        }
        if is_numeric_dtype(column.dtype()) {
            let mut kept = column.clone();
            kept.rename(trimmed.into());
            columns.push(kept);
            continue;
        }
        let mut values: Vec<Option<f64>> = Vec::with_capacity(df.height());
        for idx in 0..df.height() {
            let value = column.get(idx)?;
            match any_to_f64(value.clone()) {
                Some(parsed) => values.push(Some(parsed)),
                None => {
                    let raw = any_to_string(value);
                    if options.mode == CoercionMode::Strict && !raw.trim().is_empty() {
                        return Err(ValidateError::NonNumericColumn { column: trimmed });
                    }
                    values.push(None);
                }
            }
        }
        columns.push(Series::new(trimmed.into(), values).into_column());
    }
    Ok(DataFrame::new(columns)?)
}

/// Require columns and coerce numerics in one step.
pub fn validate_frame(
    df: &DataFrame,
    required: &[&str],
    options: &ValidateOptions,
) -> Result<DataFrame, ValidateError> {
    require_columns(df, required)?;
    coerce_numeric(df, options)
}

/// True when the column's physical type is numeric.
pub fn is_numeric_dtype(dtype: &DataType) -> bool {
    matches!(
        dtype,
        DataType::Int8
            | DataType::Int16
            | DataType::Int32
            | DataType::Int64
            | DataType::UInt8
            | DataType::UInt16
            | DataType::UInt32
            | DataType::UInt64
            | DataType::Float32
            | DataType::Float64
    )
}
