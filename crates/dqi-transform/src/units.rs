//! Unit inference, conversion and canonical renaming.
//!
//! Column names may carry a trailing unit suffix (`sodium_mg`,
//! `energy_kj`). Normalization runs in three observable steps:
//!
//! 1. [`infer_units`] strips the suffix, renames columns to their base name
//!    and records the unit (falling back to the default-units table);
//! 2. [`convert_to_canonical`] rescales any column whose inferred unit
//!    differs from its canonical unit;
//! 3. [`rename_for_scoring`] re-appends the canonical suffix, producing the
//!    names the calculators expect.
//!
//! Running all three on already-canonical data is the identity on values
//! and restores the original column names.

use std::collections::BTreeMap;

use polars::prelude::{DataFrame, IntoColumn, NamedFrom, PolarsResult, Series};
use tracing::warn;

use dqi_ingest::any_to_f64;
use dqi_model::Unit;
use dqi_standards::DefaultUnits;

/// Units inferred per column base name; `None` when neither the column name
/// nor the defaults table declares one.
pub type InferredUnits = BTreeMap<String, Option<Unit>>;

fn split_unit_suffix(name: &str) -> Option<(&str, Unit)> {
    let lower = name.to_lowercase();
    for unit in Unit::SUFFIX_ORDER {
        let suffix = format!("_{}", unit.as_str());
        if lower.ends_with(&suffix) {
            return Some((&name[..name.len() - suffix.len()], unit));
        }
    }
    None
}

/// Strip unit suffixes from column names, recording each column's unit.
///
/// Columns are renamed to their base name in the returned frame. Columns
/// without a recognized suffix fall back to the default-units table.
pub fn infer_units(
    df: &DataFrame,
    defaults: &DefaultUnits,
) -> PolarsResult<(DataFrame, InferredUnits)> {
    let mut out = df.clone();
    let mut units = InferredUnits::new();
    for name in df.get_column_names_owned() {
        let name = name.to_string();
        match split_unit_suffix(&name) {
            Some((base, unit)) => {
                if out.column(base).is_ok() {
                    warn!(column = %name, base, "base column name already taken, not renamed");
                    units.insert(name.clone(), Some(unit));
                    continue;
                }
                out.rename(&name, base.into())?;
                units.insert(base.to_string(), Some(unit));
            }
            None => {
                units.insert(name.clone(), defaults.get(&name).copied());
            }
        }
    }
    Ok((out, units))
}

/// Rescale columns whose inferred unit differs from the canonical one.
///
/// Supported conversions are the fixed mass and energy pairs declared on
/// [`Unit`]; unsupported pairs are left unconverted with a warning. Values
/// are coerced permissively: non-numeric cells become missing.
pub fn convert_to_canonical(
    df: &DataFrame,
    units: &InferredUnits,
    defaults: &DefaultUnits,
) -> PolarsResult<DataFrame> {
    let mut out = df.clone();
    for (column, inferred) in units {
        let Some(unit) = inferred else { continue };
        let Some(expected) = defaults.get(column) else {
            continue;
        };
        if unit == expected {
            continue;
        }
        let Some(factor) = unit.factor_to(*expected) else {
            warn!(
                column,
                from = %unit,
                to = %expected,
                "unsupported unit conversion, column left unconverted"
            );
            continue;
        };
        let Ok(current) = out.column(column.as_str()) else {
            continue;
        };
        let mut values: Vec<Option<f64>> = Vec::with_capacity(out.height());
        for idx in 0..out.height() {
            values.push(any_to_f64(current.get(idx)?).map(|value| value * factor));
        }
        out.with_column(Series::new(column.as_str().into(), values).into_column())?;
    }
    Ok(out)
}

/// Re-append the canonical unit suffix to every column the defaults table
/// knows about, producing the names the calculators expect.
pub fn rename_for_scoring(df: &DataFrame, defaults: &DefaultUnits) -> PolarsResult<DataFrame> {
    let mut out = df.clone();
    for name in df.get_column_names_owned() {
        let name = name.to_string();
        if let Some(unit) = defaults.get(&name) {
            let suffixed = format!("{name}_{unit}");
            out.rename(&name, suffixed.into())?;
        }
    }
    Ok(out)
}

/// Full normalization pipeline: infer, convert, rename for scoring.
pub fn normalize_units(df: &DataFrame, defaults: &DefaultUnits) -> PolarsResult<DataFrame> {
    let (stripped, units) = infer_units(df, defaults)?;
    let converted = convert_to_canonical(&stripped, &units, defaults)?;
    rename_for_scoring(&converted, defaults)
}
