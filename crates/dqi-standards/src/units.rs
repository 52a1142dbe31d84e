//! Canonical-unit defaults for nutrient base names.
//!
//! Maps each nutrient base name (column name without unit suffix) to the
//! unit its scoring column is expected in, e.g. `sodium -> mg`. Consulted by
//! the unit normalizer both for columns whose names carry no suffix and as
//! the conversion target.

use std::collections::BTreeMap;
use std::path::Path;

use dqi_model::Unit;

use crate::error::StandardsError;
use crate::paths::default_standards_root;

/// Filename of the default-units table under the standards root.
pub const DEFAULT_UNITS_FILE: &str = "default_units.json";

/// Canonical unit per nutrient base name.
pub type DefaultUnits = BTreeMap<String, Unit>;

/// Load the default-units table from an explicit path.
pub fn load_default_units(path: &Path) -> Result<DefaultUnits, StandardsError> {
    if !path.exists() {
        return Err(StandardsError::MissingParameterFile {
            path: path.to_path_buf(),
        });
    }
    let raw = std::fs::read_to_string(path).map_err(|source| StandardsError::io(path, source))?;
    serde_json::from_str(&raw).map_err(|source| StandardsError::Json {
        path: path.to_path_buf(),
        source,
    })
}

/// Load the default-units table from the default standards root.
pub fn load_defaults() -> Result<DefaultUnits, StandardsError> {
    load_default_units(&default_standards_root().join(DEFAULT_UNITS_FILE))
}
