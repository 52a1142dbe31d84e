//! Dietary Inflammatory Index parameter table.
//!
//! The DII is computed against a published table of global intake means,
//! standard deviations and signed inflammatory effect weights, one record
//! per food parameter. The table lives in `standards/dii_parameters.json`
//! and is loaded once; it is read-only configuration for the lifetime of
//! the process.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::StandardsError;
use crate::paths::default_standards_root;

/// Filename of the DII coefficient table under the standards root.
pub const DII_PARAMETERS_FILE: &str = "dii_parameters.json";

/// One DII food parameter: global mean, standard deviation and the signed
/// inflammatory effect weight (negative = anti-inflammatory).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiiParameter {
    pub name: String,
    pub mean: f64,
    pub sd: f64,
    pub effect: f64,
}

/// Load the DII parameter table from an explicit path.
pub fn load_dii_parameters(path: &Path) -> Result<Vec<DiiParameter>, StandardsError> {
    if !path.exists() {
        return Err(StandardsError::MissingParameterFile {
            path: path.to_path_buf(),
        });
    }
    let raw = std::fs::read_to_string(path).map_err(|source| StandardsError::io(path, source))?;
    let parameters: Vec<DiiParameter> =
        serde_json::from_str(&raw).map_err(|source| StandardsError::Json {
            path: path.to_path_buf(),
            source,
        })?;
    for parameter in &parameters {
        if parameter.name.trim().is_empty() {
            return Err(StandardsError::InvalidParameter {
                name: "<unnamed>".to_string(),
                message: "empty parameter name".to_string(),
            });
        }
        if !(parameter.sd > 0.0) {
            return Err(StandardsError::InvalidParameter {
                name: parameter.name.clone(),
                message: format!("standard deviation must be positive, got {}", parameter.sd),
            });
        }
    }
    Ok(parameters)
}

/// Load the DII parameter table from the default standards root.
pub fn load_default_dii_parameters() -> Result<Vec<DiiParameter>, StandardsError> {
    load_dii_parameters(&default_standards_root().join(DII_PARAMETERS_FILE))
}
