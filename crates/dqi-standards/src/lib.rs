pub mod dii;
pub mod error;
pub mod paths;
pub mod units;

pub use crate::dii::{DiiParameter, load_default_dii_parameters, load_dii_parameters};
pub use crate::error::StandardsError;
pub use crate::paths::{STANDARDS_ENV_VAR, default_standards_root};
pub use crate::units::{DefaultUnits, load_default_units, load_defaults};
