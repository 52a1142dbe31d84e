pub mod error;
pub mod validator;

pub use crate::error::ValidateError;
pub use crate::validator::{
    CoercionMode, ValidateOptions, coerce_numeric, require_columns, validate_frame,
};
