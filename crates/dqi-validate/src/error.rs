//! Error types for dataset validation.

#[derive(Debug, thiserror::Error)]
pub enum ValidateError {
    /// One or more required columns are absent. Carries every missing name,
    /// not just the first.
    #[error("missing required columns: {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    /// A column contained values that could not be coerced to numbers
    /// (strict mode only).
    #[error("column '{column}' must be numeric")]
    NonNumericColumn { column: String },

    #[error(transparent)]
    Polars(#[from] polars::prelude::PolarsError),
}
