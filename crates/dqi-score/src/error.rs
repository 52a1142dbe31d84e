use dqi_validate::ValidateError;

#[derive(Debug, thiserror::Error)]
pub enum ScoreError {
    #[error(transparent)]
    Validate(#[from] ValidateError),

    #[error(transparent)]
    Polars(#[from] polars::prelude::PolarsError),

    /// A gender-stratified component was evaluated without gender data.
    #[error("component '{column}' requires a gender column")]
    GenderRequired { column: String },
}
