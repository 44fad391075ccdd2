use polars::prelude::PolarsError;
use thiserror::Error;

pub type RulResult<T> = Result<T, RulError>;

#[derive(Debug, Error)]
pub enum RulError {
    /// A column the annotation needs is not part of the table.
    #[error("missing column '{column}'")]
    MissingColumn { column: String },

    /// The cycle column holds values that can't be subtracted from each other.
    #[error("column '{column}' has type {dtype}, expected a numeric cycle counter")]
    IncomparableCycle { column: String, dtype: String },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("could not parse configuration: {0}")]
    Config(#[from] serde_json::Error),

    #[error(transparent)]
    Polars(#[from] PolarsError),
}

impl RulError {
    pub fn missing_column(column: &str) -> RulError {
        RulError::MissingColumn {
            column: column.to_string(),
        }
    }
}
