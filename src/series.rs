use polars::prelude::*;

pub trait ToVec<T> {
    fn to_vec(&self) -> Vec<T>;
}

// missing columns and failed casts read as empty
impl ToVec<Option<f64>> for PolarsResult<&Series> {
    fn to_vec(&self) -> Vec<Option<f64>> {
        match self {
            Ok(series) => match series.cast(&DataType::Float64) {
                Ok(s) => s
                    .f64()
                    .map(|ca| ca.into_iter().collect())
                    .unwrap_or_default(),
                Err(_) => vec![],
            },
            Err(_) => vec![],
        }
    }
}

impl ToVec<Option<i64>> for PolarsResult<&Series> {
    fn to_vec(&self) -> Vec<Option<i64>> {
        match self {
            Ok(series) => match series.cast(&DataType::Int64) {
                Ok(s) => s
                    .i64()
                    .map(|ca| ca.into_iter().collect())
                    .unwrap_or_default(),
                Err(_) => vec![],
            },
            Err(_) => vec![],
        }
    }
}
