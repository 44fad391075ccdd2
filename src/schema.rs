use polars::prelude::{DataFrame, DataType, Schema};

use crate::{
    config::RulConfig,
    error::{RulError, RulResult},
};

pub const UNIT_COL: &str = "unit_number";
pub const CYCLE_COL: &str = "time_cycle";
pub const RUL_COL: &str = "RUL";

// helper columns, never part of a returned frame
pub const MAX_CYCLE_COL: &str = "max_cycle";
pub const ROW_IDX_COL: &str = "row_idx";

pub fn require_column<'a>(schema: &'a Schema, name: &str) -> RulResult<&'a DataType> {
    schema
        .get(name)
        .ok_or_else(|| RulError::missing_column(name))
}

pub fn check_cycle_dtype(column: &str, dtype: &DataType) -> RulResult<()> {
    if dtype.is_numeric() {
        Ok(())
    } else {
        Err(RulError::IncomparableCycle {
            column: column.to_string(),
            dtype: dtype.to_string(),
        })
    }
}

/// Checks a reading table against the columns named in `config` and returns
/// the dtype of its cycle column.
pub fn validate_readings(df: &DataFrame, config: &RulConfig) -> RulResult<DataType> {
    let schema = df.schema();
    require_column(&schema, &config.unit_column)?;
    let cycle_dtype = require_column(&schema, &config.cycle_column)?;
    check_cycle_dtype(&config.cycle_column, cycle_dtype)?;
    Ok(cycle_dtype.clone())
}

/// `base`, prefixed with underscores until it no longer clashes with a column
/// of `schema` or with `taken`.
pub fn free_column_name(schema: &Schema, base: &str, taken: &[&str]) -> String {
    let mut name = base.to_string();
    while schema.contains(&name) || taken.contains(&name.as_str()) {
        name.insert(0, '_');
    }
    name
}

#[cfg(test)]
mod tests {
    use polars::prelude::*;

    use super::*;

    #[test]
    fn reports_first_missing_column() {
        let df = df!("time_cycle" => &[1i64, 2]).unwrap();
        match validate_readings(&df, &RulConfig::default()) {
            Err(RulError::MissingColumn { column }) => assert_eq!(column, "unit_number"),
            other => panic!("unexpected {:?}", other),
        }

        let df = df!("unit_number" => &[1i64, 2]).unwrap();
        match validate_readings(&df, &RulConfig::default()) {
            Err(RulError::MissingColumn { column }) => assert_eq!(column, "time_cycle"),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn string_cycles_are_rejected() {
        let df = df!("unit_number" => &[1i64], "time_cycle" => &["1"]).unwrap();
        assert!(matches!(
            validate_readings(&df, &RulConfig::default()),
            Err(RulError::IncomparableCycle { .. })
        ));
    }

    #[test]
    fn numeric_cycles_pass() {
        let df = df!("unit_number" => &["a"], "time_cycle" => &[1.5f64]).unwrap();
        assert_eq!(
            validate_readings(&df, &RulConfig::default()).unwrap(),
            DataType::Float64
        );
    }

    #[test]
    fn free_name_skips_existing_columns() {
        let df = df!("max_cycle" => &[1i64], "_max_cycle" => &[2i64]).unwrap();
        assert_eq!(
            free_column_name(&df.schema(), MAX_CYCLE_COL, &[]),
            "__max_cycle"
        );
        assert_eq!(
            free_column_name(&df.schema(), ROW_IDX_COL, &["row_idx"]),
            "_row_idx"
        );
    }
}
