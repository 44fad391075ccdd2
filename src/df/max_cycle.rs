use derive_more::Deref;
use polars::prelude::*;

use crate::{
    config::RulConfig,
    error::RulResult,
    schema::{free_column_name, validate_readings, MAX_CYCLE_COL},
    series::ToVec,
};

/// Per-unit maximum of the cycle column, grouped in order of first appearance.
/// Rows with a null unit are not part of any group.
pub(crate) fn max_cycles_lazy(
    readings: LazyFrame,
    unit_column: &str,
    cycle_column: &str,
    max_column: &str,
) -> LazyFrame {
    readings
        .select([col(unit_column), col(cycle_column)])
        .filter(col(unit_column).is_not_null())
        .groupby_stable([col(unit_column)])
        .agg([col(cycle_column).max().alias(max_column)])
}

/// One row per unit: the unit id and the highest cycle observed for it.
#[derive(Debug, Clone, Deref)]
pub struct MaxCycleMap {
    #[deref]
    frame: DataFrame,
    max_column: String,
}

impl MaxCycleMap {
    pub fn from_readings(df: &DataFrame, config: &RulConfig) -> RulResult<MaxCycleMap> {
        validate_readings(df, config)?;

        // the map only carries the unit column next to the maximum
        let max_column = if config.unit_column == MAX_CYCLE_COL {
            free_column_name(&df.schema(), MAX_CYCLE_COL, &[])
        } else {
            MAX_CYCLE_COL.to_string()
        };

        let frame = max_cycles_lazy(
            df.clone().lazy(),
            &config.unit_column,
            &config.cycle_column,
            &max_column,
        )
        .collect()?;

        Ok(MaxCycleMap { frame, max_column })
    }

    pub fn unit_count(&self) -> usize {
        self.frame.height()
    }

    pub fn max_cycle(&self) -> &Series {
        &self.frame[self.max_column.as_str()]
    }

    /// Highest cycle of every unit, skipping units whose cycles are all null.
    pub fn lifetimes(&self) -> Vec<f64> {
        let v: Vec<Option<f64>> = self.frame.column(&self.max_column).to_vec();
        v.into_iter().flatten().collect()
    }

    pub fn into_inner(self) -> DataFrame {
        self.frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn readings() -> DataFrame {
        df!(
            "unit_number" => &[Some(3i64), Some(1), Some(3), None, Some(1), Some(3)],
            "time_cycle" => &[1i64, 1, 2, 9, 2, 3],
            "sensor_1" => &[518.67, 518.67, 518.67, 518.67, 518.67, 518.67],
        )
        .unwrap()
    }

    #[test]
    fn one_row_per_unit_in_first_seen_order() {
        let map = MaxCycleMap::from_readings(&readings(), &RulConfig::default()).unwrap();

        assert_eq!(map.unit_count(), 2);
        assert_eq!(map.get_column_names(), &["unit_number", "max_cycle"]);

        let units: Vec<Option<i64>> = map.column("unit_number").to_vec();
        assert_eq!(units, vec![Some(3), Some(1)]);
        assert_eq!(map.lifetimes(), vec![3.0, 2.0]);
    }

    #[test]
    fn unit_column_named_like_helper() {
        let config = RulConfig {
            unit_column: "max_cycle".into(),
            ..Default::default()
        };
        let df = df!("max_cycle" => &[7i64, 7], "time_cycle" => &[4i64, 5]).unwrap();

        let map = MaxCycleMap::from_readings(&df, &config).unwrap();
        assert_eq!(map.get_column_names(), &["max_cycle", "_max_cycle"]);
        assert_eq!(map.lifetimes(), vec![5.0]);
    }

    #[test]
    fn does_not_touch_input() {
        let df = readings();
        let before = df.clone();
        MaxCycleMap::from_readings(&df, &RulConfig::default()).unwrap();
        assert!(df.frame_equal_missing(&before));
    }
}
