use polars::prelude::*;
use rayon::prelude::*;
use tracing::{debug, warn};

use crate::{
    config::RulConfig,
    df::{max_cycle::max_cycles_lazy, MaxCycleMap, RulDf},
    error::RulResult,
    schema::{free_column_name, validate_readings, MAX_CYCLE_COL, ROW_IDX_COL},
};

/// Appends a `RUL` column (remaining useful life) to a table of readings.
///
/// For every row `RUL = max(time_cycle of its unit_number) - time_cycle`. The
/// input is left untouched, rows keep their order and `RUL` becomes the last
/// column. Rows without a unit get a null `RUL`.
pub fn add_remaining_useful_life(df: &DataFrame) -> RulResult<DataFrame> {
    Ok(RulAnnotator::default().annotate(df)?.into_inner())
}

pub trait WithRemainingUsefulLife {
    fn with_remaining_useful_life(&self) -> RulResult<DataFrame>;
}

impl WithRemainingUsefulLife for DataFrame {
    fn with_remaining_useful_life(&self) -> RulResult<DataFrame> {
        add_remaining_useful_life(self)
    }
}

#[derive(Debug, Clone, Default)]
pub struct RulAnnotator {
    config: RulConfig,
}

impl RulAnnotator {
    pub fn new(config: RulConfig) -> RulResult<RulAnnotator> {
        config.validate()?;
        Ok(RulAnnotator { config })
    }

    pub fn config(&self) -> &RulConfig {
        &self.config
    }

    pub fn validate(&self, df: &DataFrame) -> RulResult<()> {
        validate_readings(df, &self.config).map(|_| ())
    }

    pub fn max_cycle_map(&self, df: &DataFrame) -> RulResult<MaxCycleMap> {
        MaxCycleMap::from_readings(df, &self.config)
    }

    pub fn annotate(&self, df: &DataFrame) -> RulResult<RulDf> {
        let cycle_dtype = validate_readings(df, &self.config)?;

        let unit = self.config.unit_column.as_str();
        let cycle = self.config.cycle_column.as_str();
        let rul = self.config.rul_column.as_str();

        let schema = df.schema();
        let max_col = free_column_name(&schema, MAX_CYCLE_COL, &[rul]);
        let row_idx = free_column_name(&schema, ROW_IDX_COL, &[rul, max_col.as_str()]);

        if schema.contains(rul) {
            warn!(column = rul, "recomputing existing remaining useful life column");
        }
        let null_units = df.column(unit)?.null_count();
        if null_units > 0 {
            warn!(rows = null_units, column = unit, "rows without unit get no RUL");
        }

        let readings = df.clone().lazy();
        let max_cycles = max_cycles_lazy(readings.clone(), unit, cycle, &max_col);

        let remaining = col(&max_col) - col(cycle);
        let remaining = match self.config.max_rul {
            Some(cap) => when(remaining.clone().gt(lit(cap)))
                .then(lit(cap))
                .otherwise(remaining),
            None => remaining,
        };

        // the row index pins the input order across the join
        let frame = readings
            .with_row_count(&row_idx, None)
            .left_join(max_cycles, col(unit), col(unit))
            .sort(&row_idx, SortOptions::default())
            .with_column(remaining.cast(cycle_dtype).alias(rul))
            .drop_columns([max_col.as_str(), row_idx.as_str()])
            .collect()?;

        debug!(
            rows = frame.height(),
            columns = frame.width(),
            helper = max_col.as_str(),
            "annotated remaining useful life"
        );

        Ok(RulDf::new(frame, self.config.clone()))
    }

    /// Annotates independent tables in parallel. Results keep the order of
    /// `dfs`; a failing table doesn't affect the others.
    pub fn annotate_all(&self, dfs: &[DataFrame]) -> Vec<RulResult<RulDf>> {
        dfs.par_iter().map(|df| self.annotate(df)).collect()
    }
}
