use derive_more::Deref;
use polars::prelude::*;
use serde::{Deserialize, Serialize};

use crate::{
    config::RulConfig,
    error::{RulError, RulResult},
    series::ToVec,
    utils::stats_utils::{Extrema, Mean},
};

use super::max_cycle::MaxCycleMap;

/// A reading table carrying a remaining useful life column.
#[derive(Debug, Clone, Deref)]
pub struct RulDf {
    #[deref]
    frame: DataFrame,
    config: RulConfig,
}

impl RulDf {
    pub(crate) fn new(frame: DataFrame, config: RulConfig) -> RulDf {
        RulDf { frame, config }
    }

    pub fn rul(&self) -> &Series {
        &self.frame[self.config.rul_column.as_str()]
    }

    pub fn rul_values(&self) -> Vec<Option<f64>> {
        self.frame.column(&self.config.rul_column).to_vec()
    }

    pub fn into_inner(self) -> DataFrame {
        self.frame
    }

    pub fn summary(&self) -> RulResult<RulSummary> {
        let lifetimes = MaxCycleMap::from_readings(&self.frame, &self.config)?.lifetimes();
        let extrema = lifetimes.extrema();

        Ok(RulSummary {
            rows: self.frame.height(),
            units: lifetimes.len(),
            min_lifetime: extrema.map(|x| x.0),
            max_lifetime: extrema.map(|x| x.1),
            mean_lifetime: lifetimes.mean(),
        })
    }
}

impl TryFrom<DataFrame> for RulDf {
    type Error = RulError;

    fn try_from(value: DataFrame) -> Result<Self, Self::Error> {
        let config = RulConfig::default();
        if value.schema().contains(&config.rul_column) {
            Ok(RulDf::new(value, config))
        } else {
            Err(RulError::missing_column(&config.rul_column))
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RulSummary {
    pub rows: usize,
    /// units with at least one non-null cycle
    pub units: usize,
    pub min_lifetime: Option<f64>,
    pub max_lifetime: Option<f64>,
    pub mean_lifetime: Option<f64>,
}
