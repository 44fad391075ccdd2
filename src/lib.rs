//! Remaining useful life labels for run-to-failure sensor tables.
//!
//! ```no_run
//! use polars::prelude::*;
//! use rul_rs_data::add_remaining_useful_life;
//!
//! # fn example() -> rul_rs_data::error::RulResult<()> {
//! let readings = df!(
//!     "unit_number" => &[1i64, 1, 1, 2],
//!     "time_cycle" => &[1i64, 2, 3, 1],
//! )?;
//! // RUL: [2, 1, 0, 0]
//! let labelled = add_remaining_useful_life(&readings)?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod df;
pub mod error;
pub mod rul;
pub mod schema;
pub mod series;
pub mod utils;

pub use config::RulConfig;
pub use df::{MaxCycleMap, RulDf, RulSummary};
pub use error::{RulError, RulResult};
pub use rul::{add_remaining_useful_life, RulAnnotator, WithRemainingUsefulLife};
