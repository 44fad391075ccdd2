pub mod max_cycle;
pub mod rul;

pub use max_cycle::MaxCycleMap;
pub use rul::{RulDf, RulSummary};
