use serde::{Deserialize, Serialize};

use crate::{
    error::{RulError, RulResult},
    schema::{CYCLE_COL, RUL_COL, UNIT_COL},
};

/// Column names the annotator works on and the optional RUL cap.
///
/// Every field has a default, so a partial JSON document such as
/// `{"max_rul": 125}` is accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulConfig {
    pub unit_column: String,
    pub cycle_column: String,
    pub rul_column: String,
    /// RUL values above the cap are clipped to it (piecewise-linear target).
    pub max_rul: Option<u32>,
}

impl Default for RulConfig {
    fn default() -> Self {
        RulConfig {
            unit_column: UNIT_COL.into(),
            cycle_column: CYCLE_COL.into(),
            rul_column: RUL_COL.into(),
            max_rul: None,
        }
    }
}

impl RulConfig {
    pub fn from_json(s: &str) -> RulResult<RulConfig> {
        let config: RulConfig = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn with_max_rul(mut self, max_rul: u32) -> RulConfig {
        self.max_rul = Some(max_rul);
        self
    }

    pub fn validate(&self) -> RulResult<()> {
        for (field, name) in [
            ("unit_column", &self.unit_column),
            ("cycle_column", &self.cycle_column),
            ("rul_column", &self.rul_column),
        ] {
            if name.trim().is_empty() {
                return Err(RulError::InvalidConfig(format!("{field} is empty")));
            }
        }

        if self.unit_column == self.cycle_column {
            return Err(RulError::InvalidConfig(format!(
                "unit and cycle column are both '{}'",
                self.unit_column
            )));
        }

        if self.rul_column == self.unit_column || self.rul_column == self.cycle_column {
            return Err(RulError::InvalidConfig(format!(
                "rul_column '{}' would overwrite an input column",
                self.rul_column
            )));
        }
        Ok(())
    }
}
