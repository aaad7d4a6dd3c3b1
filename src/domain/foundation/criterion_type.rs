//! Preference direction of a criterion.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// Whether higher or lower raw values are preferred on a criterion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CriterionType {
    /// Higher raw value is better.
    #[default]
    Benefit,
    /// Lower raw value is better.
    Cost,
}

impl CriterionType {
    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            CriterionType::Benefit => "Benefit",
            CriterionType::Cost => "Cost",
        }
    }

    /// Returns true if higher raw values are preferred.
    pub fn prefers_higher(&self) -> bool {
        matches!(self, CriterionType::Benefit)
    }
}

impl fmt::Display for CriterionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let arrow = if self.prefers_higher() { "↑" } else { "↓" };
        write!(f, "{} {}", self.label(), arrow)
    }
}

impl FromStr for CriterionType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "benefit" => Ok(CriterionType::Benefit),
            "cost" => Ok(CriterionType::Cost),
            other => Err(ValidationError::invalid_format(
                "type",
                format!("expected 'benefit' or 'cost', got '{}'", other),
            )),
        }
    }
}
