//! Analysis configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::matrix::{Validator, DOMINANCE_THRESHOLD};

/// Tunables for the validator
#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisConfig {
    /// Weight share above which one criterion is reported as dominant
    #[serde(default = "default_dominance_threshold")]
    pub dominance_threshold: f64,
}

impl AnalysisConfig {
    /// Build a validator using these settings
    pub fn validator(&self) -> Validator {
        Validator::with_dominance_threshold(self.dominance_threshold)
    }

    /// Validate analysis configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        let t = self.dominance_threshold;
        if !t.is_finite() || t <= 0.0 || t > 1.0 {
            return Err(ValidationError::InvalidDominanceThreshold(t));
        }
        Ok(())
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            dominance_threshold: default_dominance_threshold(),
        }
    }
}

fn default_dominance_threshold() -> f64 {
    DOMINANCE_THRESHOLD
}
