//! Criterion - A weighted axis of comparison with a preference direction.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{numeric, CriterionId, CriterionType};

/// A weighted criterion options are compared on.
///
/// `weight` is a ratio input: it only means something relative to the weights
/// of the other enabled criteria. It is kept raw (possibly malformed) so the
/// validator can report on exactly what the user entered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Criterion {
    pub id: CriterionId,
    pub name: String,
    #[serde(
        serialize_with = "numeric::serialize_lenient",
        deserialize_with = "numeric::lenient"
    )]
    pub weight: f64,
    #[serde(rename = "type")]
    pub criterion_type: CriterionType,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_enabled() -> bool {
    true
}

impl Criterion {
    /// Creates a new, enabled criterion.
    pub fn new(
        id: impl Into<CriterionId>,
        name: impl Into<String>,
        weight: f64,
        criterion_type: CriterionType,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            weight,
            criterion_type,
            enabled: true,
        }
    }

    /// Creates an enabled benefit criterion (higher is better).
    pub fn benefit(id: impl Into<CriterionId>, name: impl Into<String>, weight: f64) -> Self {
        Self::new(id, name, weight, CriterionType::Benefit)
    }

    /// Creates an enabled cost criterion (lower is better).
    pub fn cost(id: impl Into<CriterionId>, name: impl Into<String>, weight: f64) -> Self {
        Self::new(id, name, weight, CriterionType::Cost)
    }

    /// Returns the same criterion, disabled.
    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    /// The weight as used in arithmetic: malformed weights count as 0.
    pub fn effective_weight(&self) -> f64 {
        numeric::coerce(self.weight)
    }
}
