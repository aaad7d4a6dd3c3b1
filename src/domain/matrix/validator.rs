//! Validator - Advisory findings about a raw criteria configuration.
//!
//! Findings are data, never errors: scoring proceeds regardless, and the
//! caller decides which findings to surface and how often.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

use super::{option_checks::name_key, Criterion, WeightNormalizer};
use crate::domain::foundation::{numeric, CriterionId};

/// Share of total weight above which one criterion is considered dominant.
pub const DOMINANCE_THRESHOLD: f64 = 0.75;

/// How serious a finding is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Severity {
    Error,
    Warning,
}

/// The kinds of finding the validator can raise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FindingKind {
    NoEnabledCriteria,
    ZeroTotalWeight,
    NegativeWeight,
    InvalidWeight,
    DuplicateNames,
    Dominance,
}

impl FindingKind {
    pub fn severity(&self) -> Severity {
        match self {
            FindingKind::NoEnabledCriteria
            | FindingKind::ZeroTotalWeight
            | FindingKind::NegativeWeight
            | FindingKind::InvalidWeight => Severity::Error,
            FindingKind::DuplicateNames | FindingKind::Dominance => Severity::Warning,
        }
    }
}

impl fmt::Display for FindingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FindingKind::NoEnabledCriteria => "no_enabled_criteria",
            FindingKind::ZeroTotalWeight => "zero_total_weight",
            FindingKind::NegativeWeight => "negative_weight",
            FindingKind::InvalidWeight => "invalid_weight",
            FindingKind::DuplicateNames => "duplicate_names",
            FindingKind::Dominance => "dominance",
        };
        write!(f, "{}", s)
    }
}

/// A finding ready to show to a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Finding {
    pub kind: FindingKind,
    pub severity: Severity,
    pub message: String,
}

impl Finding {
    fn new(kind: FindingKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            severity: kind.severity(),
            message: message.into(),
        }
    }
}

/// The weight share of the dominant criterion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DominantCriterion {
    pub criterion_id: CriterionId,
    pub name: String,
    pub share: f64,
}

/// Named boolean findings for one criteria configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub no_enabled_criteria: bool,
    pub zero_total_weight: bool,
    pub negative_weight: bool,
    pub invalid_weight: bool,
    pub duplicate_names: bool,
    pub dominance: bool,
    /// Scoring inputs are sound; warnings may still be present.
    pub valid: bool,
    /// Display names that appear more than once, first spelling kept.
    pub duplicated: Vec<String>,
    pub dominant: Option<DominantCriterion>,
}

impl ValidationReport {
    /// Kinds of every raised finding, errors first.
    pub fn active_kinds(&self) -> Vec<FindingKind> {
        [
            (self.no_enabled_criteria, FindingKind::NoEnabledCriteria),
            (self.zero_total_weight, FindingKind::ZeroTotalWeight),
            (self.negative_weight, FindingKind::NegativeWeight),
            (self.invalid_weight, FindingKind::InvalidWeight),
            (self.duplicate_names, FindingKind::DuplicateNames),
            (self.dominance, FindingKind::Dominance),
        ]
        .into_iter()
        .filter_map(|(raised, kind)| raised.then_some(kind))
        .collect()
    }

    /// Returns true if the given finding was raised.
    pub fn has(&self, kind: FindingKind) -> bool {
        self.active_kinds().contains(&kind)
    }

    pub fn has_errors(&self) -> bool {
        self.active_kinds()
            .iter()
            .any(|k| k.severity() == Severity::Error)
    }

    /// Raised findings with user-facing messages.
    pub fn findings(&self) -> Vec<Finding> {
        self.active_kinds()
            .into_iter()
            .map(|kind| Finding::new(kind, self.message_for(kind)))
            .collect()
    }

    fn message_for(&self, kind: FindingKind) -> String {
        match kind {
            FindingKind::NoEnabledCriteria => {
                "Enable at least one criterion to score options.".to_string()
            }
            FindingKind::ZeroTotalWeight => {
                "All enabled criteria have zero weight, so every option scores 0.".to_string()
            }
            FindingKind::NegativeWeight => "Criterion weights cannot be negative.".to_string(),
            FindingKind::InvalidWeight => "Every criterion weight must be a number.".to_string(),
            FindingKind::DuplicateNames => format!(
                "Criterion names should be unique: {}.",
                self.duplicated.join(", ")
            ),
            FindingKind::Dominance => match &self.dominant {
                Some(d) => format!(
                    "{} carries {:.0}% of the total weight and controls the decision.",
                    d.name,
                    d.share * 100.0
                ),
                None => "One criterion controls more than 75% of the decision.".to_string(),
            },
        }
    }
}

/// Classifies a raw criteria list into advisory findings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Validator {
    dominance_threshold: f64,
}

impl Default for Validator {
    fn default() -> Self {
        Self {
            dominance_threshold: DOMINANCE_THRESHOLD,
        }
    }
}

impl Validator {
    /// Creates a validator using the standard dominance threshold.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a validator with a custom dominance threshold.
    pub fn with_dominance_threshold(dominance_threshold: f64) -> Self {
        Self {
            dominance_threshold,
        }
    }

    pub fn dominance_threshold(&self) -> f64 {
        self.dominance_threshold
    }

    /// Evaluates every finding independently.
    pub fn validate(&self, criteria: &[Criterion]) -> ValidationReport {
        let no_enabled_criteria = has_no_enabled_criteria(criteria);
        let zero_total_weight = has_zero_total_weight(criteria);
        let negative_weight = has_negative_weight(criteria);
        let invalid_weight = has_invalid_weight(criteria);
        let duplicated = duplicate_names(criteria);
        let dominant = self.dominant_criterion(criteria);

        ValidationReport {
            no_enabled_criteria,
            zero_total_weight,
            negative_weight,
            invalid_weight,
            duplicate_names: !duplicated.is_empty(),
            dominance: dominant.is_some(),
            valid: !no_enabled_criteria
                && WeightNormalizer::enabled_total(criteria) > 0.0
                && !negative_weight
                && !invalid_weight,
            duplicated,
            dominant,
        }
    }

    /// Returns the criterion whose weight share exceeds the threshold.
    ///
    /// Only computed when the enabled total is positive. Ties on the largest
    /// weight resolve to the first one listed.
    pub fn dominant_criterion(&self, criteria: &[Criterion]) -> Option<DominantCriterion> {
        let total = WeightNormalizer::enabled_total(criteria);
        if total <= 0.0 {
            return None;
        }

        let normalized = WeightNormalizer::normalize(criteria);
        let heaviest = normalized
            .iter()
            .fold(None::<&Criterion>, |best, c| match best {
                Some(b) if b.weight >= c.weight => Some(b),
                _ => Some(c),
            })?;

        let share = heaviest.weight;
        (share > self.dominance_threshold).then(|| DominantCriterion {
            criterion_id: heaviest.id.clone(),
            name: heaviest.name.clone(),
            share,
        })
    }

    /// Returns true if one criterion carries more than the threshold share.
    pub fn has_dominance(&self, criteria: &[Criterion]) -> bool {
        self.dominant_criterion(criteria).is_some()
    }
}

/// No criterion is enabled.
pub fn has_no_enabled_criteria(criteria: &[Criterion]) -> bool {
    !criteria.iter().any(|c| c.enabled)
}

/// Enabled criteria exist but their weights sum to 0.
pub fn has_zero_total_weight(criteria: &[Criterion]) -> bool {
    !has_no_enabled_criteria(criteria) && WeightNormalizer::enabled_total(criteria) == 0.0
}

/// An enabled criterion has a weight below 0.
pub fn has_negative_weight(criteria: &[Criterion]) -> bool {
    criteria.iter().any(|c| c.enabled && c.weight < 0.0)
}

/// An enabled criterion's weight is not a finite number.
pub fn has_invalid_weight(criteria: &[Criterion]) -> bool {
    criteria
        .iter()
        .any(|c| c.enabled && !numeric::is_well_formed(c.weight))
}

/// Names shared by two or more criteria, enabled or not.
///
/// Comparison is trimmed and case-insensitive. Each duplicated name is listed
/// once, spelled as it first appears.
pub fn duplicate_names(criteria: &[Criterion]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    let mut duplicated = Vec::new();

    for criterion in criteria {
        let key = name_key(&criterion.name);
        if !seen.insert(key.clone()) && reported.insert(key.clone()) {
            let first = criteria
                .iter()
                .find(|c| name_key(&c.name) == key)
                .map(|c| c.name.trim().to_string())
                .unwrap_or(key);
            duplicated.push(first);
        }
    }

    duplicated
}
