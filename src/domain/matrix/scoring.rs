//! Scoring Engine - Value normalization, weighted aggregation, and ranking.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{Criterion, DecisionOption, NormalizedCriteria};
use crate::domain::foundation::{numeric, CriterionId, CriterionType, OptionId};

/// One criterion's share of an option's score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Breakdown {
    /// Direction-aware min-max rescaled value in [0, 1].
    pub normalized: f64,
    /// The criterion's normalized weight.
    pub weight: f64,
    /// `normalized * weight`.
    pub contribution: f64,
}

/// An option with its composite score and per-criterion breakdown.
///
/// Pure output: recomputed on every scoring run, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredOption {
    #[serde(flatten)]
    pub option: DecisionOption,
    pub score: f64,
    pub breakdown: BTreeMap<CriterionId, Breakdown>,
}

impl ScoredOption {
    pub fn id(&self) -> &OptionId {
        &self.option.id
    }

    pub fn name(&self) -> &str {
        &self.option.name
    }

    /// Breakdown entry for a criterion, if it was scored.
    pub fn breakdown_for(&self, criterion_id: &str) -> Option<&Breakdown> {
        self.breakdown.get(criterion_id)
    }
}

/// Observed spread of raw values on one criterion across all options.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CriterionRange {
    pub min: f64,
    pub max: f64,
}

impl CriterionRange {
    /// Computes the range of a criterion's coerced values (missing = 0).
    ///
    /// Returns `None` when there are no options.
    pub fn of(options: &[DecisionOption], criterion_id: &str) -> Option<Self> {
        let mut values = options.iter().map(|o| o.value(criterion_id));
        let first = values.next()?;

        let (min, max) = values.fold((first, first), |(min, max), v| (min.min(v), max.max(v)));
        Some(Self { min, max })
    }

    /// Returns true if every option has the same value.
    pub fn is_degenerate(&self) -> bool {
        self.max == self.min
    }

    /// Rescales a raw value into [0, 1] according to the preference direction.
    ///
    /// A degenerate range gives every option full credit (1).
    pub fn normalize(&self, raw: f64, criterion_type: CriterionType) -> f64 {
        if self.is_degenerate() {
            return 1.0;
        }

        // Halving keeps the span finite when the bounds are far apart.
        let factor = if (self.max - self.min).is_finite() { 1.0 } else { 0.5 };
        let (min, max, raw) = (self.min * factor, self.max * factor, raw * factor);
        let span = max - min;
        let scaled = match criterion_type {
            CriterionType::Benefit => (raw - min) / span,
            CriterionType::Cost => (max - raw) / span,
        };

        numeric::coerce(scaled).clamp(0.0, 1.0)
    }
}

/// Scoring and ranking functions.
pub struct ScoringEngine;

impl ScoringEngine {
    /// Computes normalized values, contributions, and a total score per option.
    ///
    /// # Algorithm
    /// For each criterion: normalized = min-max rescale of the raw value
    /// (inverted for cost criteria); contribution = normalized * weight.
    /// score = Σ contribution.
    ///
    /// # Edge Cases
    /// - No options: Returns empty Vec
    /// - No criteria: Every score is 0 with an empty breakdown
    /// - All weights 0: Every contribution and score is 0
    /// - Single option or tied values: normalized = 1 on that criterion
    /// - Missing or malformed values: Treated as 0
    ///
    /// Output preserves input order.
    pub fn score_options(
        options: &[DecisionOption],
        criteria: &NormalizedCriteria,
    ) -> Vec<ScoredOption> {
        let ranges: Vec<(&Criterion, Option<CriterionRange>)> = criteria
            .iter()
            .map(|c| (c, CriterionRange::of(options, c.id.as_str())))
            .collect();

        options
            .iter()
            .map(|option| {
                let mut breakdown = BTreeMap::new();
                let mut total = 0.0;

                for (criterion, range) in &ranges {
                    let raw = option.value(criterion.id.as_str());
                    let normalized = range
                        .map(|r| r.normalize(raw, criterion.criterion_type))
                        .unwrap_or(1.0);
                    let weight = numeric::coerce(criterion.weight);
                    let contribution = normalized * weight;

                    breakdown.insert(
                        criterion.id.clone(),
                        Breakdown {
                            normalized,
                            weight,
                            contribution,
                        },
                    );
                    total += contribution;
                }

                ScoredOption {
                    option: option.clone(),
                    score: numeric::coerce(total),
                    breakdown,
                }
            })
            .collect()
    }

    /// Sorts scored options by score, highest first.
    ///
    /// Ties keep their relative input order; ranking an already-ranked list
    /// is a no-op. The input is left untouched.
    pub fn rank(scored: &[ScoredOption]) -> Vec<ScoredOption> {
        let mut ranked = scored.to_vec();
        ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
        ranked
    }

    /// Normalizes, scores, and ranks in one call.
    pub fn score_and_rank(
        options: &[DecisionOption],
        criteria: &NormalizedCriteria,
    ) -> Vec<ScoredOption> {
        Self::rank(&Self::score_options(options, criteria))
    }
}
