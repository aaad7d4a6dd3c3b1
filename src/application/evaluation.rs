//! Evaluation pipeline - normalize weights, score, rank, validate.

use serde::Serialize;
use tracing::debug;

use crate::domain::matrix::{
    Criterion, DecisionOption, IdenticalPair, NormalizedCriteria, OptionChecks, ScoredOption,
    ScoringEngine, ValidationReport, Validator, WeightNormalizer,
};

/// Everything the presentation layer needs after one change.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Evaluation {
    /// Enabled criteria with weights rescaled to sum to 1 (or all 0).
    pub criteria: NormalizedCriteria,
    /// Scored options, best first; ties keep input order.
    pub ranked: Vec<ScoredOption>,
    /// Advisory findings about the raw criteria.
    pub report: ValidationReport,
    /// First pair of options that will tie on every enabled criterion.
    ///
    /// Disabled criteria are not compared: two options that differ only on a
    /// disabled criterion are still reported as identical.
    pub identical_options: Option<IdenticalPair>,
}

impl Evaluation {
    /// The top-ranked option, if any options were scored.
    pub fn winner(&self) -> Option<&ScoredOption> {
        self.ranked.first()
    }

    /// Returns true if the top score is shared by two or more options.
    pub fn is_tied_at_top(&self) -> bool {
        match (self.ranked.first(), self.ranked.get(1)) {
            (Some(a), Some(b)) => a.score == b.score,
            _ => false,
        }
    }

    /// One-line summary of the outcome.
    pub fn summary(&self) -> String {
        match self.winner() {
            Some(w) => format!(
                "Winner: {} achieved the highest overall score of {:.4}.",
                w.name(),
                w.score
            ),
            None => "No options to evaluate".to_string(),
        }
    }
}

/// Runs the full pipeline over a criteria and options snapshot.
///
/// Pure apart from debug logging: identical input yields an identical result.
pub fn evaluate(
    criteria: &[Criterion],
    options: &[DecisionOption],
    validator: &Validator,
) -> Evaluation {
    let normalized = WeightNormalizer::normalize(criteria);
    let ranked = ScoringEngine::score_and_rank(options, &normalized);
    let report = validator.validate(criteria);
    let identical_options = OptionChecks::find_identical(options, normalized.as_slice());

    debug!(
        criteria = criteria.len(),
        enabled = normalized.len(),
        options = options.len(),
        valid = report.valid,
        winner = ranked.first().map(|w| w.id().as_str()).unwrap_or("none"),
        "Evaluated decision matrix"
    );

    Evaluation {
        criteria: normalized,
        ranked,
        report,
        identical_options,
    }
}
