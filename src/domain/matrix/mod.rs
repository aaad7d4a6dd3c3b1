//! Matrix Module - The scoring core of the decision matrix.
//!
//! # Components
//!
//! - `Criterion`, `DecisionOption` - Inputs owned by the caller
//! - `WeightNormalizer` - Rescales enabled weights to sum to 1
//! - `ScoringEngine` - Min-max value normalization, weighted sum, stable ranking
//! - `Validator` - Advisory findings about the criteria configuration
//! - `OptionChecks` - Identical options and option name uniqueness
//!
//! Every function here is pure and total: degenerate input produces a
//! well-formed numeric result, never an error or a NaN.

mod criterion;
mod option;
mod option_checks;
mod scoring;
mod validator;
mod weights;

pub use criterion::Criterion;
pub use option::{CriterionValues, DecisionOption};
pub use option_checks::{name_key, IdenticalPair, OptionChecks, IDENTICAL_OPTIONS_MESSAGE};
pub use scoring::{Breakdown, CriterionRange, ScoredOption, ScoringEngine};
pub use validator::{
    duplicate_names, has_invalid_weight, has_negative_weight, has_no_enabled_criteria,
    has_zero_total_weight, DominantCriterion, Finding, FindingKind, Severity, ValidationReport,
    Validator, DOMINANCE_THRESHOLD,
};
pub use weights::{NormalizedCriteria, WeightNormalizer};
