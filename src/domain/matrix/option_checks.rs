//! Option checks - Identical options and name uniqueness.

use serde::{Deserialize, Serialize};

use super::{Criterion, DecisionOption};
use crate::domain::foundation::OptionId;

/// Message shown when two options cannot be told apart.
pub const IDENTICAL_OPTIONS_MESSAGE: &str =
    "Two options have identical values across all criteria. Ranking will result in a tie.";

/// Two options with equal values on every criterion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdenticalPair {
    pub first: OptionId,
    pub second: OptionId,
}

/// Key used to compare display names: trimmed and lowercased.
pub fn name_key(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Option comparison functions.
pub struct OptionChecks;

impl OptionChecks {
    /// Finds the first pair of options with identical values on every criterion.
    ///
    /// Pairs are visited in input order (i < j). Values are compared after
    /// coercion, so a missing value equals an explicit 0.
    ///
    /// # Edge Cases
    /// - Fewer than two options: Returns None
    /// - No criteria: The first two options are identical
    pub fn find_identical(
        options: &[DecisionOption],
        criteria: &[Criterion],
    ) -> Option<IdenticalPair> {
        options.iter().enumerate().find_map(|(i, a)| {
            options[i + 1..]
                .iter()
                .find(|b| Self::identical(a, b, criteria))
                .map(|b| IdenticalPair {
                    first: a.id.clone(),
                    second: b.id.clone(),
                })
        })
    }

    fn identical(a: &DecisionOption, b: &DecisionOption, criteria: &[Criterion]) -> bool {
        criteria
            .iter()
            .all(|c| a.value(c.id.as_str()) == b.value(c.id.as_str()))
    }

    /// Returns true if another option already uses this name.
    ///
    /// `except` is the option being renamed; its own name never conflicts.
    pub fn is_name_taken(options: &[DecisionOption], name: &str, except: Option<&OptionId>) -> bool {
        let key = name_key(name);
        options
            .iter()
            .filter(|o| Some(&o.id) != except)
            .any(|o| name_key(&o.name) == key)
    }
}
