//! Weight Normalizer - Rescales enabled criteria weights to sum to 1.

use serde::Serialize;

use super::Criterion;

/// Enabled criteria whose weights have been rescaled by [`WeightNormalizer`].
///
/// Only the normalizer constructs this type, so the scoring engine can rely on
/// every entry being enabled and every weight being a share of the total.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct NormalizedCriteria(Vec<Criterion>);

impl NormalizedCriteria {
    /// Criteria in input order.
    pub fn as_slice(&self) -> &[Criterion] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Criterion> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Sum of the normalized weights: 1 (within rounding) or 0.
    pub fn weight_sum(&self) -> f64 {
        self.0.iter().map(|c| c.weight).sum()
    }

    /// Finds a criterion by id.
    pub fn get(&self, id: &str) -> Option<&Criterion> {
        self.0.iter().find(|c| c.id.as_str() == id)
    }

    pub fn into_vec(self) -> Vec<Criterion> {
        self.0
    }
}

impl<'a> IntoIterator for &'a NormalizedCriteria {
    type Item = &'a Criterion;
    type IntoIter = std::slice::Iter<'a, Criterion>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Weight normalization functions.
pub struct WeightNormalizer;

impl WeightNormalizer {
    /// Normalizes weights over enabled criteria.
    ///
    /// # Algorithm
    /// total = Σ weight over enabled criteria;
    /// normalized = weight / total
    ///
    /// # Edge Cases
    /// - Disabled criteria: dropped from the output
    /// - Total of 0 (including no enabled criteria): every weight becomes 0
    /// - Malformed weights: counted as 0
    /// - Negative weights: kept in the total as entered
    pub fn normalize(criteria: &[Criterion]) -> NormalizedCriteria {
        let (scale, total) = Self::scaled_total(criteria);

        let normalized = criteria
            .iter()
            .filter(|c| c.enabled)
            .map(|c| {
                let weight = if total == 0.0 {
                    0.0
                } else {
                    (c.effective_weight() / scale) / total
                };
                Criterion {
                    weight,
                    ..c.clone()
                }
            })
            .collect();

        NormalizedCriteria(normalized)
    }

    /// Sum of effective weights over enabled criteria.
    ///
    /// Saturates to infinity when finite weights overflow on addition; the
    /// sign is still that of the true sum.
    pub fn enabled_total(criteria: &[Criterion]) -> f64 {
        let (scale, total) = Self::scaled_total(criteria);
        scale * total
    }

    /// Sum of enabled weights as `(scale, total)`, the true sum being
    /// `scale * total`.
    ///
    /// The scale is 1 unless the plain sum overflows, in which case every
    /// weight is first divided by the largest enabled magnitude.
    fn scaled_total(criteria: &[Criterion]) -> (f64, f64) {
        let enabled = || criteria.iter().filter(|c| c.enabled).map(Criterion::effective_weight);

        let plain: f64 = enabled().sum();
        if plain.is_finite() {
            return (1.0, plain);
        }

        let scale = enabled().map(f64::abs).fold(0.0, f64::max);
        (scale, enabled().map(|w| w / scale).sum())
    }
}
