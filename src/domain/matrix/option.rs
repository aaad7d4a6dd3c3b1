//! Decision options and their raw per-criterion values.

use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;

use crate::domain::foundation::{numeric, numeric::LenientNumber, CriterionId, OptionId};

/// Raw measurements of one option, keyed by criterion id.
///
/// Lookups never fail: a missing entry reads as 0, and so does a
/// malformed (non-finite) one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CriterionValues(BTreeMap<CriterionId, f64>);

impl CriterionValues {
    /// Creates an empty value map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the coerced value for a criterion (missing or malformed = 0).
    pub fn get(&self, criterion_id: &str) -> f64 {
        self.0.get(criterion_id).copied().map(numeric::coerce).unwrap_or(0.0)
    }

    /// Returns the stored value as entered, if any.
    pub fn raw(&self, criterion_id: &str) -> Option<f64> {
        self.0.get(criterion_id).copied()
    }

    /// Sets the value for a criterion, returning the previous one.
    pub fn set(&mut self, criterion_id: impl Into<CriterionId>, value: f64) -> Option<f64> {
        self.0.insert(criterion_id.into(), value)
    }

    /// Removes the value for a criterion.
    pub fn remove(&mut self, criterion_id: &str) -> Option<f64> {
        self.0.remove(criterion_id)
    }

    /// Returns true if a value was entered for the criterion.
    pub fn contains(&self, criterion_id: &str) -> bool {
        self.0.contains_key(criterion_id)
    }

    /// Iterates over stored entries in id order.
    pub fn iter(&self) -> impl Iterator<Item = (&CriterionId, &f64)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<CriterionId>> FromIterator<(K, f64)> for CriterionValues {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

impl Serialize for CriterionValues {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (id, value) in &self.0 {
            map.serialize_entry(id, &LenientNumber(*value))?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for CriterionValues {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = BTreeMap::<CriterionId, LenientNumber>::deserialize(deserializer)?;
        Ok(Self(raw.into_iter().map(|(k, v)| (k, v.0)).collect()))
    }
}

/// A candidate being evaluated, holding one raw value per criterion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionOption {
    pub id: OptionId,
    pub name: String,
    #[serde(default)]
    pub values: CriterionValues,
}

impl DecisionOption {
    /// Creates an option with no values entered.
    pub fn new(id: impl Into<OptionId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            values: CriterionValues::new(),
        }
    }

    /// Adds a value for a criterion.
    pub fn with_value(mut self, criterion_id: impl Into<CriterionId>, value: f64) -> Self {
        self.values.set(criterion_id, value);
        self
    }

    /// Returns the coerced raw value for a criterion (missing = 0).
    pub fn value(&self, criterion_id: &str) -> f64 {
        self.values.get(criterion_id)
    }
}
