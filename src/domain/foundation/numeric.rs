//! Numeric coercion shared by weight normalization, scoring and validation.
//!
//! Raw numbers arrive from form fields and may be empty, malformed or
//! non-finite. Scoring treats anything that is not a finite number as 0;
//! the validator reports malformed weights instead of silently accepting them.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Maps non-finite values (NaN, ±inf) to 0; finite values pass through.
pub fn coerce(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// Returns true if the value is a usable, finite number.
pub fn is_well_formed(value: f64) -> bool {
    value.is_finite()
}

/// Converts form-field text to a number.
///
/// - Blank text yields `0.0`.
/// - Parseable text yields the parsed number.
/// - Anything else yields `NaN`, which the validator reports and
///   [`coerce`] later maps to 0.
pub fn parse_input(text: &str) -> f64 {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

/// A number deserialized leniently from a JSON number, numeric string, or null.
///
/// Non-finite values serialize as strings (`"NaN"`, `"inf"`, `"-inf"`) and
/// parse back unchanged, so a malformed entry survives a JSON round trip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LenientNumber(pub f64);

impl Serialize for LenientNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if self.0.is_finite() {
            serializer.serialize_f64(self.0)
        } else {
            serializer.serialize_str(&self.0.to_string())
        }
    }
}

impl<'de> Deserialize<'de> for LenientNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Number(f64),
            Text(String),
        }

        let value = match Option::<Raw>::deserialize(deserializer)? {
            None => 0.0,
            Some(Raw::Number(n)) => n,
            Some(Raw::Text(text)) => parse_input(&text),
        };
        Ok(LenientNumber(value))
    }
}

/// Serde helper for `#[serde(deserialize_with = "numeric::lenient")]`.
pub fn lenient<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    LenientNumber::deserialize(deserializer).map(|n| n.0)
}

/// Serde helper for `#[serde(serialize_with = "numeric::serialize_lenient")]`.
pub fn serialize_lenient<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    LenientNumber(*value).serialize(serializer)
}
