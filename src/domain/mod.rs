//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, enums, numeric coercion, errors)
//! - `matrix` - Pure scoring core (weights, value normalization, ranking, validation)

pub mod foundation;
pub mod matrix;
