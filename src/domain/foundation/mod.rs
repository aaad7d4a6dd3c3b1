//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers, enums, numeric coercion and error
//! types that form the vocabulary of the decision matrix domain.

mod criterion_type;
mod errors;
mod ids;
pub mod numeric;

pub use criterion_type::CriterionType;
pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{CriterionId, OptionId};
