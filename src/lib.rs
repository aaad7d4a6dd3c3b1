//! Decision Matrix - Multi-criteria scoring of candidate options
//!
//! Users define weighted benefit/cost criteria and raw values per option;
//! this crate normalizes weights and values, computes a composite score per
//! option, ranks the options, and reports advisory findings about the
//! criteria configuration.

pub mod application;
pub mod config;
pub mod domain;
pub mod telemetry;
