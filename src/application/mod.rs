//! Application layer - The collaborator side of the scoring core.
//!
//! Owns the editable criteria/options state, runs the evaluation pipeline
//! after each change, and tracks which notices have already been shown.

mod evaluation;
mod notifications;
mod workspace;

pub use evaluation::{evaluate, Evaluation};
pub use notifications::{Notice, NotificationLatch};
pub use workspace::DecisionMatrix;
