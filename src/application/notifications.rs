//! Notification latch - show each finding once until it clears.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

use super::Evaluation;
use crate::domain::matrix::{FindingKind, IDENTICAL_OPTIONS_MESSAGE};

/// Something worth telling the user about after an evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Notice {
    Finding(FindingKind),
    IdenticalOptions,
}

impl Notice {
    /// Every notice raised by an evaluation.
    pub fn from_evaluation(evaluation: &Evaluation) -> Vec<Notice> {
        let mut notices: Vec<Notice> = evaluation
            .report
            .active_kinds()
            .into_iter()
            .map(Notice::Finding)
            .collect();
        if evaluation.identical_options.is_some() {
            notices.push(Notice::IdenticalOptions);
        }
        notices
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::Finding(kind) => write!(f, "{}", kind),
            Notice::IdenticalOptions => write!(f, "{}", IDENTICAL_OPTIONS_MESSAGE),
        }
    }
}

/// Remembers which notices are currently showing.
///
/// A notice is reported the first time it becomes active. While it stays
/// active it is suppressed; once it clears it is re-armed.
#[derive(Debug, Clone, Default)]
pub struct NotificationLatch {
    shown: HashSet<Notice>,
}

impl NotificationLatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the currently active notices and returns the newly raised ones,
    /// in the order given.
    pub fn observe(&mut self, active: impl IntoIterator<Item = Notice>) -> Vec<Notice> {
        let active: Vec<Notice> = active.into_iter().collect();
        let current: HashSet<Notice> = active.iter().copied().collect();

        let fresh: Vec<Notice> = active
            .into_iter()
            .filter(|n| !self.shown.contains(n))
            .fold(Vec::new(), |mut acc, n| {
                if !acc.contains(&n) {
                    acc.push(n);
                }
                acc
            });

        self.shown = current;
        fresh
    }

    /// Observes the notices of an evaluation.
    pub fn observe_evaluation(&mut self, evaluation: &Evaluation) -> Vec<Notice> {
        self.observe(Notice::from_evaluation(evaluation))
    }

    /// Returns true if the notice is currently latched.
    pub fn is_showing(&self, notice: Notice) -> bool {
        self.shown.contains(&notice)
    }

    /// Forgets everything shown so far.
    pub fn reset(&mut self) {
        self.shown.clear();
    }
}
