//! DecisionMatrix - In-memory editing model for criteria and options.
//!
//! Owns the raw lists the scoring core reads. Edits address rows by id and
//! every change is followed by a fresh [`evaluate`](DecisionMatrix::evaluate).

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::{evaluate, Evaluation};
use crate::domain::foundation::{CriterionId, CriterionType, DomainError, ErrorCode, OptionId};
use crate::domain::matrix::{Criterion, DecisionOption, OptionChecks, Validator};

const NEW_CRITERION_NAME: &str = "New Criterion";
const NEW_OPTION_NAME: &str = "New Option";

/// The criteria and options a user is working on.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DecisionMatrix {
    #[serde(default)]
    criteria: Vec<Criterion>,
    #[serde(default)]
    options: Vec<DecisionOption>,
}

impl DecisionMatrix {
    /// Creates an empty matrix.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a matrix from existing rows.
    pub fn from_parts(criteria: Vec<Criterion>, options: Vec<DecisionOption>) -> Self {
        Self { criteria, options }
    }

    /// The trip-planning example: Budget, Weather, Safety; Paris vs Tokyo.
    pub fn sample() -> Self {
        Self {
            criteria: vec![
                Criterion::cost("c1", "Budget", 0.3),
                Criterion::benefit("c2", "Weather", 0.3),
                Criterion::benefit("c3", "Safety", 0.4),
            ],
            options: vec![
                DecisionOption::new("o1", "Paris")
                    .with_value("c1", 1500.0)
                    .with_value("c2", 8.0)
                    .with_value("c3", 7.0),
                DecisionOption::new("o2", "Tokyo")
                    .with_value("c1", 2000.0)
                    .with_value("c2", 9.0)
                    .with_value("c3", 9.0),
            ],
        }
    }

    pub fn criteria(&self) -> &[Criterion] {
        &self.criteria
    }

    pub fn options(&self) -> &[DecisionOption] {
        &self.options
    }

    pub fn criterion(&self, id: &CriterionId) -> Option<&Criterion> {
        self.criteria.iter().find(|c| &c.id == id)
    }

    pub fn option(&self, id: &OptionId) -> Option<&DecisionOption> {
        self.options.iter().find(|o| &o.id == id)
    }

    // Criteria

    /// Appends an enabled benefit criterion with weight 0.
    pub fn add_criterion(&mut self) -> CriterionId {
        let id = CriterionId::generate();
        self.criteria.push(Criterion::benefit(id.clone(), NEW_CRITERION_NAME, 0.0));
        id
    }

    /// Appends a fully specified criterion.
    pub fn push_criterion(&mut self, criterion: Criterion) {
        self.criteria.push(criterion);
    }

    pub fn rename_criterion(
        &mut self,
        id: &CriterionId,
        name: impl Into<String>,
    ) -> Result<(), DomainError> {
        self.criterion_mut(id)?.name = name.into();
        Ok(())
    }

    /// Sets the raw weight. Malformed or negative weights are stored as
    /// entered and reported by the validator.
    pub fn set_weight(&mut self, id: &CriterionId, weight: f64) -> Result<(), DomainError> {
        self.criterion_mut(id)?.weight = weight;
        Ok(())
    }

    pub fn set_criterion_type(
        &mut self,
        id: &CriterionId,
        criterion_type: CriterionType,
    ) -> Result<(), DomainError> {
        self.criterion_mut(id)?.criterion_type = criterion_type;
        Ok(())
    }

    pub fn set_enabled(&mut self, id: &CriterionId, enabled: bool) -> Result<(), DomainError> {
        self.criterion_mut(id)?.enabled = enabled;
        Ok(())
    }

    /// Removes a criterion. Option values for it are left in place and
    /// simply no longer read.
    pub fn remove_criterion(&mut self, id: &CriterionId) -> Result<Criterion, DomainError> {
        let index = self
            .criteria
            .iter()
            .position(|c| &c.id == id)
            .ok_or_else(|| DomainError::criterion_not_found(id))?;
        Ok(self.criteria.remove(index))
    }

    fn criterion_mut(&mut self, id: &CriterionId) -> Result<&mut Criterion, DomainError> {
        self.criteria
            .iter_mut()
            .find(|c| &c.id == id)
            .ok_or_else(|| DomainError::criterion_not_found(id))
    }

    // Options

    /// Appends an option with a 0 value for every current criterion.
    pub fn add_option(&mut self) -> OptionId {
        let id = OptionId::generate();
        let option = self
            .criteria
            .iter()
            .fold(DecisionOption::new(id.clone(), NEW_OPTION_NAME), |o, c| {
                o.with_value(c.id.clone(), 0.0)
            });
        self.options.push(option);
        id
    }

    /// Appends a fully specified option. Names are not checked.
    pub fn push_option(&mut self, option: DecisionOption) {
        self.options.push(option);
    }

    /// Renames an option, rejecting a name another option already uses.
    ///
    /// On rejection the matrix is left unchanged.
    pub fn rename_option(
        &mut self,
        id: &OptionId,
        name: impl Into<String>,
    ) -> Result<(), DomainError> {
        let name = name.into();
        if self.option(id).is_none() {
            return Err(DomainError::option_not_found(id));
        }
        if OptionChecks::is_name_taken(&self.options, &name, Some(id)) {
            warn!(option_id = %id, name = %name, "Rejected duplicate option name");
            return Err(
                DomainError::new(ErrorCode::DuplicateName, "Option name must be unique.")
                    .with_detail("name", name),
            );
        }
        self.option_mut(id)?.name = name;
        Ok(())
    }

    pub fn set_value(
        &mut self,
        id: &OptionId,
        criterion_id: &CriterionId,
        value: f64,
    ) -> Result<(), DomainError> {
        self.option_mut(id)?.values.set(criterion_id.clone(), value);
        Ok(())
    }

    pub fn remove_option(&mut self, id: &OptionId) -> Result<DecisionOption, DomainError> {
        let index = self
            .options
            .iter()
            .position(|o| &o.id == id)
            .ok_or_else(|| DomainError::option_not_found(id))?;
        Ok(self.options.remove(index))
    }

    fn option_mut(&mut self, id: &OptionId) -> Result<&mut DecisionOption, DomainError> {
        self.options
            .iter_mut()
            .find(|o| &o.id == id)
            .ok_or_else(|| DomainError::option_not_found(id))
    }

    /// Removes every criterion and option.
    pub fn clear(&mut self) {
        debug!(
            criteria = self.criteria.len(),
            options = self.options.len(),
            "Cleared decision matrix"
        );
        self.criteria.clear();
        self.options.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.criteria.is_empty() && self.options.is_empty()
    }

    /// Scores and validates the current state.
    pub fn evaluate(&self, validator: &Validator) -> Evaluation {
        evaluate(&self.criteria, &self.options, validator)
    }
}
