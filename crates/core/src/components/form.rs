//! Contest create/edit form

use crate::models::{ContestInput, Team};
use crate::schema::{ContestFormValues, ContestSchema, Field, FieldErrors};

/// What the form emits
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    /// Values passed the schema
    Submit(ContestInput),
    /// User backed out; no payload
    Cancel,
}

/// Form state: current values, last errors, and the team selector options
#[derive(Debug, Clone)]
pub struct ContestForm {
    schema: ContestSchema,
    teams: Vec<Team>,
    values: ContestFormValues,
    errors: FieldErrors,
    is_editing: bool,
}

impl ContestForm {
    /// Blank form for creating a contest
    pub fn new(schema: ContestSchema, teams: Vec<Team>) -> Self {
        Self {
            schema,
            teams,
            values: ContestFormValues::default(),
            errors: FieldErrors::new(),
            is_editing: false,
        }
    }

    /// Prefilled form for editing an existing contest
    pub fn with_defaults(mut self, defaults: ContestFormValues) -> Self {
        self.values = defaults;
        self.is_editing = true;
        self
    }

    pub fn is_editing(&self) -> bool {
        self.is_editing
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_editing {
            "Update Contest"
        } else {
            "Create Contest"
        }
    }

    /// Teams offered by both selectors
    pub fn team_options(&self) -> &[Team] {
        &self.teams
    }

    pub fn values(&self) -> &ContestFormValues {
        &self.values
    }

    pub fn set_values(&mut self, values: ContestFormValues) {
        self.values = values;
    }

    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.values.name = value,
            Field::TeamA => self.values.team_a = value,
            Field::TeamB => self.values.team_b = value,
            Field::JoiningFee => self.values.joining_fee = value,
            Field::WinningPrize => self.values.winning_prize = value,
        }
    }

    /// Errors from the last submit attempt
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Validate the current values.
    ///
    /// Returns `None` when validation fails; the messages are then available
    /// from [`ContestForm::errors`].
    pub fn submit(&mut self) -> Option<FormEvent> {
        match self.schema.validate(&self.values) {
            Ok(input) => {
                self.errors = FieldErrors::new();
                Some(FormEvent::Submit(input))
            }
            Err(errors) => {
                tracing::debug!(%errors, "Contest form rejected");
                self.errors = errors;
                None
            }
        }
    }

    pub fn cancel(&mut self) -> FormEvent {
        self.errors = FieldErrors::new();
        FormEvent::Cancel
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TeamId;

    fn teams() -> Vec<Team> {
        vec![Team::new("1", "Bulls"), Team::new("2", "Bears")]
    }

    #[test]
    fn test_create_form_starts_blank() {
        let form = ContestForm::new(ContestSchema::new(), teams());
        assert!(!form.is_editing());
        assert_eq!(form.submit_label(), "Create Contest");
        assert_eq!(form.values(), &ContestFormValues::default());
        assert_eq!(form.team_options().len(), 2);
    }

    #[test]
    fn test_invalid_submit_emits_nothing_and_keeps_errors() {
        let mut form = ContestForm::new(ContestSchema::new(), teams());
        form.set_field(Field::Name, "Cup");

        assert!(form.submit().is_none());
        assert!(!form.errors().contains(Field::Name));
        assert!(form.errors().contains(Field::TeamA));
        assert!(form.errors().contains(Field::WinningPrize));
    }

    #[test]
    fn test_valid_submit_clears_errors() {
        let mut form = ContestForm::new(ContestSchema::new(), teams());
        assert!(form.submit().is_none());

        form.set_field(Field::Name, "Cup");
        form.set_field(Field::TeamA, "1");
        form.set_field(Field::TeamB, "2");
        form.set_field(Field::JoiningFee, "100");
        form.set_field(Field::WinningPrize, "200");

        match form.submit() {
            Some(FormEvent::Submit(input)) => {
                assert_eq!(input.team_a, TeamId::new("1"));
                assert_eq!(input.joining_fee, 100);
            }
            other => panic!("expected submit, got {:?}", other),
        }
        assert!(form.errors().is_empty());
    }

    #[test]
    fn test_edit_form_uses_defaults() {
        let defaults = ContestFormValues {
            name: "Cup".to_string(),
            team_a: "1".to_string(),
            team_b: "2".to_string(),
            joining_fee: "1".to_string(),
            winning_prize: "2".to_string(),
        };
        let form = ContestForm::new(ContestSchema::new(), teams()).with_defaults(defaults.clone());

        assert!(form.is_editing());
        assert_eq!(form.submit_label(), "Update Contest");
        assert_eq!(form.values(), &defaults);
    }

    #[test]
    fn test_cancel_has_no_payload() {
        let mut form = ContestForm::new(ContestSchema::new(), teams());
        form.submit();
        assert_eq!(form.cancel(), FormEvent::Cancel);
        assert!(form.errors().is_empty());
    }
}
