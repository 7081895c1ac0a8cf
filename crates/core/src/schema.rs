//! Contest form schema
//!
//! Declarative rules for the contest create/edit form. The schema turns raw
//! field text into a [`ContestInput`] or a set of per-field messages.
//! Name uniqueness and team existence depend on live state and are checked
//! by the page controller, not here.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::{ContestInput, TeamId};

const MIN_NAME_CHARS: usize = 3;
const MAX_NAME_CHARS: usize = 100;

/// Form fields, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Name,
    TeamA,
    TeamB,
    JoiningFee,
    WinningPrize,
}

impl Field {
    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Contest Name",
            Field::TeamA => "Team A",
            Field::TeamB => "Team B",
            Field::JoiningFee => "Joining Fee",
            Field::WinningPrize => "Winning Prize",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Raw form values, exactly as typed or selected
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContestFormValues {
    pub name: String,
    pub team_a: String,
    pub team_b: String,
    pub joining_fee: String,
    pub winning_prize: String,
}

impl ContestFormValues {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::TeamA => &self.team_a,
            Field::TeamB => &self.team_b,
            Field::JoiningFee => &self.joining_fee,
            Field::WinningPrize => &self.winning_prize,
        }
    }
}

impl From<&ContestInput> for ContestFormValues {
    fn from(input: &ContestInput) -> Self {
        Self {
            name: input.name.clone(),
            team_a: input.team_a.to_string(),
            team_b: input.team_b.to_string(),
            joining_fee: input.joining_fee.to_string(),
            winning_prize: input.winning_prize.to_string(),
        }
    }
}

/// Per-field validation messages; at most one message per field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<Field, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message unless the field already has one
    pub fn add(&mut self, field: Field, message: impl Into<String>) {
        self.0.entry(field).or_insert_with(|| message.into());
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(f, m)| (*f, m.as_str()))
    }
}

impl std::fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for (field, message) in self.iter() {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{}: {}", field, message)?;
            first = false;
        }
        Ok(())
    }
}

/// A single check applied to one field's raw text
#[derive(Debug, Clone, PartialEq, Eq)]
enum Rule {
    /// Non-blank after trimming
    Required(&'static str),
    /// At least this many characters after trimming
    MinChars(usize, &'static str),
    /// At most this many characters after trimming
    MaxChars(usize, &'static str),
    /// A whole, non-negative amount; the string is the field's noun
    Amount(&'static str),
}

impl Rule {
    fn check(&self, raw: &str) -> Option<String> {
        let value = raw.trim();
        match self {
            Rule::Required(message) => value.is_empty().then(|| message.to_string()),
            Rule::MinChars(min, message) => {
                (value.chars().count() < *min).then(|| message.to_string())
            }
            Rule::MaxChars(max, message) => {
                (value.chars().count() > *max).then(|| message.to_string())
            }
            Rule::Amount(noun) => check_amount(noun, value),
        }
    }
}

fn check_amount(noun: &str, value: &str) -> Option<String> {
    if value.parse::<u64>().is_ok() {
        return None;
    }

    match value.parse::<f64>() {
        Ok(n) if n < 0.0 => Some(format!("{} must be 0 or more", noun)),
        Ok(n) if n.is_finite() && n.fract() != 0.0 => {
            Some(format!("{} must be a whole number", noun))
        }
        Ok(n) if n.is_finite() => Some(format!("{} is too large", noun)),
        _ => Some(format!("{} must be a number", noun)),
    }
}

/// Rules for one field, checked in order; the first failure wins
#[derive(Debug, Clone)]
struct FieldSpec {
    field: Field,
    rules: Vec<Rule>,
}

/// The contest form schema
#[derive(Debug, Clone)]
pub struct ContestSchema {
    fields: Vec<FieldSpec>,
    distinct_teams: bool,
}

impl Default for ContestSchema {
    fn default() -> Self {
        Self::new()
    }
}

impl ContestSchema {
    pub fn new() -> Self {
        Self {
            fields: vec![
                FieldSpec {
                    field: Field::Name,
                    rules: vec![
                        Rule::Required("Contest name is required"),
                        Rule::MinChars(
                            MIN_NAME_CHARS,
                            "Contest name must be at least 3 characters",
                        ),
                        Rule::MaxChars(
                            MAX_NAME_CHARS,
                            "Contest name must be at most 100 characters",
                        ),
                    ],
                },
                FieldSpec {
                    field: Field::TeamA,
                    rules: vec![Rule::Required("Please select Team A")],
                },
                FieldSpec {
                    field: Field::TeamB,
                    rules: vec![Rule::Required("Please select Team B")],
                },
                FieldSpec {
                    field: Field::JoiningFee,
                    rules: vec![
                        Rule::Required("Joining fee is required"),
                        Rule::Amount("Joining fee"),
                    ],
                },
                FieldSpec {
                    field: Field::WinningPrize,
                    rules: vec![
                        Rule::Required("Winning prize is required"),
                        Rule::Amount("Winning prize"),
                    ],
                },
            ],
            distinct_teams: false,
        }
    }

    /// Also reject forms where both selectors point at the same team
    pub fn with_distinct_teams(mut self, distinct: bool) -> Self {
        self.distinct_teams = distinct;
        self
    }

    pub fn requires_distinct_teams(&self) -> bool {
        self.distinct_teams
    }

    /// Validate raw values into form output
    pub fn validate(&self, values: &ContestFormValues) -> Result<ContestInput, FieldErrors> {
        let mut errors = FieldErrors::new();

        for spec in &self.fields {
            let raw = values.get(spec.field);
            if let Some(message) = spec.rules.iter().find_map(|rule| rule.check(raw)) {
                errors.add(spec.field, message);
            }
        }

        if self.distinct_teams
            && !errors.contains(Field::TeamA)
            && !errors.contains(Field::TeamB)
            && values.team_a.trim() == values.team_b.trim()
        {
            errors.add(Field::TeamB, "Team B must be different from Team A");
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        let amount = |field: Field| -> Result<u64, FieldErrors> {
            values.get(field).trim().parse::<u64>().map_err(|_| {
                let mut errors = FieldErrors::new();
                errors.add(field, format!("{} must be a number", field));
                errors
            })
        };

        Ok(ContestInput {
            name: values.name.trim().to_string(),
            team_a: TeamId::new(values.team_a.trim()),
            team_b: TeamId::new(values.team_b.trim()),
            joining_fee: amount(Field::JoiningFee)?,
            winning_prize: amount(Field::WinningPrize)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(name: &str, a: &str, b: &str, fee: &str, prize: &str) -> ContestFormValues {
        ContestFormValues {
            name: name.to_string(),
            team_a: a.to_string(),
            team_b: b.to_string(),
            joining_fee: fee.to_string(),
            winning_prize: prize.to_string(),
        }
    }

    #[test]
    fn test_valid_form_parses_amounts() {
        let input = ContestSchema::new()
            .validate(&values("  Cup Final ", "1", "2", "100", "200000"))
            .unwrap();

        assert_eq!(input.name, "Cup Final");
        assert_eq!(input.team_a, TeamId::new("1"));
        assert_eq!(input.team_b, TeamId::new("2"));
        assert_eq!(input.joining_fee, 100);
        assert_eq!(input.winning_prize, 200000);
    }

    #[test]
    fn test_empty_form_reports_every_field() {
        let errors = ContestSchema::new()
            .validate(&ContestFormValues::default())
            .unwrap_err();

        assert_eq!(errors.len(), 5);
        assert_eq!(errors.get(Field::Name), Some("Contest name is required"));
        assert_eq!(errors.get(Field::TeamA), Some("Please select Team A"));
        assert_eq!(errors.get(Field::TeamB), Some("Please select Team B"));
        assert_eq!(errors.get(Field::JoiningFee), Some("Joining fee is required"));
    }

    #[test]
    fn test_short_name_rejected() {
        let errors = ContestSchema::new()
            .validate(&values("Cu", "1", "2", "1", "1"))
            .unwrap_err();
        assert_eq!(
            errors.get(Field::Name),
            Some("Contest name must be at least 3 characters")
        );
    }

    #[test]
    fn test_name_length_counts_characters_not_bytes() {
        assert!(ContestSchema::new()
            .validate(&values("🚀💰🏆", "1", "2", "1", "1"))
            .is_ok());
    }

    #[test]
    fn test_amount_messages() {
        let schema = ContestSchema::new();

        let errors = schema.validate(&values("Cup", "1", "2", "-5", "abc")).unwrap_err();
        assert_eq!(errors.get(Field::JoiningFee), Some("Joining fee must be 0 or more"));
        assert_eq!(errors.get(Field::WinningPrize), Some("Winning prize must be a number"));

        let errors = schema.validate(&values("Cup", "1", "2", "1.5", "0")).unwrap_err();
        assert_eq!(
            errors.get(Field::JoiningFee),
            Some("Joining fee must be a whole number")
        );
        assert!(!errors.contains(Field::WinningPrize));
    }

    #[test]
    fn test_same_team_allowed_by_default() {
        assert!(ContestSchema::new()
            .validate(&values("Cup", "3", "3", "0", "0"))
            .is_ok());
    }

    #[test]
    fn test_same_team_rejected_when_distinct_required() {
        let errors = ContestSchema::new()
            .with_distinct_teams(true)
            .validate(&values("Cup", "3", "3", "0", "0"))
            .unwrap_err();

        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.get(Field::TeamB),
            Some("Team B must be different from Team A")
        );
    }

    #[test]
    fn test_errors_display_in_field_order() {
        let mut errors = FieldErrors::new();
        errors.add(Field::WinningPrize, "bad prize");
        errors.add(Field::Name, "bad name");
        errors.add(Field::Name, "ignored");

        assert_eq!(errors.to_string(), "Contest Name: bad name; Winning Prize: bad prize");
    }

    #[test]
    fn test_form_values_round_trip_from_input() {
        let input = ContestInput {
            name: "Cup".to_string(),
            team_a: TeamId::new("1"),
            team_b: TeamId::new("2"),
            joining_fee: 5,
            winning_prize: 10,
        };
        let parsed = ContestSchema::new()
            .validate(&ContestFormValues::from(&input))
            .unwrap();
        assert_eq!(parsed, input);
    }
}
