//! Contest model - a matchup between two teams with a fee and a prize

use serde::{Deserialize, Serialize};

use super::{Team, TeamId};

/// Identifier of a contest, issued by the store
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContestId(String);

impl ContestId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Numeric value of the id, if it has one (seeded and issued ids do)
    pub fn as_number(&self) -> Option<u64> {
        self.0.parse().ok()
    }
}

impl From<u64> for ContestId {
    fn from(value: u64) -> Self {
        Self(value.to_string())
    }
}

impl From<&str> for ContestId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl std::fmt::Display for ContestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A contest with both teams resolved
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contest {
    pub id: ContestId,
    pub name: String,
    pub team_a: Team,
    pub team_b: Team,
    pub joining_fee: u64,
    pub winning_prize: u64,
}

impl Contest {
    pub fn from_draft(id: ContestId, draft: ContestDraft) -> Self {
        Self {
            id,
            name: draft.name,
            team_a: draft.team_a,
            team_b: draft.team_b,
            joining_fee: draft.joining_fee,
            winning_prize: draft.winning_prize,
        }
    }

    /// Replace every mutable field, keeping the id
    pub fn apply(&mut self, draft: ContestDraft) {
        self.name = draft.name;
        self.team_a = draft.team_a;
        self.team_b = draft.team_b;
        self.joining_fee = draft.joining_fee;
        self.winning_prize = draft.winning_prize;
    }

    /// Form output that would reproduce this contest
    pub fn to_input(&self) -> ContestInput {
        ContestInput {
            name: self.name.clone(),
            team_a: self.team_a.id.clone(),
            team_b: self.team_b.id.clone(),
            joining_fee: self.joining_fee,
            winning_prize: self.winning_prize,
        }
    }
}

/// Validated form output. Teams are still unresolved ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContestInput {
    pub name: String,
    pub team_a: TeamId,
    pub team_b: TeamId,
    pub joining_fee: u64,
    pub winning_prize: u64,
}

/// Contest fields with teams resolved, before an id is assigned
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContestDraft {
    pub name: String,
    pub team_a: Team,
    pub team_b: Team,
    pub joining_fee: u64,
    pub winning_prize: u64,
}

impl ContestDraft {
    pub fn resolve(input: ContestInput, team_a: Team, team_b: Team) -> Self {
        Self {
            name: input.name,
            team_a,
            team_b,
            joining_fee: input.joining_fee,
            winning_prize: input.winning_prize,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str, prize: u64) -> ContestDraft {
        ContestDraft {
            name: name.to_string(),
            team_a: Team::new("1", "Bulls"),
            team_b: Team::new("2", "Bears"),
            joining_fee: 10,
            winning_prize: prize,
        }
    }

    #[test]
    fn test_apply_keeps_id() {
        let mut contest = Contest::from_draft(ContestId::from(4), draft("Cup", 200));
        contest.apply(draft("Bowl", 500));

        assert_eq!(contest.id.as_str(), "4");
        assert_eq!(contest.name, "Bowl");
        assert_eq!(contest.winning_prize, 500);
    }

    #[test]
    fn test_to_input_uses_team_ids() {
        let contest = Contest::from_draft(ContestId::from(1), draft("Cup", 200));
        let input = contest.to_input();

        assert_eq!(input.team_a, TeamId::new("1"));
        assert_eq!(input.team_b, TeamId::new("2"));
        assert_eq!(input.winning_prize, 200);
    }

    #[test]
    fn test_numeric_ids() {
        assert_eq!(ContestId::from(12).as_number(), Some(12));
        assert_eq!(ContestId::new("abc").as_number(), None);
    }
}
