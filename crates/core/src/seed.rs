//! Seed data for the contest page
//!
//! The page starts from a fixed set of teams and example contests. The
//! built-in mock seed can be replaced by a TOML file:
//!
//! ```toml
//! [[teams]]
//! id = "1"
//! name = "Bullish Titans"
//!
//! [[contests]]
//! id = "1"
//! name = "Ultimate Crypto Showdown"
//! team_a = "1"
//! team_b = "2"
//! joining_fee = 100
//! winning_prize = 200000
//! ```

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::models::{Contest, ContestId, ContestInput, Team, TeamId};
use crate::schema::{ContestFormValues, ContestSchema};
use crate::storage::MemoryStore;

/// Seed file contents
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Seed {
    #[serde(default)]
    pub teams: Vec<Team>,
    #[serde(default)]
    pub contests: Vec<SeedContest>,
}

/// A seeded contest; teams are referenced by ID
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedContest {
    pub id: ContestId,
    pub name: String,
    pub team_a: TeamId,
    pub team_b: TeamId,
    #[serde(default)]
    pub joining_fee: u64,
    #[serde(default)]
    pub winning_prize: u64,
}

impl Seed {
    /// The mock teams and example contests shipped with the dashboard
    pub fn mock() -> Self {
        let teams = vec![
            Team::new("1", "Bullish Titans 🐂🔥"),
            Team::new("2", "Moonshot Mavericks 🚀💰"),
            Team::new("3", "Diamond Hands Crew 💎✋"),
            Team::new("4", "Blockchain Bandits ⛓️🏴‍☠️"),
            Team::new("5", "Crypto Crusaders ⚔️🪙"),
            Team::new("6", "DeFi Dominators 🏆📈"),
            Team::new("7", "HODL Heroes 🦸‍♂️📊"),
            Team::new("8", "Altcoin Avengers ⚡🛡️"),
        ];

        let contest = |id: u64, name: &str, a: &str, b: &str, fee: u64, prize: u64| SeedContest {
            id: ContestId::from(id),
            name: name.to_string(),
            team_a: TeamId::new(a),
            team_b: TeamId::new(b),
            joining_fee: fee,
            winning_prize: prize,
        };

        let contests = vec![
            contest(1, "Ultimate Crypto Showdown", "1", "2", 100, 200_000),
            contest(2, "Blockchain Battle Royale", "3", "4", 500, 1_000_000),
            contest(3, "DeFi Duel Championship", "5", "6", 250, 500_000),
        ];

        Self { teams, contests }
    }

    /// Parse seed data from TOML content
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load seed data from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let seed = Self::from_toml(&content)?;
        tracing::info!(
            path = %path.display(),
            teams = seed.teams.len(),
            contests = seed.contests.len(),
            "Loaded seed file"
        );
        Ok(seed)
    }

    /// Resolve team references and build the page's store
    pub fn into_store(self) -> Result<MemoryStore> {
        self.into_store_with(&ContestSchema::new())
    }

    /// Like [`Seed::into_store`], but every seeded contest must also pass
    /// `schema`, so it can later be edited through the form unchanged
    pub fn into_store_with(self, schema: &ContestSchema) -> Result<MemoryStore> {
        let mut team_ids = HashSet::new();
        for team in &self.teams {
            if team.id.is_blank() {
                return Err(Error::Seed(format!("team '{}' has an empty id", team.name)));
            }
            if !team_ids.insert(team.id.clone()) {
                return Err(Error::Seed(format!("duplicate team id '{}'", team.id)));
            }
        }

        let resolve = |id: &TeamId| -> Result<Team> {
            self.teams
                .iter()
                .find(|t| &t.id == id)
                .cloned()
                .ok_or_else(|| Error::MissingReference(id.clone()))
        };

        let mut contests = Vec::with_capacity(self.contests.len());
        let mut names = HashSet::new();
        for seeded in &self.contests {
            let input = ContestInput {
                name: seeded.name.clone(),
                team_a: seeded.team_a.clone(),
                team_b: seeded.team_b.clone(),
                joining_fee: seeded.joining_fee,
                winning_prize: seeded.winning_prize,
            };
            schema
                .validate(&ContestFormValues::from(&input))
                .map_err(|errors| Error::Seed(format!("contest '{}': {}", seeded.id, errors)))?;

            if !names.insert(seeded.name.as_str()) {
                return Err(Error::Seed(format!("duplicate contest name '{}'", seeded.name)));
            }

            contests.push(Contest {
                id: seeded.id.clone(),
                name: seeded.name.clone(),
                team_a: resolve(&seeded.team_a)?,
                team_b: resolve(&seeded.team_b)?,
                joining_fee: seeded.joining_fee,
                winning_prize: seeded.winning_prize,
            });
        }

        let mut store = MemoryStore::with_teams(self.teams);
        for contest in contests {
            store.insert_contest(contest)?;
        }

        Ok(store)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::storage::{ContestRepository, TeamRepository};

    #[test]
    fn test_mock_seed_builds_store() {
        let store = Seed::mock().into_store().unwrap();

        assert_eq!(store.list_teams().unwrap().len(), 8);
        let contests = store.list_contests().unwrap();
        assert_eq!(contests.len(), 3);
        assert_eq!(contests[0].name, "Ultimate Crypto Showdown");
        assert_eq!(contests[1].team_b.name, "Blockchain Bandits ⛓️🏴‍☠️");
        assert_eq!(contests[2].winning_prize, 500_000);
        assert_eq!(store.next_id(), Some(4));
    }

    #[test]
    fn test_parse_seed_toml() {
        let toml = r#"
[[teams]]
id = "t1"
name = "Bulls"

[[teams]]
id = "t2"
name = "Bears"

[[contests]]
id = "10"
name = "Cup"
team_a = "t1"
team_b = "t2"
joining_fee = 100
winning_prize = 200
"#;
        let store = Seed::from_toml(toml).unwrap().into_store().unwrap();
        let cup = store.find_contest_by_name("Cup").unwrap().unwrap();

        assert_eq!(cup.id.as_str(), "10");
        assert_eq!(cup.team_a.name, "Bulls");
        assert_eq!(cup.team_b.name, "Bears");
        assert_eq!(store.next_id(), Some(11));
    }

    #[test]
    fn test_unknown_team_reference() {
        let toml = r#"
[[teams]]
id = "1"
name = "Bulls"

[[contests]]
id = "1"
name = "Cup"
team_a = "1"
team_b = "9"
"#;
        let err = Seed::from_toml(toml).unwrap().into_store().unwrap_err();
        assert!(matches!(err, Error::MissingReference(id) if id.as_str() == "9"));
    }

    #[test]
    fn test_duplicate_contest_name() {
        let mut seed = Seed::mock();
        seed.contests[1].name = seed.contests[0].name.clone();
        assert!(matches!(seed.into_store(), Err(Error::Seed(_))));
    }

    #[test]
    fn test_seeded_names_follow_form_rules() {
        let mut seed = Seed::mock();
        seed.contests[0].name = "Ab".to_string();
        let err = seed.into_store().unwrap_err();
        assert!(matches!(&err, Error::Seed(msg) if msg.contains("at least 3 characters")));

        let mut seed = Seed::mock();
        seed.contests[2].name = "x".repeat(101);
        assert!(matches!(seed.into_store(), Err(Error::Seed(_))));

        let mut seed = Seed::mock();
        seed.contests[1].name = "   ".to_string();
        assert!(matches!(seed.into_store(), Err(Error::Seed(_))));
    }

    #[test]
    fn test_mirrored_contest_needs_lenient_schema() {
        let mut seed = Seed::mock();
        seed.contests[0].team_b = TeamId::new("1");

        assert!(seed.clone().into_store().is_ok());
        let strict = ContestSchema::new().with_distinct_teams(true);
        assert!(matches!(seed.into_store_with(&strict), Err(Error::Seed(_))));
    }

    #[test]
    fn test_duplicate_team_id() {
        let mut seed = Seed::mock();
        seed.teams.push(Team::new("1", "Impostors"));
        assert!(matches!(seed.into_store(), Err(Error::Seed(_))));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[[teams]]\nid = \"1\"\nname = \"Solo\"").unwrap();

        let seed = Seed::load(file.path()).unwrap();
        assert_eq!(seed.teams.len(), 1);
        assert!(seed.contests.is_empty());
    }

    #[test]
    fn test_invalid_toml() {
        assert!(matches!(Seed::from_toml("teams = 3"), Err(Error::Toml(_))));
    }
}
