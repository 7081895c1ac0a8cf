//! In-memory contest store
//!
//! Holds the page's teams and contests for as long as the page lives.
//! Contest IDs come from a monotonic counter, so an ID is never handed out
//! twice, even after deletes.

use tracing::instrument;

use crate::error::{Error, Result};
use crate::invariants::{
    assert_contest_invariants, assert_unique_contest_ids, assert_unique_contest_names,
};
use crate::models::{Contest, ContestDraft, ContestId, Team, TeamId};

use super::traits::{ContestRepository, TeamRepository};

/// Volatile store backing the contest page
#[derive(Debug, Clone)]
pub struct MemoryStore {
    teams: Vec<Team>,
    contests: Vec<Contest>,
    /// `None` once every numeric id has been handed out
    next_id: Option<u64>,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    /// Empty store with no teams
    pub fn new() -> Self {
        Self::with_teams(Vec::new())
    }

    /// Empty contest collection over the given team reference data
    pub fn with_teams(teams: Vec<Team>) -> Self {
        Self {
            teams,
            contests: Vec::new(),
            next_id: Some(1),
        }
    }

    /// Insert an already identified contest (seeding).
    ///
    /// Numeric IDs advance the counter past themselves so later creates
    /// never collide with seeded records.
    pub fn insert_contest(&mut self, contest: Contest) -> Result<()> {
        if self.position(&contest.id).is_some() {
            return Err(Error::Seed(format!("duplicate contest id '{}'", contest.id)));
        }

        if let Some(n) = contest.id.as_number() {
            if self.next_id.is_some_and(|next| n >= next) {
                self.next_id = n.checked_add(1);
            }
        }

        assert_contest_invariants(&contest);
        self.contests.push(contest);
        Ok(())
    }

    /// The ID the next create will receive, unless it is already taken
    pub fn next_id(&self) -> Option<u64> {
        self.next_id
    }

    fn position(&self, id: &ContestId) -> Option<usize> {
        self.contests.iter().position(|c| &c.id == id)
    }

    fn issue_id(&mut self) -> Result<ContestId> {
        loop {
            let n = self.next_id.ok_or(Error::IdsExhausted)?;
            self.next_id = n.checked_add(1);

            let id = ContestId::from(n);
            if self.position(&id).is_none() {
                return Ok(id);
            }
        }
    }

    fn check_collection(&self) {
        assert_unique_contest_ids(&self.contests);
        assert_unique_contest_names(&self.contests);
    }
}

impl TeamRepository for MemoryStore {
    fn list_teams(&self) -> Result<Vec<Team>> {
        Ok(self.teams.clone())
    }

    fn find_team_by_id(&self, id: &TeamId) -> Result<Option<Team>> {
        Ok(self.teams.iter().find(|t| &t.id == id).cloned())
    }
}

impl ContestRepository for MemoryStore {
    fn list_contests(&self) -> Result<Vec<Contest>> {
        Ok(self.contests.clone())
    }

    fn find_contest_by_id(&self, id: &ContestId) -> Result<Option<Contest>> {
        Ok(self.position(id).map(|i| self.contests[i].clone()))
    }

    fn find_contest_by_name(&self, name: &str) -> Result<Option<Contest>> {
        Ok(self.contests.iter().find(|c| c.name == name).cloned())
    }

    #[instrument(skip(self, draft), fields(name = %draft.name))]
    fn create_contest(&mut self, draft: ContestDraft) -> Result<Contest> {
        let contest = Contest::from_draft(self.issue_id()?, draft);
        assert_contest_invariants(&contest);

        self.contests.push(contest.clone());
        self.check_collection();

        tracing::debug!(id = %contest.id, "Stored contest");
        Ok(contest)
    }

    #[instrument(skip(self, contest), fields(id = %contest.id))]
    fn update_contest(&mut self, contest: &Contest) -> Result<()> {
        let index = self
            .position(&contest.id)
            .ok_or_else(|| Error::NotFound(format!("contest '{}'", contest.id)))?;

        assert_contest_invariants(contest);
        self.contests[index] = contest.clone();
        self.check_collection();
        Ok(())
    }

    #[instrument(skip(self))]
    fn delete_contest(&mut self, id: &ContestId) -> Result<Option<Contest>> {
        Ok(self.position(id).map(|i| self.contests.remove(i)))
    }

    fn count_contests(&self) -> Result<usize> {
        Ok(self.contests.len())
    }
}
