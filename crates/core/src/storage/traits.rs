//! Storage repository traits
//!
//! These traits define the storage interface, allowing for different
//! implementations (in-memory today, a query service later).

use crate::error::Result;
use crate::models::{Contest, ContestDraft, ContestId, Team, TeamId};

/// Team reference data (read-only from the contest page)
pub trait TeamRepository {
    /// List all teams in display order
    fn list_teams(&self) -> Result<Vec<Team>>;

    /// Find team by ID
    fn find_team_by_id(&self, id: &TeamId) -> Result<Option<Team>>;
}

/// Contest repository operations
pub trait ContestRepository {
    /// List contests in insertion order
    fn list_contests(&self) -> Result<Vec<Contest>>;

    /// Find contest by ID
    fn find_contest_by_id(&self, id: &ContestId) -> Result<Option<Contest>>;

    /// Find contest by exact (case-sensitive) name
    fn find_contest_by_name(&self, name: &str) -> Result<Option<Contest>>;

    /// Store a new contest under a freshly issued, never reused ID
    fn create_contest(&mut self, draft: ContestDraft) -> Result<Contest>;

    /// Replace a stored contest matched by ID
    fn update_contest(&mut self, contest: &Contest) -> Result<()>;

    /// Remove a contest, returning it if it existed
    fn delete_contest(&mut self, id: &ContestId) -> Result<Option<Contest>>;

    /// Number of stored contests
    fn count_contests(&self) -> Result<usize>;
}

/// Combined storage interface
pub trait Storage: TeamRepository + ContestRepository {}

// Blanket implementation: any type implementing both traits implements Storage
impl<T> Storage for T where T: TeamRepository + ContestRepository {}
