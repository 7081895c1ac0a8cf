//! Developer guardrails and invariants
//!
//! Debug assertions for detecting impossible states during development.
//! These checks are compiled out in release builds.

use std::collections::HashSet;

use crate::models::Contest;

/// Validate that a contest is internally consistent
pub fn assert_contest_invariants(contest: &Contest) {
    // Name must not be empty
    debug_assert!(
        !contest.name.trim().is_empty(),
        "Contest {} has empty name",
        contest.id
    );

    // Teams are resolved records, never placeholders
    debug_assert!(
        !contest.team_a.id.is_blank() && !contest.team_b.id.is_blank(),
        "Contest {} has an unresolved team",
        contest.id
    );
}

/// Validate that no two contests share an ID
pub fn assert_unique_contest_ids(contests: &[Contest]) {
    let mut seen = HashSet::new();
    for contest in contests {
        let first = seen.insert(&contest.id);
        debug_assert!(
            first,
            "Contest id {} appears more than once",
            contest.id
        );
    }
}

/// Validate that no two contests share a name (case-sensitive)
pub fn assert_unique_contest_names(contests: &[Contest]) {
    let mut seen = HashSet::new();
    for contest in contests {
        let first = seen.insert(contest.name.as_str());
        debug_assert!(
            first,
            "Contest name {:?} appears more than once",
            contest.name
        );
    }
}
