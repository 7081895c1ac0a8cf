//! Contest grid

use crate::models::{Contest, ContestId};

/// One rendered contest card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContestCard {
    pub id: ContestId,
    pub name: String,
    pub team_a: String,
    pub team_b: String,
    pub joining_fee: String,
    pub winning_prize: String,
}

/// User action on a card
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListAction {
    Edit(Contest),
    Delete(ContestId),
}

/// Presentational view over the page's contests
pub struct ContestList<'a> {
    contests: &'a [Contest],
    format_number: fn(u64) -> String,
}

impl<'a> ContestList<'a> {
    pub const EMPTY_MESSAGE: &'static str = "No contests yet. Create one to get started.";

    pub fn new(contests: &'a [Contest], format_number: fn(u64) -> String) -> Self {
        Self {
            contests,
            format_number,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.contests.is_empty()
    }

    pub fn cards(&self) -> Vec<ContestCard> {
        self.contests
            .iter()
            .map(|c| ContestCard {
                id: c.id.clone(),
                name: c.name.clone(),
                team_a: c.team_a.name.clone(),
                team_b: c.team_b.name.clone(),
                joining_fee: (self.format_number)(c.joining_fee),
                winning_prize: (self.format_number)(c.winning_prize),
            })
            .collect()
    }

    /// Edit pressed on the card with this id
    pub fn edit(&self, id: &ContestId) -> Option<ListAction> {
        self.contests
            .iter()
            .find(|c| &c.id == id)
            .map(|c| ListAction::Edit(c.clone()))
    }

    /// Delete pressed on the card with this id
    pub fn delete(&self, id: &ContestId) -> Option<ListAction> {
        self.contests
            .iter()
            .any(|c| &c.id == id)
            .then(|| ListAction::Delete(id.clone()))
    }
}

/// Group digits in threes with commas: `1000000` -> `"1,000,000"`
pub fn format_number(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Team;

    fn contest(id: u64, name: &str) -> Contest {
        Contest {
            id: ContestId::from(id),
            name: name.to_string(),
            team_a: Team::new("1", "Bulls"),
            team_b: Team::new("2", "Bears"),
            joining_fee: 2500,
            winning_prize: 1_000_000,
        }
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1000), "1,000");
        assert_eq!(format_number(200000), "200,000");
        assert_eq!(format_number(1234567), "1,234,567");
    }

    #[test]
    fn test_cards_format_money_and_teams() {
        let contests = vec![contest(1, "Cup")];
        let cards = ContestList::new(&contests, format_number).cards();

        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].team_a, "Bulls");
        assert_eq!(cards[0].team_b, "Bears");
        assert_eq!(cards[0].joining_fee, "2,500");
        assert_eq!(cards[0].winning_prize, "1,000,000");
    }

    #[test]
    fn test_actions_only_for_listed_contests() {
        let contests = vec![contest(1, "Cup")];
        let list = ContestList::new(&contests, format_number);

        assert_eq!(
            list.edit(&ContestId::from(1)),
            Some(ListAction::Edit(contests[0].clone()))
        );
        assert_eq!(
            list.delete(&ContestId::from(1)),
            Some(ListAction::Delete(ContestId::from(1)))
        );
        assert!(list.edit(&ContestId::from(2)).is_none());
        assert!(list.delete(&ContestId::from(2)).is_none());
    }

    #[test]
    fn test_empty_list() {
        let list = ContestList::new(&[], format_number);
        assert!(list.is_empty());
        assert!(list.cards().is_empty());
    }
}
