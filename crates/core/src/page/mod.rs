//! Contest page controller
//!
//! Owns the contest collection (through a [`Storage`]) for as long as the
//! page is mounted and mediates every mutation. Business rules live here:
//! names are unique, teams must resolve, and each outcome is reported as a
//! toast. No error escapes to the caller; failed operations return `None`.

mod modal;

pub use modal::{Modal, PageAction};

use tracing::instrument;

use crate::components::{
    format_number, ContestCard, ContestForm, ContestList, FormEvent, ListAction,
};
use crate::error::{Error, Result};
use crate::models::{Contest, ContestDraft, ContestId, ContestInput, Team};
use crate::notify::{Notifier, Toast};
use crate::schema::{ContestFormValues, ContestSchema};
use crate::storage::Storage;

/// Stateful coordinator for the contest page
pub struct ContestPage<S, N> {
    store: S,
    notifier: N,
    schema: ContestSchema,
    modal: Modal,
}

impl<S: Storage, N: Notifier> ContestPage<S, N> {
    pub fn new(store: S, notifier: N) -> Self {
        Self {
            store,
            notifier,
            schema: ContestSchema::new(),
            modal: Modal::Closed,
        }
    }

    pub fn with_schema(mut self, schema: ContestSchema) -> Self {
        self.schema = schema;
        self
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    pub fn modal(&self) -> &Modal {
        &self.modal
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn notifier_mut(&mut self) -> &mut N {
        &mut self.notifier
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn contests(&self) -> Vec<Contest> {
        self.store.list_contests().unwrap_or_else(|e| {
            tracing::error!(error = %e, "Failed to list contests");
            Vec::new()
        })
    }

    pub fn teams(&self) -> Vec<Team> {
        self.store.list_teams().unwrap_or_else(|e| {
            tracing::error!(error = %e, "Failed to list teams");
            Vec::new()
        })
    }

    pub fn find_contest(&self, id: &ContestId) -> Option<Contest> {
        self.store.find_contest_by_id(id).unwrap_or_else(|e| {
            tracing::error!(error = %e, id = %id, "Failed to look up contest");
            None
        })
    }

    /// Cards for the contest grid
    pub fn cards(&self) -> Vec<ContestCard> {
        let contests = self.contests();
        ContestList::new(&contests, format_number).cards()
    }

    /// Blank form for the create dialog
    pub fn create_form(&self) -> ContestForm {
        ContestForm::new(self.schema.clone(), self.teams())
    }

    /// Form prefilled from the contest being edited
    pub fn edit_form(&self) -> Option<ContestForm> {
        match &self.modal {
            Modal::Editing(target) => Some(
                ContestForm::new(self.schema.clone(), self.teams())
                    .with_defaults(ContestFormValues::from(&target.to_input())),
            ),
            _ => None,
        }
    }

    // ------------------------------------------------------------------
    // Modal transitions
    // ------------------------------------------------------------------

    pub fn open_create(&mut self) {
        self.modal = Modal::Creating;
    }

    pub fn open_edit(&mut self, contest: Contest) {
        self.modal = Modal::Editing(contest);
    }

    pub fn open_delete(&mut self, id: ContestId) {
        self.modal = Modal::Deleting(id);
    }

    /// Cancel whatever dialog is open
    pub fn close_modal(&mut self) {
        self.modal = Modal::Closed;
    }

    /// Route a component event to the matching operation
    pub fn dispatch(&mut self, action: PageAction) {
        match action {
            PageAction::OpenCreate => self.open_create(),
            PageAction::List(ListAction::Edit(contest)) => self.open_edit(contest),
            PageAction::List(ListAction::Delete(id)) => self.open_delete(id),
            PageAction::Form(FormEvent::Cancel) | PageAction::CloseModal => self.close_modal(),
            PageAction::Form(FormEvent::Submit(input)) => match self.modal {
                Modal::Creating => {
                    self.create_contest(input);
                }
                Modal::Editing(_) => {
                    self.edit_contest(input);
                }
                _ => tracing::debug!("Form submitted with no form open"),
            },
            PageAction::ConfirmDelete => {
                self.confirm_delete();
            }
        }
    }

    // ------------------------------------------------------------------
    // Mutations
    // ------------------------------------------------------------------

    /// Create a contest from form output
    #[instrument(skip(self, input), fields(name = %input.name))]
    pub fn create_contest(&mut self, input: ContestInput) -> Option<ContestId> {
        match self.try_create(input) {
            Ok(contest) => {
                if self.modal == Modal::Creating {
                    self.modal = Modal::Closed;
                }
                tracing::info!(id = %contest.id, "Contest created");
                self.notifier.notify(Toast::new(
                    "Contest created",
                    format!("{} has been created successfully.", contest.name),
                ));
                Some(contest.id)
            }
            Err(e) => {
                self.report(e);
                None
            }
        }
    }

    /// Apply form output to the contest open in the edit dialog.
    ///
    /// Does nothing when no contest is being edited.
    pub fn edit_contest(&mut self, input: ContestInput) -> Option<ContestId> {
        let target = match &self.modal {
            Modal::Editing(target) => target.id.clone(),
            _ => {
                tracing::debug!("Edit submitted with no contest being edited");
                return None;
            }
        };

        let _span = tracing::info_span!("edit_contest", id = %target).entered();
        match self.try_edit(&target, input) {
            Ok(contest) => {
                self.modal = Modal::Closed;
                tracing::info!("Contest updated");
                self.notifier.notify(Toast::new(
                    "Contest updated",
                    format!("{} has been updated successfully.", contest.name),
                ));
                Some(contest.id)
            }
            Err(e) => {
                if matches!(e, Error::NotFound(_)) {
                    self.modal = Modal::Closed;
                }
                self.report(e);
                None
            }
        }
    }

    /// Remove a contest by ID.
    ///
    /// Removal is unconditional; a missing ID changes nothing but is still
    /// reported as deleted, without a name.
    #[instrument(skip(self))]
    pub fn delete_contest(&mut self, id: &ContestId) -> Option<Contest> {
        let removed = match self.store.delete_contest(id) {
            Ok(removed) => removed,
            Err(e) => {
                self.report(e);
                return None;
            }
        };

        if matches!(self.modal, Modal::Deleting(_)) {
            self.modal = Modal::Closed;
        }

        let description = match &removed {
            Some(contest) => {
                tracing::info!(name = %contest.name, "Contest deleted");
                format!("{} has been deleted.", contest.name)
            }
            None => {
                tracing::debug!("Contest already gone");
                "The contest has been deleted.".to_string()
            }
        };
        self.notifier
            .notify(Toast::destructive("Contest deleted", description));

        removed
    }

    /// Delete the contest pending in the delete dialog, if any
    pub fn confirm_delete(&mut self) -> Option<Contest> {
        match &self.modal {
            Modal::Deleting(id) => {
                let id = id.clone();
                self.delete_contest(&id)
            }
            _ => {
                tracing::debug!("Delete confirmed with no contest pending");
                None
            }
        }
    }

    fn try_create(&mut self, input: ContestInput) -> Result<Contest> {
        let input = self.revalidate(input)?;
        self.ensure_unique_name(&input.name, None)?;
        let draft = self.resolve_teams(input)?;
        self.store.create_contest(draft)
    }

    fn try_edit(&mut self, id: &ContestId, input: ContestInput) -> Result<Contest> {
        let mut contest = self
            .store
            .find_contest_by_id(id)?
            .ok_or_else(|| Error::NotFound(format!("contest '{}'", id)))?;

        let input = self.revalidate(input)?;
        self.ensure_unique_name(&input.name, Some(id))?;
        let draft = self.resolve_teams(input)?;

        contest.apply(draft);
        self.store.update_contest(&contest)?;
        Ok(contest)
    }

    /// Inputs built outside the form still go through the schema
    fn revalidate(&self, input: ContestInput) -> Result<ContestInput> {
        self.schema
            .validate(&ContestFormValues::from(&input))
            .map_err(Error::Validation)
    }

    fn ensure_unique_name(&self, name: &str, exclude: Option<&ContestId>) -> Result<()> {
        match self.store.find_contest_by_name(name)? {
            Some(existing) if Some(&existing.id) != exclude => {
                Err(Error::DuplicateName(name.to_string()))
            }
            _ => Ok(()),
        }
    }

    fn resolve_teams(&self, input: ContestInput) -> Result<ContestDraft> {
        let team_a = self
            .store
            .find_team_by_id(&input.team_a)?
            .ok_or_else(|| Error::MissingReference(input.team_a.clone()))?;
        let team_b = self
            .store
            .find_team_by_id(&input.team_b)?
            .ok_or_else(|| Error::MissingReference(input.team_b.clone()))?;

        Ok(ContestDraft::resolve(input, team_a, team_b))
    }

    /// Turn a failed operation into a toast
    fn report(&mut self, err: Error) {
        tracing::warn!(error = %err, "Contest operation rejected");

        let toast = match &err {
            Error::DuplicateName(_) => Toast::destructive(
                "Contest already exists",
                "Please choose a different contest name.",
            ),
            Error::MissingReference(_) => {
                Toast::destructive("Team selection error", "Both teams must be selected.")
            }
            Error::NotFound(_) => {
                Toast::destructive("Contest not found", "It may have been deleted already.")
            }
            Error::Validation(errors) => Toast::destructive("Invalid contest", errors.to_string()),
            other => {
                tracing::error!(error = %other, "Unexpected storage failure");
                Toast::destructive("Something went wrong", other.to_string())
            }
        };

        self.notifier.notify(toast);
    }
}
