//! Modal state and page actions

use crate::components::{DeleteConfirmed, FormEvent, ListAction};
use crate::models::{Contest, ContestId};

/// Which dialog is open, and on what.
///
/// A single variant means at most one dialog can be open at a time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Modal {
    #[default]
    Closed,
    Creating,
    Editing(Contest),
    Deleting(ContestId),
}

impl Modal {
    pub fn is_open(&self) -> bool {
        !matches!(self, Modal::Closed)
    }
}

/// Everything the page's components can ask the controller to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageAction {
    OpenCreate,
    List(ListAction),
    Form(FormEvent),
    ConfirmDelete,
    CloseModal,
}

impl From<ListAction> for PageAction {
    fn from(action: ListAction) -> Self {
        PageAction::List(action)
    }
}

impl From<FormEvent> for PageAction {
    fn from(event: FormEvent) -> Self {
        PageAction::Form(event)
    }
}

impl From<DeleteConfirmed> for PageAction {
    fn from(_: DeleteConfirmed) -> Self {
        PageAction::ConfirmDelete
    }
}
