//! Delete confirmation prompt
//!
//! Only the confirm side lives here. Cancelling is handled by whatever dialog
//! shell hosts the prompt, which simply closes the page's modal.

/// Confirm signal emitted by [`DeleteConfirmation`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteConfirmed;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DeleteConfirmation;

impl DeleteConfirmation {
    pub const TITLE: &'static str = "Are you sure?";
    pub const DESCRIPTION: &'static str =
        "This action cannot be undone. This will permanently delete the contest.";
    pub const CANCEL_LABEL: &'static str = "Cancel";
    pub const CONFIRM_LABEL: &'static str = "Delete";

    pub fn new() -> Self {
        Self
    }

    pub fn confirm(&self) -> DeleteConfirmed {
        DeleteConfirmed
    }
}
