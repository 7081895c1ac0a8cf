//! Renderer-agnostic page components
//!
//! Each component holds what a view needs to draw it and turns user input
//! into events for the page controller. None of them touch contest state.

mod confirm;
mod form;
mod list;

pub use confirm::{DeleteConfirmation, DeleteConfirmed};
pub use form::{ContestForm, FormEvent};
pub use list::{format_number, ContestCard, ContestList, ListAction};
