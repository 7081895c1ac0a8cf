//! Contest page view model
//!
//! Binds the window's callbacks to the contest page controller. The window
//! only ever holds display strings; every decision goes through the page.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use std::time::Duration;

use cryptog_core::{
    format_number, ContestCard, ContestForm, ContestFormValues, ContestId, ContestList,
    DeleteConfirmation, Field, FieldErrors, Modal, PageAction, Team, Toast,
};
use slint::{ComponentHandle, ModelRc, SharedString, VecModel};

use crate::state::{AppState, Page};
use crate::ContestItem;
use crate::MainWindow;

pub fn setup_contest_bindings(window: &MainWindow, state: Rc<AppState>) {
    let toasts = Rc::new(RefCell::new(ToastQueue::default()));

    window.set_empty_message(ContestList::EMPTY_MESSAGE.into());
    window.set_confirm_title(DeleteConfirmation::TITLE.into());
    window.set_confirm_description(DeleteConfirmation::DESCRIPTION.into());
    window.set_confirm_cancel_label(DeleteConfirmation::CANCEL_LABEL.into());
    window.set_confirm_label(DeleteConfirmation::CONFIRM_LABEL.into());
    sync_page(window, &state.page.borrow());

    // Open create dialog
    let state_create = state.clone();
    let window_weak = window.as_weak();
    window.on_open_create(move || {
        let w = match window_weak.upgrade() {
            Some(w) => w,
            None => return,
        };

        let mut page = state_create.page.borrow_mut();
        page.dispatch(PageAction::OpenCreate);
        load_form(&w, &page);
        sync_page(&w, &page);
    });

    // Edit pressed on a card
    let state_edit = state.clone();
    let window_weak = window.as_weak();
    window.on_edit_contest(move |id| {
        let w = match window_weak.upgrade() {
            Some(w) => w,
            None => return,
        };

        let mut page = state_edit.page.borrow_mut();
        let contests = page.contests();
        let list = ContestList::new(&contests, format_number);
        let action = match list.edit(&ContestId::new(id.as_str())) {
            Some(action) => action,
            None => return,
        };

        page.dispatch(action.into());
        load_form(&w, &page);
        sync_page(&w, &page);
    });

    // Delete pressed on a card
    let state_delete = state.clone();
    let window_weak = window.as_weak();
    window.on_delete_contest(move |id| {
        let w = match window_weak.upgrade() {
            Some(w) => w,
            None => return,
        };

        let mut page = state_delete.page.borrow_mut();
        let contests = page.contests();
        let list = ContestList::new(&contests, format_number);
        let action = match list.delete(&ContestId::new(id.as_str())) {
            Some(action) => action,
            None => return,
        };

        page.dispatch(action.into());
        sync_page(&w, &page);
    });

    // Submit the create/edit form
    let state_submit = state.clone();
    let toasts_submit = toasts.clone();
    let window_weak = window.as_weak();
    window.on_submit_form(move || {
        let w = match window_weak.upgrade() {
            Some(w) => w,
            None => return,
        };

        let mut page = state_submit.page.borrow_mut();
        let mut form = match open_form(&page) {
            Some(form) => form,
            None => return,
        };

        form.set_values(read_form(&w, form.team_options()));
        match form.submit() {
            Some(event) => {
                show_errors(&w, &FieldErrors::new());
                page.dispatch(event.into());
            }
            None => show_errors(&w, form.errors()),
        }

        sync_page(&w, &page);
        show_toasts(&w, &mut page, &toasts_submit, state_submit.config.toast_seconds);
    });

    // Cancel either dialog
    let state_cancel = state.clone();
    let window_weak = window.as_weak();
    window.on_cancel_modal(move || {
        let w = match window_weak.upgrade() {
            Some(w) => w,
            None => return,
        };

        let mut page = state_cancel.page.borrow_mut();
        page.dispatch(PageAction::CloseModal);
        show_errors(&w, &FieldErrors::new());
        sync_page(&w, &page);
    });

    // Confirm deletion
    let state_confirm = state.clone();
    let toasts_confirm = toasts.clone();
    let window_weak = window.as_weak();
    window.on_confirm_delete(move || {
        let w = match window_weak.upgrade() {
            Some(w) => w,
            None => return,
        };

        let mut page = state_confirm.page.borrow_mut();
        page.dispatch(DeleteConfirmation::new().confirm().into());
        sync_page(&w, &page);
        show_toasts(&w, &mut page, &toasts_confirm, state_confirm.config.toast_seconds);
    });
}

/// Push the grid, team options and dialog state into the window
fn sync_page(window: &MainWindow, page: &Page) {
    let items: Vec<ContestItem> = page.cards().into_iter().map(contest_item).collect();
    window.set_contests(ModelRc::from(Rc::new(VecModel::from(items))));

    let team_names: Vec<SharedString> = page.teams().into_iter().map(|t| t.name.into()).collect();
    window.set_team_names(ModelRc::from(Rc::new(VecModel::from(team_names))));

    window.set_modal_kind(modal_kind(page.modal()).into());
}

/// Fill the dialog from the page's current form
fn load_form(window: &MainWindow, page: &Page) {
    let form = match open_form(page) {
        Some(form) => form,
        None => return,
    };

    let title = if form.is_editing() {
        "Edit Contest"
    } else {
        "Create New Contest"
    };
    window.set_form_title(title.into());
    window.set_submit_label(form.submit_label().into());

    let values = form.values();
    window.set_form_name(values.name.clone().into());
    window.set_form_team_a(team_index(form.team_options(), &values.team_a));
    window.set_form_team_b(team_index(form.team_options(), &values.team_b));
    window.set_form_joining_fee(values.joining_fee.clone().into());
    window.set_form_winning_prize(values.winning_prize.clone().into());

    show_errors(window, &FieldErrors::new());
}

fn open_form(page: &Page) -> Option<ContestForm> {
    match page.modal() {
        Modal::Creating => Some(page.create_form()),
        Modal::Editing(_) => page.edit_form(),
        Modal::Closed | Modal::Deleting(_) => None,
    }
}

fn read_form(window: &MainWindow, teams: &[Team]) -> ContestFormValues {
    ContestFormValues {
        name: window.get_form_name().to_string(),
        team_a: team_id_at(teams, window.get_form_team_a()),
        team_b: team_id_at(teams, window.get_form_team_b()),
        joining_fee: window.get_form_joining_fee().to_string(),
        winning_prize: window.get_form_winning_prize().to_string(),
    }
}

fn show_errors(window: &MainWindow, errors: &FieldErrors) {
    window.set_name_error(error_text(errors, Field::Name));
    window.set_team_a_error(error_text(errors, Field::TeamA));
    window.set_team_b_error(error_text(errors, Field::TeamB));
    window.set_joining_fee_error(error_text(errors, Field::JoiningFee));
    window.set_winning_prize_error(error_text(errors, Field::WinningPrize));
}

/// Toasts waiting for the toast slot, oldest first
#[derive(Debug, Default)]
struct ToastQueue {
    pending: VecDeque<Toast>,
    showing: bool,
}

impl ToastQueue {
    fn push_all(&mut self, toasts: impl IntoIterator<Item = Toast>) {
        self.pending.extend(toasts);
    }

    /// Take the next toast to display; marks the slot free when none is left
    fn advance(&mut self) -> Option<Toast> {
        let next = self.pending.pop_front();
        self.showing = next.is_some();
        next
    }
}

/// Move the page's new toasts into the queue and start showing them
fn show_toasts(
    window: &MainWindow,
    page: &mut Page,
    queue: &Rc<RefCell<ToastQueue>>,
    seconds: u64,
) {
    let idle = {
        let mut queue = queue.borrow_mut();
        queue.push_all(page.notifier_mut().drain());
        !queue.showing
    };

    if idle {
        show_next_toast(window.as_weak(), queue.clone(), seconds);
    }
}

/// Display the next queued toast, or hide the slot when the queue is empty
fn show_next_toast(
    window_weak: slint::Weak<MainWindow>,
    queue: Rc<RefCell<ToastQueue>>,
    seconds: u64,
) {
    let w = match window_weak.upgrade() {
        Some(w) => w,
        None => return,
    };

    let toast = match queue.borrow_mut().advance() {
        Some(toast) => toast,
        None => {
            w.set_toast_visible(false);
            return;
        }
    };

    w.set_toast_title(toast.title.as_str().into());
    w.set_toast_description(toast.description.as_str().into());
    w.set_toast_destructive(toast.is_destructive());
    w.set_toast_visible(true);

    slint::Timer::single_shot(Duration::from_secs(seconds), move || {
        show_next_toast(window_weak, queue, seconds);
    });
}

fn contest_item(card: ContestCard) -> ContestItem {
    ContestItem {
        id: card.id.to_string().into(),
        name: card.name.into(),
        team_a: card.team_a.into(),
        team_b: card.team_b.into(),
        joining_fee: card.joining_fee.into(),
        winning_prize: card.winning_prize.into(),
    }
}

fn modal_kind(modal: &Modal) -> &'static str {
    match modal {
        Modal::Closed => "closed",
        Modal::Creating => "create",
        Modal::Editing(_) => "edit",
        Modal::Deleting(_) => "delete",
    }
}

/// Selector index for a team id; -1 selects nothing
fn team_index(teams: &[Team], id: &str) -> i32 {
    teams
        .iter()
        .position(|t| t.id.as_str() == id)
        .and_then(|i| i32::try_from(i).ok())
        .unwrap_or(-1)
}

/// Team id behind a selector index; empty when nothing is selected
fn team_id_at(teams: &[Team], index: i32) -> String {
    usize::try_from(index)
        .ok()
        .and_then(|i| teams.get(i))
        .map(|t| t.id.to_string())
        .unwrap_or_default()
}

fn error_text(errors: &FieldErrors, field: Field) -> SharedString {
    errors.get(field).unwrap_or_default().into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use cryptog_core::{Contest, Seed, ToastLog};

    fn teams() -> Vec<Team> {
        vec![Team::new("1", "Bulls"), Team::new("2", "Bears")]
    }

    #[test]
    fn test_team_selector_mapping() {
        let teams = teams();
        assert_eq!(team_index(&teams, "2"), 1);
        assert_eq!(team_index(&teams, "9"), -1);
        assert_eq!(team_index(&teams, ""), -1);
        assert_eq!(team_id_at(&teams, 0), "1");
        assert_eq!(team_id_at(&teams, -1), "");
        assert_eq!(team_id_at(&teams, 5), "");
    }

    #[test]
    fn test_modal_kinds_match_window_states() {
        assert_eq!(modal_kind(&Modal::Closed), "closed");
        assert_eq!(modal_kind(&Modal::Creating), "create");
        assert_eq!(modal_kind(&Modal::Deleting(ContestId::from(1))), "delete");
    }

    #[test]
    fn test_contest_item_copies_display_strings() {
        let card = ContestCard {
            id: ContestId::from(3),
            name: "Cup".to_string(),
            team_a: "Bulls".to_string(),
            team_b: "Bears".to_string(),
            joining_fee: "1,000".to_string(),
            winning_prize: "2,000".to_string(),
        };
        let item = contest_item(card);
        assert_eq!(item.id.as_str(), "3");
        assert_eq!(item.winning_prize.as_str(), "2,000");
    }

    #[test]
    fn test_open_form_follows_modal() {
        let store = Seed::mock().into_store().unwrap();
        let mut page = Page::new(store, ToastLog::new());
        assert!(open_form(&page).is_none());

        page.dispatch(PageAction::OpenCreate);
        assert!(!open_form(&page).unwrap().is_editing());

        let first: Contest = page.contests().remove(0);
        page.open_edit(first);
        let form = open_form(&page).unwrap();
        assert!(form.is_editing());
        assert_eq!(form.values().name, "Ultimate Crypto Showdown");
    }

    #[test]
    fn test_toast_queue_keeps_every_toast_in_order() {
        let mut queue = ToastQueue::default();
        queue.push_all(vec![
            Toast::new("Contest created", "first"),
            Toast::destructive("Contest deleted", "second"),
        ]);
        queue.push_all(vec![Toast::new("Contest updated", "third")]);

        assert_eq!(queue.advance().unwrap().description, "first");
        assert!(queue.showing);
        assert_eq!(queue.advance().unwrap().description, "second");
        assert_eq!(queue.advance().unwrap().description, "third");
        assert!(queue.advance().is_none());
        assert!(!queue.showing);
    }

    #[test]
    fn test_toast_queue_waits_while_showing() {
        let mut queue = ToastQueue::default();
        queue.push_all(vec![Toast::new("a", "")]);
        queue.advance();

        queue.push_all(vec![Toast::new("b", "")]);
        assert!(queue.showing);
        assert_eq!(queue.pending.len(), 1);
    }

    #[test]
    fn test_error_text_is_empty_without_error() {
        let mut errors = FieldErrors::new();
        errors.add(Field::Name, "Contest name is required");
        assert_eq!(error_text(&errors, Field::Name).as_str(), "Contest name is required");
        assert_eq!(error_text(&errors, Field::TeamA).as_str(), "");
    }
}
