//! View model bindings for Slint UI

mod contests;

use std::rc::Rc;

use crate::state::AppState;
use crate::MainWindow;

pub fn setup_bindings(window: &MainWindow, state: Rc<AppState>) {
    contests::setup_contest_bindings(window, state);
}
