//! Application state management

use std::cell::RefCell;

use cryptog_core::{
    ContestPage, ContestRepository, DashboardConfig, MemoryStore, Result, ToastLog,
};

pub type Page = ContestPage<MemoryStore, ToastLog>;

/// Main application state.
///
/// Everything runs on the UI thread, so the page sits in a `RefCell`.
pub struct AppState {
    pub config: DashboardConfig,
    pub page: RefCell<Page>,
}

impl AppState {
    pub fn new(config: DashboardConfig) -> Result<Self> {
        let store = config.seed()?.into_store_with(&config.schema())?;
        let contests = store.count_contests()?;
        let page = ContestPage::new(store, ToastLog::new()).with_schema(config.schema());

        tracing::info!(
            contests,
            teams = page.teams().len(),
            reject_same_team = config.reject_same_team,
            "Contest page mounted"
        );

        Ok(Self {
            config,
            page: RefCell::new(page),
        })
    }
}
