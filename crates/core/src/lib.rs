//! Cryptog Core Library
//!
//! Models, form schema, storage, and the page controller behind the
//! Cryptog contest admin dashboard.

pub mod components;
pub mod config;
pub mod error;
pub mod invariants;
pub mod models;
pub mod notify;
pub mod page;
pub mod schema;
pub mod seed;
pub mod storage;

pub use components::{
    format_number, ContestCard, ContestForm, ContestList, DeleteConfirmation, DeleteConfirmed,
    FormEvent, ListAction,
};
pub use config::{ConfigError, DashboardConfig};
pub use error::{Error, Result};
pub use models::*;
pub use notify::{Notifier, Toast, ToastLog, ToastVariant};
pub use page::{ContestPage, Modal, PageAction};
pub use schema::{ContestFormValues, ContestSchema, Field, FieldErrors};
pub use seed::Seed;
pub use storage::{ContestRepository, MemoryStore, Storage, TeamRepository};
