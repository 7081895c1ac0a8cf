//! Error types for Cryptog Core

use thiserror::Error;

use crate::models::TeamId;
use crate::schema::FieldErrors;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Contest already exists: {0}")]
    DuplicateName(String),

    #[error("Team not found: {0}")]
    MissingReference(TeamId),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation failed: {0}")]
    Validation(FieldErrors),

    #[error("No contest ids left to issue")]
    IdsExhausted,

    #[error("Seed error: {0}")]
    Seed(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
