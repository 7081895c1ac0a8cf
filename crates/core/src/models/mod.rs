//! Data models for Cryptog contests

mod contest;
mod team;

pub use contest::*;
pub use team::*;
