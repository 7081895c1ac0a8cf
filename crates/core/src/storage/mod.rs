//! Contest storage
//!
//! The page controller talks to storage only through the repository traits,
//! so the in-memory store can be swapped for a real backend.

mod memory;
mod traits;

pub use memory::MemoryStore;
pub use traits::{ContestRepository, Storage, TeamRepository};
