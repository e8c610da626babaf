//! Shared typed identifiers.

pub mod id;

pub use id::{AlertId, MovieId, UserId};
