//! # reelhub-entity
//!
//! Domain entity models for ReelHub. Every struct in this crate represents
//! either a resource decoded from the movie API wire format or a client-side
//! value object. All entities derive `Debug`, `Clone`, `Serialize`, and
//! `Deserialize`.

pub mod alert;
pub mod movie;
pub mod user;
