//! # reelhub-session
//!
//! Client-side session state for ReelHub: the single-identity
//! [`store::SessionStore`], the auto-expiring [`alerts::AlertQueue`], and
//! the pure route [`guard`].
//!
//! Both containers publish immutable snapshots through `tokio::sync::watch`
//! channels, so every observer sees every update and no consumer can
//! mutate held state in place.

pub mod alerts;
pub mod guard;
pub mod store;

pub use alerts::AlertQueue;
pub use store::SessionStore;
