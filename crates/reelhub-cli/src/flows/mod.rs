//! Flow functions joining the API client, the session store, and the
//! alert queue.
//!
//! A flow performs one user action end to end: it issues the API call,
//! applies the resulting state changes in declared order (identity before
//! anything that renders from it), and converts any API failure into
//! exactly one danger alert. Flows never propagate API errors to the
//! shell.

pub mod auth;
pub mod messages;
pub mod movies;

/// Where the shell should navigate after a flow completes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Nav {
    /// Navigate to the given path and render it.
    To(String),
    /// Remain on the current path.
    Stay,
}

impl Nav {
    /// Navigate to the public landing path.
    pub fn home() -> Self {
        Self::To(reelhub_session::guard::PUBLIC_ROOT.to_string())
    }
}
