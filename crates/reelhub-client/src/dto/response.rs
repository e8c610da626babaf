//! Response envelopes decoded from the server.
//!
//! The server keys every response body by resource name (`user`, `movie`,
//! `movies`).

use serde::Deserialize;

use reelhub_entity::movie::Movie;
use reelhub_entity::user::Identity;

/// `{"user": {...}}` envelope returned by sign-in.
#[derive(Debug, Deserialize)]
pub(crate) struct UserEnvelope {
    pub user: Identity,
}

/// `{"movie": {...}}` envelope returned by show and create.
#[derive(Debug, Deserialize)]
pub(crate) struct MovieEnvelope {
    pub movie: Movie,
}

/// `{"movies": [...]}` envelope returned by the index.
#[derive(Debug, Deserialize)]
pub(crate) struct MovieListEnvelope {
    pub movies: Vec<Movie>,
}
