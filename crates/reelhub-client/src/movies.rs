//! Gateway functions for the movie endpoints.
//!
//! All movie operations are authenticated.

use reelhub_core::result::AppResult;
use reelhub_core::types::MovieId;
use reelhub_entity::movie::{Movie, MovieParams};
use reelhub_entity::user::Identity;

use crate::client::ApiClient;
use crate::dto::request::MovieBody;
use crate::dto::response::{MovieEnvelope, MovieListEnvelope};
use crate::error;

impl ApiClient {
    /// GET /movies
    pub async fn movie_index(&self, identity: &Identity) -> AppResult<Vec<Movie>> {
        let request = Self::authorize(self.http().get(self.url("/movies")), identity);

        let response = self.execute(request, "movie-index").await?;
        let envelope: MovieListEnvelope = response
            .json()
            .await
            .map_err(|e| error::transport(e, "movie-index"))?;

        Ok(envelope.movies)
    }

    /// POST /movies
    ///
    /// Returns the created movie, including its server-assigned id.
    pub async fn movie_create(
        &self,
        params: &MovieParams,
        identity: &Identity,
    ) -> AppResult<Movie> {
        let request = Self::authorize(
            self.http()
                .post(self.url("/movies"))
                .json(&MovieBody { movie: params }),
            identity,
        );

        let response = self.execute(request, "movie-create").await?;
        let envelope: MovieEnvelope = response
            .json()
            .await
            .map_err(|e| error::transport(e, "movie-create"))?;

        Ok(envelope.movie)
    }

    /// GET /movies/{id}
    pub async fn movie_show(&self, id: &MovieId, identity: &Identity) -> AppResult<Movie> {
        let request = Self::authorize(
            self.http().get(self.url(&format!("/movies/{id}"))),
            identity,
        );

        let response = self.execute(request, "movie-show").await?;
        let envelope: MovieEnvelope = response
            .json()
            .await
            .map_err(|e| error::transport(e, "movie-show"))?;

        Ok(envelope.movie)
    }

    /// PATCH /movies/{id}
    ///
    /// The server replies 204 No Content; the body is not used.
    pub async fn movie_update(
        &self,
        id: &MovieId,
        params: &MovieParams,
        identity: &Identity,
    ) -> AppResult<()> {
        let request = Self::authorize(
            self.http()
                .patch(self.url(&format!("/movies/{id}")))
                .json(&MovieBody { movie: params }),
            identity,
        );

        self.execute(request, "movie-update").await?;
        Ok(())
    }

    /// DELETE /movies/{id}
    pub async fn movie_delete(&self, id: &MovieId, identity: &Identity) -> AppResult<()> {
        let request = Self::authorize(
            self.http().delete(self.url(&format!("/movies/{id}"))),
            identity,
        );

        self.execute(request, "movie-delete").await?;
        Ok(())
    }
}
