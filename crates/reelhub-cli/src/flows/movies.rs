//! Movie flows: index, show, create, update, delete.

use validator::Validate;

use reelhub_core::types::MovieId;
use reelhub_entity::alert::Severity;
use reelhub_entity::movie::{Movie, MovieParams};
use reelhub_entity::user::Identity;

use crate::context::AppContext;
use crate::flows::Nav;

/// Read the identity these flows require.
///
/// The route guard keeps anonymous users out of the movie views, so this
/// only returns `None` when the session was cleared mid-flow.
fn identity(ctx: &AppContext) -> Option<Identity> {
    ctx.session.current_identity()
}

/// Fetch all movies.
///
/// Returns `None` on failure, after enqueueing the danger alert.
pub async fn index(ctx: &AppContext) -> Option<Vec<Movie>> {
    let identity = identity(ctx)?;

    match ctx.client.movie_index(&identity).await {
        Ok(movies) => {
            ctx.alerts.enqueue(
                "Successfully Got All Movies",
                "Movies are now being shown.",
                Severity::Success,
            );
            Some(movies)
        }
        Err(err) => {
            ctx.alerts.enqueue(
                "Failed To Get All Movies",
                format!("Couldn't get movies due to error: {}", err.message),
                Severity::Danger,
            );
            None
        }
    }
}

/// Fetch a single movie.
pub async fn show(ctx: &AppContext, id: &MovieId) -> Option<Movie> {
    let identity = identity(ctx)?;

    match ctx.client.movie_show(id, &identity).await {
        Ok(movie) => {
            ctx.alerts.enqueue(
                "Showing Movie Successfully",
                "The movie is now displayed.",
                Severity::Success,
            );
            Some(movie)
        }
        Err(err) => {
            ctx.alerts.enqueue(
                "Showing Movie Failed",
                format!("Failed to show movie with error: {}", err.message),
                Severity::Danger,
            );
            None
        }
    }
}

/// Create a movie and navigate to its detail view.
pub async fn create(ctx: &AppContext, params: &MovieParams) -> Nav {
    let Some(identity) = identity(ctx) else {
        return Nav::home();
    };

    if let Err(errors) = params.validate() {
        ctx.alerts
            .enqueue("Failed to Create Movie", errors.to_string(), Severity::Danger);
        return Nav::Stay;
    }

    match ctx.client.movie_create(params, &identity).await {
        Ok(movie) => {
            ctx.alerts.enqueue(
                "Created Movie Successfully",
                format!(
                    "Movie has been created successfully. Now viewing {}.",
                    movie.title
                ),
                Severity::Success,
            );
            Nav::To(format!("/movies/{}", movie.id))
        }
        Err(err) => {
            ctx.alerts.enqueue(
                "Failed to Create Movie",
                format!("Could not create movie with error: {}", err.message),
                Severity::Danger,
            );
            Nav::Stay
        }
    }
}

/// Update a movie and navigate back to its detail view.
pub async fn update(ctx: &AppContext, id: &MovieId, params: &MovieParams) -> Nav {
    let Some(identity) = identity(ctx) else {
        return Nav::home();
    };

    if let Err(errors) = params.validate() {
        ctx.alerts
            .enqueue("Updating Movie Failed", errors.to_string(), Severity::Danger);
        return Nav::Stay;
    }

    match ctx.client.movie_update(id, params, &identity).await {
        Ok(()) => {
            ctx.alerts.enqueue(
                "Updated Movie Successfully",
                "Movie has been updated.",
                Severity::Success,
            );
            Nav::To(format!("/movies/{id}"))
        }
        Err(err) => {
            ctx.alerts.enqueue(
                "Updating Movie Failed",
                format!("Movie was not updated due to error: {}", err.message),
                Severity::Danger,
            );
            Nav::Stay
        }
    }
}

/// Delete a movie and navigate to the index.
pub async fn destroy(ctx: &AppContext, id: &MovieId) -> Nav {
    let Some(identity) = identity(ctx) else {
        return Nav::home();
    };

    match ctx.client.movie_delete(id, &identity).await {
        Ok(()) => {
            ctx.alerts.enqueue(
                "Deleted Movie Successfully!",
                "Movie deleted!",
                Severity::Success,
            );
            Nav::To("/movies".to_string())
        }
        Err(err) => {
            ctx.alerts.enqueue(
                "Deleting Movie Failed",
                format!("Failed with error: {}", err.message),
                Severity::Danger,
            );
            Nav::Stay
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    use reelhub_client::ApiClient;
    use reelhub_core::config::AppConfig;
    use reelhub_core::config::api::ApiConfig;
    use reelhub_session::{AlertQueue, SessionStore};

    use crate::output::OutputFormat;
    use std::sync::Arc;

    fn test_ctx(base_url: String) -> AppContext {
        let config = AppConfig {
            api: ApiConfig { base_url },
            ..AppConfig::default()
        };
        let ctx = AppContext {
            client: ApiClient::new(&config.api).expect("client"),
            session: SessionStore::new(),
            alerts: AlertQueue::new(config.alerts.clone()),
            config: Arc::new(config),
            format: OutputFormat::Table,
        };
        ctx.session.set_identity(Identity {
            id: "u1".into(),
            email: "a@b.com".to_string(),
            token: "tok".to_string(),
        });
        ctx
    }

    #[tokio::test]
    async fn create_success_navigates_to_new_movie() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/movies");
            then.status(201)
                .header("content-type", "application/json")
                .json_body(serde_json::json!({
                    "movie": {"_id": "m9", "title": "X", "director": "Y"}
                }));
        });

        let ctx = test_ctx(server.base_url());
        let params = MovieParams {
            title: "X".to_string(),
            director: "Y".to_string(),
        };
        let nav = create(&ctx, &params).await;

        assert_eq!(nav, Nav::To("/movies/m9".to_string()));
        assert_eq!(ctx.alerts.alerts()[0].severity, Severity::Success);
    }

    #[tokio::test]
    async fn index_failure_enqueues_danger_alert() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/movies");
            then.status(500);
        });

        let ctx = test_ctx(server.base_url());
        let movies = index(&ctx).await;

        assert!(movies.is_none());
        let alerts = ctx.alerts.alerts();
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].severity, Severity::Danger);
        assert_eq!(alerts[0].heading, "Failed To Get All Movies");
    }

    #[tokio::test]
    async fn destroy_success_navigates_to_index() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(DELETE).path("/movies/m1");
            then.status(204);
        });

        let ctx = test_ctx(server.base_url());
        let nav = destroy(&ctx, &MovieId::from("m1")).await;

        assert_eq!(nav, Nav::To("/movies".to_string()));
    }

    #[tokio::test]
    async fn empty_params_never_reach_the_api() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST).path("/movies");
            then.status(201);
        });

        let ctx = test_ctx(server.base_url());
        let nav = create(&ctx, &MovieParams::default()).await;

        assert_eq!(nav, Nav::Stay);
        mock.assert_calls(0);
    }
}
