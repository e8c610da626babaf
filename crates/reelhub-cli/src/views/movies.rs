//! Movie views: listing, detail, create and edit forms.

use dialoguer::Confirm;
use serde::Serialize;
use tabled::Tabled;

use reelhub_core::error::AppError;
use reelhub_core::result::AppResult;
use reelhub_core::types::MovieId;
use reelhub_entity::movie::{Movie, MovieParams};
use reelhub_session::guard::PathParams;

use crate::context::AppContext;
use crate::flows::{self, Nav};
use crate::output;
use crate::views::{prompt_text, prompt_text_with_default};

/// Movie listing row
#[derive(Debug, Serialize, Tabled)]
struct MovieRow {
    /// Movie ID
    id: String,
    /// Title
    title: String,
    /// Director
    director: String,
}

impl From<&Movie> for MovieRow {
    fn from(movie: &Movie) -> Self {
        Self {
            id: movie.id.to_string(),
            title: movie.title.clone(),
            director: movie.director.clone(),
        }
    }
}

fn movie_id(params: &PathParams) -> AppResult<MovieId> {
    params
        .get("id")
        .map(MovieId::from)
        .ok_or_else(|| AppError::internal("Route param `id` missing"))
}

/// List all movies.
pub async fn index(ctx: &AppContext) -> AppResult<Nav> {
    println!("Movies");
    if let Some(movies) = flows::movies::index(ctx).await {
        let rows: Vec<MovieRow> = movies.iter().map(MovieRow::from).collect();
        output::print_list(&rows, ctx.format);
    }

    Ok(Nav::Stay)
}

/// Show one movie, with delete as an affordance.
pub async fn show(ctx: &AppContext, params: &PathParams) -> AppResult<Nav> {
    let id = movie_id(params)?;
    let Some(movie) = flows::movies::show(ctx, &id).await else {
        return Ok(Nav::Stay);
    };

    println!("{}", movie.title);
    output::print_kv("Director", &movie.director);
    output::print_kv("Id", movie.id.as_str());
    println!("  (edit with /movies/{}/edit)", movie.id);

    let delete = Confirm::new()
        .with_prompt("Delete this movie?")
        .default(false)
        .interact()
        .map_err(|e| AppError::internal(format!("Input error: {e}")))?;

    if delete {
        return Ok(flows::movies::destroy(ctx, &id).await);
    }

    Ok(Nav::Stay)
}

/// Create-movie form.
pub async fn create(ctx: &AppContext) -> AppResult<Nav> {
    println!("Create Movie");
    let params = MovieParams {
        title: prompt_text("Title")?,
        director: prompt_text("Director")?,
    };

    Ok(flows::movies::create(ctx, &params).await)
}

/// Edit-movie form, pre-filled from the current record.
pub async fn edit(ctx: &AppContext, params: &PathParams) -> AppResult<Nav> {
    let id = movie_id(params)?;
    println!("Edit Movie");
    let Some(current) = flows::movies::show(ctx, &id).await else {
        return Ok(Nav::Stay);
    };

    let updated = MovieParams {
        title: prompt_text_with_default("Title", current.title)?,
        director: prompt_text_with_default("Director", current.director)?,
    };

    Ok(flows::movies::update(ctx, &id, &updated).await)
}
