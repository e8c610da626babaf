//! Interactive views: one per route.
//!
//! Views gather input and delegate the actual work to the flow functions;
//! they are the only place the application prompts the user.

pub mod auth;
pub mod home;
pub mod movies;

use dialoguer::{Input, Password};

use reelhub_core::error::AppError;
use reelhub_core::result::AppResult;
use reelhub_session::guard::PathParams;

use crate::context::AppContext;
use crate::flows::Nav;
use crate::router::View;

/// Run the view selected by the router.
pub async fn render(ctx: &AppContext, view: View, params: PathParams) -> AppResult<Nav> {
    match view {
        View::Home => home::render(ctx),
        View::SignUp => auth::sign_up(ctx).await,
        View::SignIn => auth::sign_in(ctx).await,
        View::SignOut => auth::sign_out(ctx).await,
        View::ChangePassword => auth::change_password(ctx).await,
        View::MovieIndex => movies::index(ctx).await,
        View::MovieCreate => movies::create(ctx).await,
        View::MovieShow => movies::show(ctx, &params).await,
        View::MovieEdit => movies::edit(ctx, &params).await,
    }
}

/// Prompt for a required text field.
pub(crate) fn prompt_text(label: &str) -> AppResult<String> {
    Input::<String>::new()
        .with_prompt(label)
        .validate_with(|value: &String| {
            if value.trim().is_empty() {
                Err(format!("{label} is required"))
            } else {
                Ok(())
            }
        })
        .interact_text()
        .map_err(|e| AppError::internal(format!("Input error: {e}")))
}

/// Prompt for a required text field with a pre-filled default.
pub(crate) fn prompt_text_with_default(label: &str, default: String) -> AppResult<String> {
    Input::<String>::new()
        .with_prompt(label)
        .default(default)
        .interact_text()
        .map_err(|e| AppError::internal(format!("Input error: {e}")))
}

/// Prompt for a password without echoing it.
pub(crate) fn prompt_password(label: &str) -> AppResult<String> {
    Password::new()
        .with_prompt(label)
        .interact()
        .map_err(|e| AppError::internal(format!("Input error: {e}")))
}
