//! Route table and dispatch.
//!
//! Mirrors the navigation surface of the application: every path maps to
//! one view, and protected paths pass through the session guard before
//! the view runs.

use reelhub_core::result::AppResult;
use reelhub_session::guard::{self, GuardOutcome, RoutePattern};

use crate::context::AppContext;
use crate::flows::Nav;
use crate::{output, views};

/// The view a route renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Home,
    SignUp,
    SignIn,
    SignOut,
    ChangePassword,
    MovieIndex,
    MovieCreate,
    MovieShow,
    MovieEdit,
}

/// One entry of the route table.
#[derive(Debug, Clone)]
pub struct Route {
    /// Declared path pattern.
    pub pattern: RoutePattern,
    /// View rendered on a match.
    pub view: View,
    /// Whether the route requires a session identity.
    pub protected: bool,
}

impl Route {
    fn new(pattern: &str, view: View, protected: bool) -> Self {
        Self {
            pattern: RoutePattern::parse(pattern),
            view,
            protected,
        }
    }
}

/// The full route table.
pub fn routes() -> Vec<Route> {
    vec![
        Route::new("/", View::Home, false),
        Route::new("/sign-up", View::SignUp, false),
        Route::new("/sign-in", View::SignIn, false),
        Route::new("/sign-out", View::SignOut, true),
        Route::new("/change-password", View::ChangePassword, true),
        Route::new("/movies", View::MovieIndex, true),
        Route::new("/create-movie", View::MovieCreate, true),
        Route::new("/movies/:id", View::MovieShow, true),
        Route::new("/movies/:id/edit", View::MovieEdit, true),
    ]
}

/// Resolve a path to a view and run it.
///
/// Anonymous access to a protected path navigates to the public root
/// instead of rendering. Unknown paths render nothing.
pub async fn dispatch(ctx: &AppContext, path: &str) -> AppResult<Nav> {
    for route in routes() {
        if route.protected {
            let identity = ctx.session.current_identity();
            match guard::evaluate(identity.as_ref(), &route.pattern, path) {
                GuardOutcome::NotMatched => continue,
                GuardOutcome::Redirect(target) => {
                    tracing::debug!(path, "redirecting anonymous visitor");
                    return Ok(Nav::To(target.to_string()));
                }
                GuardOutcome::Render(params) => {
                    return views::render(ctx, route.view, params).await;
                }
            }
        } else if let Some(params) = route.pattern.matches(path) {
            return views::render(ctx, route.view, params).await;
        }
    }

    output::print_warning(&format!("No route matches {path}"));
    Ok(Nav::Stay)
}
