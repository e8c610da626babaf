//! The landing view: greeting plus the navigation options for the
//! current auth state.

use reelhub_core::result::AppResult;

use crate::context::AppContext;
use crate::flows::Nav;

/// Render the landing screen.
pub fn render(ctx: &AppContext) -> AppResult<Nav> {
    println!();
    println!("ReelHub Movies");

    match ctx.session.current_identity() {
        Some(identity) => {
            println!("Welcome, {}", identity.email);
            println!("  /movies            list your movies");
            println!("  /create-movie      add a movie");
            println!("  /change-password   change your password");
            println!("  /sign-out          sign out");
        }
        None => {
            println!("  /sign-up           create an account");
            println!("  /sign-in           sign in");
        }
    }

    Ok(Nav::Stay)
}
