//! Auth views: sign-up, sign-in, sign-out, change-password forms.

use reelhub_client::dto::request::{PasswordChangeParams, SignInParams, SignUpParams};
use reelhub_core::result::AppResult;

use crate::context::AppContext;
use crate::flows::{self, Nav};
use crate::views::{prompt_password, prompt_text};

/// Sign-up form.
pub async fn sign_up(ctx: &AppContext) -> AppResult<Nav> {
    println!("Sign Up");
    let mut form = SignUpParams {
        email: prompt_text("Email")?,
        password: prompt_password("Password")?,
        password_confirmation: prompt_password("Confirm password")?,
    };

    Ok(flows::auth::sign_up(ctx, &mut form).await)
}

/// Sign-in form.
pub async fn sign_in(ctx: &AppContext) -> AppResult<Nav> {
    println!("Sign In");
    let mut form = SignInParams {
        email: prompt_text("Email")?,
        password: prompt_password("Password")?,
    };

    Ok(flows::auth::sign_in(ctx, &mut form).await)
}

/// Sign-out has no form; visiting the route performs it.
pub async fn sign_out(ctx: &AppContext) -> AppResult<Nav> {
    Ok(flows::auth::sign_out(ctx).await)
}

/// Change-password form.
pub async fn change_password(ctx: &AppContext) -> AppResult<Nav> {
    println!("Change Password");
    let mut form = PasswordChangeParams {
        old_password: prompt_password("Current password")?,
        new_password: prompt_password("New password")?,
    };

    Ok(flows::auth::change_password(ctx, &mut form).await)
}
