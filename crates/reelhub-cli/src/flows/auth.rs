//! Auth flows: sign-up, sign-in, sign-out, change-password.

use validator::Validate;

use reelhub_client::dto::request::{PasswordChangeParams, SignInParams, SignUpParams};
use reelhub_entity::alert::Severity;

use crate::context::AppContext;
use crate::flows::{Nav, messages};

/// Register a new account, then sign in with the same credentials.
///
/// On failure the form is reset to its initial (empty) values and the user
/// stays where they are.
pub async fn sign_up(ctx: &AppContext, form: &mut SignUpParams) -> Nav {
    if let Err(errors) = form.validate() {
        ctx.alerts
            .enqueue("Sign Up Failed", errors.to_string(), Severity::Danger);
        return Nav::Stay;
    }

    let attempt = async {
        ctx.client.sign_up(form).await?;
        ctx.client.sign_in(&SignInParams::from(&*form)).await
    };

    match attempt.await {
        Ok(identity) => {
            ctx.session.set_identity(identity);
            ctx.alerts
                .enqueue("Sign Up Success", messages::SIGN_UP_SUCCESS, Severity::Success);
            Nav::home()
        }
        Err(err) => {
            *form = SignUpParams::default();
            ctx.alerts.enqueue(
                format!("Sign Up Failed with error: {}", err.message),
                messages::SIGN_UP_FAILURE,
                Severity::Danger,
            );
            Nav::Stay
        }
    }
}

/// Exchange credentials for a session identity.
pub async fn sign_in(ctx: &AppContext, form: &mut SignInParams) -> Nav {
    if let Err(errors) = form.validate() {
        ctx.alerts
            .enqueue("Sign In Failed", errors.to_string(), Severity::Danger);
        return Nav::Stay;
    }

    match ctx.client.sign_in(form).await {
        Ok(identity) => {
            // The identity must land in the store before anything renders
            // from it.
            ctx.session.set_identity(identity);
            ctx.alerts
                .enqueue("Sign In Success", messages::SIGN_IN_SUCCESS, Severity::Success);
            Nav::home()
        }
        Err(err) => {
            *form = SignInParams::default();
            ctx.alerts.enqueue(
                format!("Sign In Failed with error: {}", err.message),
                messages::SIGN_IN_FAILURE,
                Severity::Danger,
            );
            Nav::Stay
        }
    }
}

/// Invalidate the token server-side and clear the local identity.
///
/// The user is signed out locally whether or not the server call
/// succeeds.
pub async fn sign_out(ctx: &AppContext) -> Nav {
    if let Some(identity) = ctx.session.current_identity() {
        if let Err(err) = ctx.client.sign_out(&identity).await {
            tracing::debug!(error = %err, "sign-out request failed");
        }
    }

    ctx.alerts.enqueue(
        "Signed Out Successfully",
        messages::SIGN_OUT_SUCCESS,
        Severity::Success,
    );
    ctx.session.clear_identity();
    Nav::home()
}

/// Replace the account password.
pub async fn change_password(ctx: &AppContext, form: &mut PasswordChangeParams) -> Nav {
    let Some(identity) = ctx.session.current_identity() else {
        return Nav::home();
    };

    if let Err(errors) = form.validate() {
        ctx.alerts
            .enqueue("Change Password Failed", errors.to_string(), Severity::Danger);
        return Nav::Stay;
    }

    match ctx.client.change_password(form, &identity).await {
        Ok(()) => {
            ctx.alerts.enqueue(
                "Change Password Success",
                messages::CHANGE_PASSWORD_SUCCESS,
                Severity::Success,
            );
            Nav::home()
        }
        Err(err) => {
            *form = PasswordChangeParams::default();
            ctx.alerts.enqueue(
                format!("Change Password Failed with error: {}", err.message),
                messages::CHANGE_PASSWORD_FAILURE,
                Severity::Danger,
            );
            Nav::Stay
        }
    }
}
