//! Request DTOs with validation, plus the wire envelopes the server
//! expects.
//!
//! The server keys every request body by resource name (`credentials`,
//! `passwords`, `movie`); the envelope structs below encode that shape so
//! the gateway functions cannot drift from it.

use serde::{Deserialize, Serialize};
use validator::Validate;

use reelhub_entity::movie::MovieParams;

/// Sign-up form data.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct SignUpParams {
    /// Email address.
    #[validate(email(message = "Email must be a valid address"))]
    pub email: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
    /// Password confirmation, checked server-side against `password`.
    #[validate(length(min = 1, message = "Password confirmation is required"))]
    pub password_confirmation: String,
}

/// Sign-in form data.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct SignInParams {
    /// Email address.
    #[validate(email(message = "Email must be a valid address"))]
    pub email: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

impl From<&SignUpParams> for SignInParams {
    /// Sign-up is followed by an automatic sign-in with the same
    /// credentials.
    fn from(params: &SignUpParams) -> Self {
        Self {
            email: params.email.clone(),
            password: params.password.clone(),
        }
    }
}

/// Change-password form data.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct PasswordChangeParams {
    /// Current password.
    #[validate(length(min = 1, message = "Current password is required"))]
    pub old_password: String,
    /// Replacement password.
    #[validate(length(min = 1, message = "New password is required"))]
    pub new_password: String,
}

/// `{"credentials": {...}}` envelope for sign-up.
#[derive(Debug, Serialize)]
pub(crate) struct SignUpBody<'a> {
    pub credentials: SignUpCredentials<'a>,
}

/// Sign-up credentials wire shape.
#[derive(Debug, Serialize)]
pub(crate) struct SignUpCredentials<'a> {
    pub email: &'a str,
    pub password: &'a str,
    pub password_confirmation: &'a str,
}

impl<'a> From<&'a SignUpParams> for SignUpBody<'a> {
    fn from(params: &'a SignUpParams) -> Self {
        Self {
            credentials: SignUpCredentials {
                email: &params.email,
                password: &params.password,
                password_confirmation: &params.password_confirmation,
            },
        }
    }
}

/// `{"credentials": {...}}` envelope for sign-in.
#[derive(Debug, Serialize)]
pub(crate) struct SignInBody<'a> {
    pub credentials: SignInCredentials<'a>,
}

/// Sign-in credentials wire shape.
#[derive(Debug, Serialize)]
pub(crate) struct SignInCredentials<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

impl<'a> From<&'a SignInParams> for SignInBody<'a> {
    fn from(params: &'a SignInParams) -> Self {
        Self {
            credentials: SignInCredentials {
                email: &params.email,
                password: &params.password,
            },
        }
    }
}

/// `{"passwords": {"old": ..., "new": ...}}` envelope for change-password.
#[derive(Debug, Serialize)]
pub(crate) struct PasswordsBody<'a> {
    pub passwords: Passwords<'a>,
}

/// Password change wire shape.
#[derive(Debug, Serialize)]
pub(crate) struct Passwords<'a> {
    pub old: &'a str,
    pub new: &'a str,
}

impl<'a> From<&'a PasswordChangeParams> for PasswordsBody<'a> {
    fn from(params: &'a PasswordChangeParams) -> Self {
        Self {
            passwords: Passwords {
                old: &params.old_password,
                new: &params.new_password,
            },
        }
    }
}

/// `{"movie": {...}}` envelope for create and update.
#[derive(Debug, Serialize)]
pub(crate) struct MovieBody<'a> {
    pub movie: &'a MovieParams,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_up_envelope_shape() {
        let params = SignUpParams {
            email: "a@b.com".to_string(),
            password: "p".to_string(),
            password_confirmation: "p".to_string(),
        };
        let json = serde_json::to_value(SignUpBody::from(&params)).expect("serialize");
        assert_eq!(
            json,
            serde_json::json!({
                "credentials": {
                    "email": "a@b.com",
                    "password": "p",
                    "password_confirmation": "p",
                }
            })
        );
    }

    #[test]
    fn test_passwords_envelope_uses_old_new_keys() {
        let params = PasswordChangeParams {
            old_password: "before".to_string(),
            new_password: "after".to_string(),
        };
        let json = serde_json::to_value(PasswordsBody::from(&params)).expect("serialize");
        assert_eq!(
            json,
            serde_json::json!({"passwords": {"old": "before", "new": "after"}})
        );
    }

    #[test]
    fn test_empty_forms_fail_validation() {
        assert!(SignUpParams::default().validate().is_err());
        assert!(SignInParams::default().validate().is_err());
        assert!(PasswordChangeParams::default().validate().is_err());
    }
}
