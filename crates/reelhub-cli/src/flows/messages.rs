//! User-facing alert message bodies.

/// Sign-up succeeded (and the follow-up sign-in as well).
pub const SIGN_UP_SUCCESS: &str = "Successfully registered! You've been signed in as well.";

/// Sign-up failed.
pub const SIGN_UP_FAILURE: &str =
    "Registration failed. Email may be taken, or passwords don't match.";

/// Sign-in succeeded.
pub const SIGN_IN_SUCCESS: &str = "Logged in successfully!";

/// Sign-in failed.
pub const SIGN_IN_FAILURE: &str =
    "Failed to authenticate, check your email and password and try again.";

/// Sign-out completed.
pub const SIGN_OUT_SUCCESS: &str = "Come back soon!";

/// Password change succeeded.
pub const CHANGE_PASSWORD_SUCCESS: &str = "Password changed successfully!";

/// Password change failed.
pub const CHANGE_PASSWORD_FAILURE: &str = "Your old password was incorrect, please try again.";
