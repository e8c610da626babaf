//! Mapping of HTTP failures into the unified error type.

use reqwest::StatusCode;

use reelhub_core::error::{AppError, ErrorKind};

/// Map a transport-level failure (connection refused, DNS, closed socket).
pub(crate) fn transport(err: reqwest::Error, op: &str) -> AppError {
    AppError::with_source(
        ErrorKind::ExternalService,
        format!("{op} request failed: {err}"),
        err,
    )
}

/// Map a non-2xx response status.
///
/// 401 means the credentials or token were rejected, 404 the resource is
/// gone, 422 the server refused the submitted fields. Everything else is
/// reported as a generic API failure.
pub(crate) fn status(status: StatusCode, op: &str) -> AppError {
    let message = format!("{op} failed: {status}");
    match status {
        StatusCode::UNAUTHORIZED => AppError::authentication(message),
        StatusCode::NOT_FOUND => AppError::not_found(message),
        StatusCode::UNPROCESSABLE_ENTITY => AppError::validation(message),
        _ => AppError::external_service(message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            status(StatusCode::UNAUTHORIZED, "sign-in").kind,
            ErrorKind::Authentication
        );
        assert_eq!(
            status(StatusCode::NOT_FOUND, "movie-show").kind,
            ErrorKind::NotFound
        );
        assert_eq!(
            status(StatusCode::UNPROCESSABLE_ENTITY, "sign-up").kind,
            ErrorKind::Validation
        );
        assert_eq!(
            status(StatusCode::INTERNAL_SERVER_ERROR, "movie-index").kind,
            ErrorKind::ExternalService
        );
    }
}
