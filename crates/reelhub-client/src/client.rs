//! HTTP client wrapper shared by all gateway functions.

use reqwest::header::AUTHORIZATION;
use reqwest::{RequestBuilder, Response};

use reelhub_core::config::api::ApiConfig;
use reelhub_core::error::{AppError, ErrorKind};
use reelhub_core::result::AppResult;
use reelhub_entity::user::Identity;

use crate::error;

/// Client for the movie API server.
///
/// Cheap to clone; the underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct ApiClient {
    /// Shared reqwest client.
    http: reqwest::Client,
    /// API root URL without a trailing slash.
    base_url: String,
}

impl ApiClient {
    /// Create a new client for the configured API root.
    pub fn new(config: &ApiConfig) -> AppResult<Self> {
        let http = reqwest::Client::builder().build().map_err(|e| {
            AppError::with_source(ErrorKind::Internal, "Failed to build HTTP client", e)
        })?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Build the absolute URL for an API path.
    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Return the underlying reqwest client.
    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.http
    }

    /// Attach the token auth header for an authenticated operation.
    ///
    /// The server expects the literal scheme `Token token=<token>`.
    pub(crate) fn authorize(request: RequestBuilder, identity: &Identity) -> RequestBuilder {
        request.header(AUTHORIZATION, format!("Token token={}", identity.token))
    }

    /// Send a request and map transport and status failures to [`AppError`].
    pub(crate) async fn execute(
        &self,
        request: RequestBuilder,
        op: &'static str,
    ) -> AppResult<Response> {
        let response = request
            .send()
            .await
            .map_err(|e| error::transport(e, op))?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!(%status, op, "API request rejected");
            return Err(error::status(status, op));
        }

        Ok(response)
    }
}
