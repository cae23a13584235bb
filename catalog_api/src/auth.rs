//! Client for the token verification service.

use std::time::Duration;

use url::Url;

use crate::client::{truncate_body, USER_AGENT};
use crate::Error;

/// HTTP client for the authentication service that vouches for access tokens.
#[derive(Clone)]
pub struct AuthClient {
    /// Base URL of the verification service.
    base_api_url: String,
}

impl AuthClient {
    /// Creates a client for the verification service at `base_url`.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_api_url: base_url.to_string(),
        }
    }

    /// Checks an access token with the verification service.
    ///
    /// The token travels in the `AccessToken` header, the same header the
    /// facade receives it in. Any failure, whether transport or a
    /// non-success verdict, is an `Err`; callers treat every `Err` as
    /// "not authorized".
    pub async fn verify(&self, token: &str) -> Result<(), Error> {
        let url = Url::parse(format!("{}{}", &self.base_api_url, "/verify").as_str()).map_err(
            |e| {
                tracing::error!("Invalid URL constructed: {}", e);
                Error::RequestFailed
            },
        )?;
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::RequestFailed
            })?;
        let resp = client
            .post(url)
            .header("AccessToken", token)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to reach auth service: {}", e);
                Error::RequestFailed
            })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::RequestFailed
        })?;

        if !status.is_success() {
            let snippet = truncate_body(&body);
            tracing::warn!("Token rejected with status {}: {}", status, snippet);
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                body: snippet,
            });
        }

        Ok(())
    }
}
