//! HTTP client for the upstream product Catalog service.

use std::time::Duration;

use reqwest::Method;
use url::Url;

use crate::Error;

pub(crate) const USER_AGENT: &str = concat!("shopfront/", env!("CARGO_PKG_VERSION"));

/// HTTP client for the Catalog data service.
///
/// The Catalog is the service of record for product data. This client moves
/// raw JSON in and out of it and leaves all payload interpretation to the
/// caller. Each request builds a fresh `reqwest::Client` with a 30-second
/// timeout.
#[derive(Clone)]
pub struct CatalogClient {
    /// Base URL of the Catalog service, e.g. `http://catalog:9000`.
    base_api_url: String,
}

impl CatalogClient {
    /// Creates a client for the Catalog service at `base_url`.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_api_url: base_url.to_string(),
        }
    }

    /// Fetches the complete product listing as raw JSON text.
    pub async fn get_all(&self) -> Result<String, Error> {
        self.request(Method::GET, "/products", None).await
    }

    /// Fetches a single product record. The id is passed through verbatim;
    /// the Catalog is the one that judges it.
    pub async fn get(&self, id: &str) -> Result<String, Error> {
        self.request(Method::GET, &format!("/products/{}", id), None)
            .await
    }

    /// Creates a product from the given JSON body.
    pub async fn add(&self, body: &str) -> Result<String, Error> {
        self.request(Method::POST, "/products", Some(body)).await
    }

    /// Updates a product from the given JSON body.
    pub async fn edit(&self, body: &str) -> Result<String, Error> {
        self.request(Method::PUT, "/products", Some(body)).await
    }

    /// Deletes the product named by the given JSON body.
    pub async fn delete(&self, body: &str) -> Result<String, Error> {
        self.request(Method::DELETE, "/products", Some(body)).await
    }

    fn get_url(&self, path: &str) -> Result<Url, Error> {
        Url::parse(format!("{}{}", &self.base_api_url, path).as_str()).map_err(|e| {
            tracing::error!("Invalid URL constructed: {}", e);
            Error::RequestFailed
        })
    }

    async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<&str>,
    ) -> Result<String, Error> {
        let url = self.get_url(path)?;
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::RequestFailed
            })?;
        let mut request = client
            .request(method, url)
            .header("content-type", "application/json")
            .header("accept", "application/json");
        if let Some(body) = body {
            request = request.body(body.to_string());
        }
        let resp = request.send().await.map_err(|e| {
            tracing::error!("Failed to reach catalog: {}", e);
            Error::RequestFailed
        })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::RequestFailed
        })?;

        if !status.is_success() {
            let snippet = truncate_body(&body);
            tracing::error!("Catalog request failed with status {}: {}", status, snippet);
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                body: snippet,
            });
        }

        Ok(body)
    }
}

pub(crate) fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        // Back the cut off to a char boundary; byte MAX may sit inside a
        // multibyte sequence.
        let mut cut = MAX;
        while !body.is_char_boundary(cut) {
            cut -= 1;
        }
        format!("{}...[truncated]", &body[..cut])
    }
}
