//! Error types for the shopfront facade.

use std::error::Error as StdError;
use std::fmt;

/// Errors surfaced by the facade pipeline.
///
/// Variants distinguish whose fault a failure is: the caller's input, the
/// Catalog service, or the facade itself. The HTTP layer relies on that
/// split to decide which message and status reach the client.
#[derive(Debug)]
pub enum ShopfrontError {
    /// The access token was missing or rejected by the verification service.
    Unauthorized,
    /// A Catalog request failed outright or returned a non-success status.
    Upstream(catalog_api::Error),
    /// The Catalog answered, but the payload failed the shape rules.
    /// The detail string goes to the logs; clients see a generic message.
    MalformedUpstream(String),
    /// The caller's own parameters or body were invalid. Client-facing.
    BadRequest(String),
    /// Outbound JSON could not be produced.
    Serialization(serde_json::Error),
}

impl fmt::Display for ShopfrontError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShopfrontError::Unauthorized => write!(f, "unauthorized"),
            ShopfrontError::Upstream(e) => write!(f, "upstream request failed: {}", e),
            ShopfrontError::MalformedUpstream(detail) => {
                write!(f, "malformed upstream payload: {}", detail)
            }
            ShopfrontError::BadRequest(msg) => write!(f, "{}", msg),
            ShopfrontError::Serialization(e) => write!(f, "serialization error: {}", e),
        }
    }
}

impl StdError for ShopfrontError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            ShopfrontError::Upstream(e) => Some(e),
            ShopfrontError::Serialization(e) => Some(e),
            _ => None,
        }
    }
}

impl From<catalog_api::Error> for ShopfrontError {
    fn from(err: catalog_api::Error) -> Self {
        ShopfrontError::Upstream(err)
    }
}

impl From<serde_json::Error> for ShopfrontError {
    fn from(err: serde_json::Error) -> Self {
        ShopfrontError::Serialization(err)
    }
}
