//! Response envelopes and the error-to-status mapping.

use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use shopfront_lib::catalog_api;
use shopfront_lib::ShopfrontError;

/// Envelope for every failure reply.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Wraps an already-serialized JSON body as a success response.
pub fn json_reply(body: String) -> Response {
    (
        [(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        )],
        body,
    )
        .into_response()
}

/// A pipeline failure on its way out as HTTP.
///
/// The full error is logged here and the client gets only the message the
/// mapping allows. Transport-level catalog failures read as a bad gateway;
/// a catalog status is passed through as-is.
pub struct ApiError(pub ShopfrontError);

impl From<ShopfrontError> for ApiError {
    fn from(err: ShopfrontError) -> Self {
        ApiError(err)
    }
}

impl From<catalog_api::Error> for ApiError {
    fn from(err: catalog_api::Error) -> Self {
        ApiError(ShopfrontError::Upstream(err))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            ShopfrontError::Unauthorized => (StatusCode::UNAUTHORIZED, "unauthorized".to_string()),
            ShopfrontError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            ShopfrontError::Upstream(err) => {
                let status = match err {
                    catalog_api::Error::HttpStatus { status, .. } => {
                        StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
                    }
                    catalog_api::Error::RequestFailed => StatusCode::BAD_GATEWAY,
                };
                (status, "upstream request failed".to_string())
            }
            ShopfrontError::MalformedUpstream(_) | ShopfrontError::Serialization(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal server error".to_string(),
            ),
        };

        if status.is_server_error() {
            tracing::error!("request failed: {}", self.0);
        } else {
            tracing::warn!("request rejected: {}", self.0);
        }

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
