//! Route handlers: thin orchestration between the clients and the core.

use axum::body::Bytes;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::http::HeaderMap;
use axum::response::Response;
use serde::Deserialize;
use shopfront_lib::{
    assemble_listing, reshape_product, reshape_request, PageParams, ShopfrontError,
};

use crate::reply::{json_reply, ApiError};
use crate::routes::AppState;

/// Raw listing query parameters, kept as text until validated.
#[derive(Debug, Deserialize)]
pub struct ListQuery {
    count: Option<String>,
    page: Option<String>,
}

impl ListQuery {
    /// Paging only applies when both parameters arrive non-empty. One alone,
    /// or empty values, fall back to the single-page listing.
    fn paging(&self) -> Result<Option<PageParams>, ShopfrontError> {
        match (self.count.as_deref(), self.page.as_deref()) {
            (Some(count), Some(page)) if !count.is_empty() && !page.is_empty() => {
                PageParams::parse(count, page).map(Some)
            }
            _ => Ok(None),
        }
    }
}

/// GET /products: the full listing, cast, sorted, and optionally paginated.
/// Parameters are validated before the Catalog is asked for anything.
pub async fn list_products(
    State(state): State<AppState>,
    query: Result<Query<ListQuery>, QueryRejection>,
) -> Result<Response, ApiError> {
    let query = unpack(query)?;
    let paging = query.paging()?;
    let raw = state.catalog.get_all().await?;
    let page = assemble_listing(&raw, paging.as_ref())?;
    let body = serde_json::to_string(&page).map_err(ShopfrontError::Serialization)?;
    Ok(json_reply(body))
}

#[derive(Debug, Deserialize)]
pub struct CardQuery {
    #[serde(default)]
    id: String,
}

/// GET /products/card: a single product. Unauthenticated; the raw id goes
/// upstream as-is and the Catalog is the one that judges it.
pub async fn product_card(
    State(state): State<AppState>,
    query: Result<Query<CardQuery>, QueryRejection>,
) -> Result<Response, ApiError> {
    let query = unpack(query)?;
    let raw = state.catalog.get(&query.id).await?;
    Ok(json_reply(reshape_product(&raw)?))
}

/// POST /products: create. The caller's body is forwarded verbatim; only
/// the Catalog's answer is reshaped.
pub async fn add_product(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ApiError> {
    authorize(&state, &headers).await?;
    let body = body_text(&body)?;
    let raw = state.catalog.add(body).await?;
    Ok(json_reply(reshape_product(&raw)?))
}

/// PUT /products: update. The caller's body is normalized through the
/// product cast before it goes upstream.
pub async fn edit_product(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ApiError> {
    authorize(&state, &headers).await?;
    let body = reshape_request(body_text(&body)?)?;
    let raw = state.catalog.edit(&body).await?;
    Ok(json_reply(reshape_product(&raw)?))
}

/// DELETE /products: remove. Same body normalization as edit.
pub async fn delete_product(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ApiError> {
    authorize(&state, &headers).await?;
    let body = reshape_request(body_text(&body)?)?;
    let raw = state.catalog.delete(&body).await?;
    Ok(json_reply(reshape_product(&raw)?))
}

/// Has the verification service vouch for the request's access token. A
/// missing header is verified as an empty token; any verification failure
/// reads as unauthorized.
async fn authorize(state: &AppState, headers: &HeaderMap) -> Result<(), ApiError> {
    let token = headers
        .get("AccessToken")
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();
    state
        .auth
        .verify(token)
        .await
        .map_err(|_| ApiError(ShopfrontError::Unauthorized))
}

/// Unwraps a query extraction, turning an axum rejection (for example a
/// duplicated parameter) into the same JSON error envelope every other bad
/// request gets.
fn unpack<T>(query: Result<Query<T>, QueryRejection>) -> Result<T, ApiError> {
    let Query(inner) = query.map_err(|e| ApiError(ShopfrontError::BadRequest(e.to_string())))?;
    Ok(inner)
}

fn body_text(body: &Bytes) -> Result<&str, ApiError> {
    std::str::from_utf8(body).map_err(|_| {
        ApiError(ShopfrontError::BadRequest(
            "invalid product body: not UTF-8".to_string(),
        ))
    })
}
