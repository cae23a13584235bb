//! Route table and shared state.

use axum::routing::get;
use axum::Router;
use shopfront_lib::catalog_api::{AuthClient, CatalogClient};

use crate::handlers;

/// Clients shared by every request.
#[derive(Clone)]
pub struct AppState {
    pub catalog: CatalogClient,
    pub auth: AuthClient,
}

/// Builds the facade's route table over the given clients.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/products",
            get(handlers::list_products)
                .post(handlers::add_product)
                .put(handlers::edit_product)
                .delete(handlers::delete_product),
        )
        .route("/products/card", get(handlers::product_card))
        .with_state(state)
}
