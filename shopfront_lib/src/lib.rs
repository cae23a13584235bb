//! Library layer for the shopfront facade: casting, ordering, and paging.
//!
//! Turns the Catalog service's loosely-shaped JSON into validated product
//! records with a deterministic order and well-defined page boundaries.
//! Everything here is pure computation over already-fetched payloads; the
//! HTTP clients live in the vendored `catalog_api` crate and the serving
//! surface in the server binary.

pub mod error;
pub mod listing;
pub mod page;
pub mod product;

pub use catalog_api;

pub use error::ShopfrontError;
pub use listing::{assemble_listing, reshape_product, reshape_request};
pub use page::{paginate, Page, PageParams};
pub use product::{cast_elements, cast_object, CastError, Product};
