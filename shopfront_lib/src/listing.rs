//! Assembly of listing and single-record responses from raw Catalog payloads.

use serde_json::Value;

use crate::error::ShopfrontError;
use crate::page::{paginate, Page, PageParams};
use crate::product::{cast_elements, cast_object, Product};

/// Builds the listing from the Catalog's raw list payload.
///
/// Runs parse, cast, sort and paginate in that order, stopping at the first
/// failure. The sort gives every response the same deterministic order no
/// matter how the Catalog happened to arrange the records.
pub fn assemble_listing(
    raw: &str,
    paging: Option<&PageParams>,
) -> Result<Page<Product>, ShopfrontError> {
    let elements: Vec<Value> = serde_json::from_str(raw).map_err(|e| {
        ShopfrontError::MalformedUpstream(format!("payload is not a JSON array: {}", e))
    })?;
    let mut products = cast_elements(&elements)?;
    products.sort_unstable();
    Ok(paginate(products, paging))
}

/// Reshapes one raw Catalog record into the stable product JSON, dropping
/// any members beyond id, name and category.
pub fn reshape_product(raw: &str) -> Result<String, ShopfrontError> {
    let value: Value = serde_json::from_str(raw)
        .map_err(|e| ShopfrontError::MalformedUpstream(format!("payload is not JSON: {}", e)))?;
    let product = cast_object(&value)
        .map_err(|e| ShopfrontError::MalformedUpstream(e.to_string()))?;
    serde_json::to_string(&product).map_err(ShopfrontError::Serialization)
}

/// Reshapes a caller-supplied record body through the same object cast.
/// Here a shape failure is the caller's fault, so it reports as bad input
/// rather than an upstream breakage.
pub fn reshape_request(raw: &str) -> Result<String, ShopfrontError> {
    let value: Value = serde_json::from_str(raw)
        .map_err(|e| ShopfrontError::BadRequest(format!("invalid product body: {}", e)))?;
    let product = cast_object(&value)
        .map_err(|e| ShopfrontError::BadRequest(format!("invalid product body: {}", e)))?;
    serde_json::to_string(&product).map_err(ShopfrontError::Serialization)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_PRODUCTS: &str = r#"[[2, "Mug", "Kitchen"], [1, "Pen", "Office"]]"#;

    #[test]
    fn listing_is_parsed_cast_and_sorted() {
        let page = assemble_listing(TWO_PRODUCTS, None).unwrap();
        assert_eq!(page.pages_count, 1);
        assert_eq!(page.current_page, 1);
        let names: Vec<&str> = page.items.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Pen", "Mug"]);
    }

    #[test]
    fn listing_serializes_with_camel_case_metadata() {
        let page = assemble_listing(TWO_PRODUCTS, None).unwrap();
        let body = serde_json::to_string(&page).unwrap();
        assert!(body.contains("\"pagesCount\":1"));
        assert!(body.contains("\"currentPage\":1"));
        assert!(body.contains("\"items\":[{\"id\":1,"));
    }

    #[test]
    fn listing_with_paging_slices_after_sorting() {
        let raw = r#"[[3, "C", "X"], [1, "A", "X"], [2, "B", "X"]]"#;
        let params = PageParams::new(2, 2).unwrap();
        let page = assemble_listing(raw, Some(&params)).unwrap();
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].id, 3);
        assert_eq!(page.pages_count, 2);
        assert_eq!(page.current_page, 2);
    }

    #[test]
    fn identical_requests_produce_identical_bytes() {
        let params = PageParams::new(1, 1).unwrap();
        let first = serde_json::to_string(&assemble_listing(TWO_PRODUCTS, Some(&params)).unwrap());
        let second = serde_json::to_string(&assemble_listing(TWO_PRODUCTS, Some(&params)).unwrap());
        assert_eq!(first.unwrap(), second.unwrap());
    }

    #[test]
    fn non_array_payload_is_malformed_upstream() {
        let err = assemble_listing(r#"{"items": []}"#, None).unwrap_err();
        assert!(matches!(err, ShopfrontError::MalformedUpstream(_)));
    }

    #[test]
    fn bad_element_is_malformed_upstream() {
        let err = assemble_listing(r#"[[1, "Pen", "Office"], [2, "Mug"]]"#, None).unwrap_err();
        assert!(matches!(&err, ShopfrontError::MalformedUpstream(d) if d.starts_with("element 1")));
    }

    #[test]
    fn reshape_drops_extra_members() {
        let raw = r#"{"id": 1, "name": "Pen", "category": "Office", "stock": 40}"#;
        let body = reshape_product(raw).unwrap();
        assert_eq!(body, r#"{"id":1,"name":"Pen","category":"Office"}"#);
    }

    #[test]
    fn reshape_rejects_wrong_shape_as_upstream_fault() {
        let err = reshape_product(r#"[1, "Pen", "Office"]"#).unwrap_err();
        assert!(matches!(err, ShopfrontError::MalformedUpstream(_)));
    }

    #[test]
    fn request_reshape_normalizes_the_body() {
        let raw = r#"{"category": "Office", "name": "Pen", "id": 1, "note": "x"}"#;
        let body = reshape_request(raw).unwrap();
        assert_eq!(body, r#"{"id":1,"name":"Pen","category":"Office"}"#);
    }

    #[test]
    fn request_reshape_blames_the_caller() {
        let err = reshape_request("not json").unwrap_err();
        assert!(matches!(err, ShopfrontError::BadRequest(_)));
        let err = reshape_request(r#"{"id": "1", "name": "Pen", "category": "Office"}"#).unwrap_err();
        assert!(matches!(&err, ShopfrontError::BadRequest(m) if m.contains("id")));
    }
}
