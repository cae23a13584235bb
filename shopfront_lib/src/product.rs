//! The product record and the casting rules that admit raw Catalog JSON.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ShopfrontError;

/// A validated product record.
///
/// Instances only exist once every field has passed the casting rules, so
/// downstream code never re-checks shapes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub category: String,
}

impl Ord for Product {
    /// Total order over products: id ascending, ties broken by category,
    /// then by name. Text keys compare lexicographically by bytes.
    fn cmp(&self, other: &Self) -> Ordering {
        self.id
            .cmp(&other.id)
            .then_with(|| self.category.cmp(&other.category))
            .then_with(|| self.name.cmp(&other.name))
    }
}

impl PartialOrd for Product {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Why a raw value failed to cast into a [`Product`].
///
/// Internal diagnostic detail only. Callers collapse it before anything
/// leaves the process.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CastError {
    #[error("value is not an array")]
    NotAnArray,
    #[error("expected at least 3 fields, found {0}")]
    MissingFields(usize),
    #[error("value is not an object")]
    NotAnObject,
    #[error("field {0} is not a number")]
    NotANumber(&'static str),
    #[error("field {0} is not a string")]
    NotAString(&'static str),
}

/// Casts the id position. Accepts any JSON number; fractional values are
/// truncated toward zero like a float-to-integer conversion.
fn id_field(value: Option<&Value>) -> Result<i64, CastError> {
    match value {
        Some(Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f as i64))
            .ok_or(CastError::NotANumber("id")),
        _ => Err(CastError::NotANumber("id")),
    }
}

fn text_field(value: Option<&Value>, field: &'static str) -> Result<String, CastError> {
    match value {
        Some(Value::String(s)) => Ok(s.clone()),
        _ => Err(CastError::NotAString(field)),
    }
}

/// Casts one listing element: an array of at least three fields read as
/// `[id, name, category, ...]`. Positions past the third are ignored.
fn cast_element(value: &Value) -> Result<Product, CastError> {
    let fields = value.as_array().ok_or(CastError::NotAnArray)?;
    if fields.len() <= 2 {
        return Err(CastError::MissingFields(fields.len()));
    }
    Ok(Product {
        id: id_field(fields.first())?,
        name: text_field(fields.get(1), "name")?,
        category: text_field(fields.get(2), "category")?,
    })
}

/// Casts a whole raw listing, all or nothing. The first offending element
/// fails the cast and none of the records are exposed.
pub fn cast_elements(elements: &[Value]) -> Result<Vec<Product>, ShopfrontError> {
    elements
        .iter()
        .enumerate()
        .map(|(index, element)| {
            cast_element(element).map_err(|e| {
                ShopfrontError::MalformedUpstream(format!("element {}: {}", index, e))
            })
        })
        .collect()
}

/// Casts a single-record payload: an object with `id`, `name` and `category`
/// members, held to the same per-field rules as the listing cast. Members
/// beyond those three are dropped.
pub fn cast_object(value: &Value) -> Result<Product, CastError> {
    if !value.is_object() {
        return Err(CastError::NotAnObject);
    }
    Ok(Product {
        id: id_field(value.get("id"))?,
        name: text_field(value.get("name"), "name")?,
        category: text_field(value.get("category"), "category")?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn product(id: i64, name: &str, category: &str) -> Product {
        Product {
            id,
            name: name.to_string(),
            category: category.to_string(),
        }
    }

    #[test]
    fn well_formed_element_casts() {
        let products = cast_elements(&[json!([1, "Pen", "Office"])]).unwrap();
        assert_eq!(products, vec![product(1, "Pen", "Office")]);
    }

    #[test]
    fn trailing_fields_are_ignored() {
        let products = cast_elements(&[json!([1, "Pen", "Office", 249, "unused"])]).unwrap();
        assert_eq!(products, vec![product(1, "Pen", "Office")]);
    }

    #[test]
    fn fractional_id_truncates() {
        let products = cast_elements(&[json!([7.9, "Pen", "Office"])]).unwrap();
        assert_eq!(products[0].id, 7);
    }

    #[test]
    fn empty_name_still_casts() {
        // Shape rules check types, not content.
        let products = cast_elements(&[json!([1, "", "Office"])]).unwrap();
        assert_eq!(products[0].name, "");
    }

    #[test]
    fn non_array_element_fails() {
        let err = cast_elements(&[json!({"id": 1})]).unwrap_err();
        assert!(matches!(err, ShopfrontError::MalformedUpstream(_)));
    }

    #[test]
    fn short_element_fails() {
        let err = cast_elements(&[json!([1, "Pen"])]).unwrap_err();
        assert!(
            matches!(&err, ShopfrontError::MalformedUpstream(d) if d.contains("3 fields"))
        );
    }

    #[test]
    fn non_numeric_id_fails() {
        let err = cast_elements(&[json!(["1", "Pen", "Office"])]).unwrap_err();
        assert!(matches!(&err, ShopfrontError::MalformedUpstream(d) if d.contains("id")));
    }

    #[test]
    fn non_string_name_fails() {
        let err = cast_elements(&[json!([1, 2, "Office"])]).unwrap_err();
        assert!(matches!(&err, ShopfrontError::MalformedUpstream(d) if d.contains("name")));
    }

    #[test]
    fn non_string_category_fails() {
        let err = cast_elements(&[json!([1, "Pen", 3])]).unwrap_err();
        assert!(matches!(&err, ShopfrontError::MalformedUpstream(d) if d.contains("category")));
    }

    #[test]
    fn one_bad_element_fails_the_whole_cast() {
        let elements = [
            json!([1, "Pen", "Office"]),
            json!("not a record"),
            json!([2, "Mug", "Kitchen"]),
        ];
        let err = cast_elements(&elements).unwrap_err();
        assert!(matches!(&err, ShopfrontError::MalformedUpstream(d) if d.starts_with("element 1")));
    }

    #[test]
    fn object_cast_accepts_and_trims() {
        let value = json!({"id": 3, "name": "Mug", "category": "Kitchen", "stock": 12});
        assert_eq!(cast_object(&value).unwrap(), product(3, "Mug", "Kitchen"));
    }

    #[test]
    fn object_cast_rejects_missing_member() {
        let value = json!({"id": 3, "name": "Mug"});
        assert_eq!(cast_object(&value).unwrap_err(), CastError::NotAString("category"));
    }

    #[test]
    fn object_cast_rejects_non_object() {
        assert_eq!(cast_object(&json!([3, "Mug", "Kitchen"])).unwrap_err(), CastError::NotAnObject);
    }

    #[test]
    fn sort_orders_by_id_first() {
        let mut products = vec![
            product(3, "Aaa", "Aaa"),
            product(1, "Zzz", "Zzz"),
            product(2, "Mmm", "Mmm"),
        ];
        products.sort_unstable();
        let ids: Vec<i64> = products.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn sort_breaks_id_ties_by_category_then_name() {
        let mut products = vec![
            product(1, "Aaa", "Office"),
            product(1, "Zzz", "Kitchen"),
            product(1, "Bbb", "Kitchen"),
        ];
        products.sort_unstable();
        assert_eq!(
            products,
            vec![
                product(1, "Bbb", "Kitchen"),
                product(1, "Zzz", "Kitchen"),
                product(1, "Aaa", "Office"),
            ]
        );
    }

    #[test]
    fn sort_result_does_not_depend_on_input_order() {
        let a = vec![
            product(2, "b", "X"),
            product(1, "z", "X"),
            product(1, "a", "X"),
        ];
        let mut b = a.clone();
        b.reverse();
        let mut a = a;
        a.sort_unstable();
        b.sort_unstable();
        assert_eq!(a, b);
        assert_eq!(a, vec![product(1, "a", "X"), product(1, "z", "X"), product(2, "b", "X")]);
    }
}
