//! Page parameter validation and page-boundary arithmetic.

use serde::{Deserialize, Serialize};

use crate::error::ShopfrontError;

/// Validated pagination parameters: a page size and a 1-based page number.
///
/// Constructed only through [`PageParams::new`] or [`PageParams::parse`];
/// `count` and `page` are always at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageParams {
    count: usize,
    page: usize,
}

impl PageParams {
    /// Builds parameters from already-numeric values. Both must be at
    /// least 1.
    pub fn new(count: usize, page: usize) -> Option<Self> {
        if count >= 1 && page >= 1 {
            Some(PageParams { count, page })
        } else {
            None
        }
    }

    /// Parses raw `count` and `page` query values. Both must be positive
    /// integers; `count` is checked fully before `page` is looked at, and
    /// any invalid value rejects the request before slicing happens.
    pub fn parse(count: &str, page: &str) -> Result<Self, ShopfrontError> {
        let count = count
            .parse::<usize>()
            .ok()
            .filter(|c| *c >= 1)
            .ok_or_else(|| ShopfrontError::BadRequest("Invalid param count".to_string()))?;
        let page = page
            .parse::<usize>()
            .ok()
            .filter(|p| *p >= 1)
            .ok_or_else(|| ShopfrontError::BadRequest("Invalid param page".to_string()))?;
        Ok(PageParams { count, page })
    }
}

/// One page of records plus the paging metadata carried by every listing
/// response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    pub pages_count: usize,
    pub current_page: usize,
}

/// Slices an already-sorted collection into the requested page.
///
/// Without parameters the whole collection is one page. An empty collection
/// is always page 1 of 1. A page number past the end clamps in the metadata
/// and yields an empty `items`, never an error.
pub fn paginate<T>(items: Vec<T>, params: Option<&PageParams>) -> Page<T> {
    let params = match params {
        Some(p) => p,
        None => {
            return Page {
                items,
                pages_count: 1,
                current_page: 1,
            }
        }
    };

    let total = items.len();
    if total == 0 {
        return Page {
            items,
            pages_count: 1,
            current_page: 1,
        };
    }

    let pages_count = total / params.count + usize::from(total % params.count != 0);
    let current_page = params.page.min(pages_count);
    let begin = params
        .page
        .saturating_sub(1)
        .saturating_mul(params.count)
        .min(total);
    let end = params.page.saturating_mul(params.count).min(total);
    let items = items.into_iter().skip(begin).take(end - begin).collect();

    Page {
        items,
        pages_count,
        current_page,
    }
}
