//! Pagination utilities for service layer
//!
//! Slices an ordered sequence into one page plus metadata.

use serde::{Deserialize, Serialize};

use crate::errors::ServiceError;

/// Pagination parameters as received from the query string.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageRequest {
    /// 1-based page index
    pub page: i64,
    /// items per page
    pub limit: i64,
}

impl PageRequest {
    pub const DEFAULT_PAGE: i64 = 1;
    pub const DEFAULT_LIMIT: i64 = 10;

    pub fn new(page: Option<i64>, limit: Option<i64>) -> Self {
        Self {
            page: page.unwrap_or(Self::DEFAULT_PAGE),
            limit: limit.unwrap_or(Self::DEFAULT_LIMIT),
        }
    }

    /// Reject non-positive values instead of clamping them.
    pub fn validate(self) -> Result<(u64, u64), ServiceError> {
        if self.page < 1 {
            return Err(ServiceError::Validation("page must be a positive integer".into()));
        }
        if self.limit < 1 {
            return Err(ServiceError::Validation("limit must be a positive integer".into()));
        }
        Ok((self.page as u64, self.limit as u64))
    }
}

impl Default for PageRequest {
    fn default() -> Self { Self::new(None, None) }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PageMeta {
    pub page: u64,
    pub limit: u64,
    pub total_items: u64,
    pub total_pages: u64,
}

/// Paginated envelope: `{"data": [...], "meta": {...}}`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Page<T> {
    pub data: Vec<T>,
    pub meta: PageMeta,
}

/// Take page `request.page` of `items`. An out-of-range page yields empty `data`.
pub fn paginate<T>(items: Vec<T>, request: PageRequest) -> Result<Page<T>, ServiceError> {
    let (page, limit) = request.validate()?;
    let total_items = items.len() as u64;
    let start = (page - 1).saturating_mul(limit);
    let data: Vec<T> = if start >= total_items {
        Vec::new()
    } else {
        items
            .into_iter()
            .skip(start as usize)
            .take(limit.min(total_items - start) as usize)
            .collect()
    };
    Ok(Page {
        data,
        meta: PageMeta { page, limit, total_items, total_pages: total_items.div_ceil(limit) },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn req(page: i64, limit: i64) -> PageRequest {
        PageRequest { page, limit }
    }

    #[test]
    fn default_values_match_query_defaults() {
        let d = PageRequest::default();
        assert_eq!(d.page, 1);
        assert_eq!(d.limit, 10);
    }

    #[test]
    fn page_length_follows_formula() {
        let items: Vec<u32> = (0..23).collect();
        for page in 1..=5i64 {
            for limit in 1..=12i64 {
                let p = paginate(items.clone(), req(page, limit)).expect("valid");
                let remaining = 23i64 - (page - 1) * limit;
                let expected = limit.min(remaining.max(0));
                assert_eq!(p.data.len() as i64, expected, "page={page} limit={limit}");
            }
        }
    }

    #[test]
    fn slices_the_right_window() {
        let p = paginate(vec!['a', 'b', 'c', 'd', 'e'], req(2, 2)).expect("valid");
        assert_eq!(p.data, vec!['c', 'd']);
        assert_eq!(p.meta, PageMeta { page: 2, limit: 2, total_items: 5, total_pages: 3 });
    }

    #[test]
    fn total_pages_is_ceiling() {
        let p = paginate(vec![1, 2, 3], req(1, 1)).expect("valid");
        assert_eq!(p.meta.total_pages, 3);
        let p = paginate(vec![1, 2, 3], req(1, 2)).expect("valid");
        assert_eq!(p.meta.total_pages, 2);
        let p = paginate(Vec::<i32>::new(), req(1, 10)).expect("valid");
        assert_eq!(p.meta.total_pages, 0);
        assert!(p.data.is_empty());
    }

    #[test]
    fn out_of_range_page_is_empty_and_echoes_request() {
        let p = paginate(vec![1, 2], req(9, 5)).expect("valid");
        assert!(p.data.is_empty());
        assert_eq!(p.meta.page, 9);
        assert_eq!(p.meta.limit, 5);
        assert_eq!(p.meta.total_items, 2);
    }

    #[test]
    fn huge_page_does_not_overflow() {
        let p = paginate(vec![1, 2], req(i64::MAX, i64::MAX)).expect("valid");
        assert!(p.data.is_empty());
        assert_eq!(p.meta.total_pages, 1);
    }

    #[test]
    fn non_positive_values_are_rejected() {
        assert!(matches!(paginate(vec![1], req(0, 10)), Err(ServiceError::Validation(_))));
        assert!(matches!(paginate(vec![1], req(1, 0)), Err(ServiceError::Validation(_))));
        assert!(matches!(paginate(vec![1], req(-3, 2)), Err(ServiceError::Validation(_))));
    }

    #[test]
    fn envelope_serializes_with_data_and_meta() {
        let p = paginate(vec![1, 2, 3], req(1, 2)).expect("valid");
        let v = serde_json::to_value(&p).expect("serialize");
        assert_eq!(
            v,
            serde_json::json!({
                "data": [1, 2],
                "meta": {"page": 1, "limit": 2, "total_items": 3, "total_pages": 2}
            })
        );
    }
}
