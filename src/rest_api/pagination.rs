//! # Pagination
//!
//! Fixed-size, 1-based pages over an already ordered result set.

use std::collections::HashMap;

/// Number of questions per page
pub const QUESTIONS_PER_PAGE: usize = 10;

/// Page number used when the query string has none
pub const DEFAULT_PAGE: i64 = 1;

/// Read `page` from the query string. Missing or non-integer values fall
/// back to [`DEFAULT_PAGE`].
pub fn page_param(query: &HashMap<String, String>) -> i64 {
    query
        .get("page")
        .and_then(|raw| raw.trim().parse::<i64>().ok())
        .unwrap_or(DEFAULT_PAGE)
}

/// Slice `[(page-1)*10, page*10)` out of `items`.
///
/// Pages before the first or past the last are empty rather than an error.
pub fn paginate<T: Clone>(page: i64, items: &[T]) -> Vec<T> {
    if page < 1 {
        return Vec::new();
    }
    let start = usize::try_from(page - 1)
        .ok()
        .and_then(|p| p.checked_mul(QUESTIONS_PER_PAGE));
    match start {
        Some(start) if start < items.len() => {
            let end = (start + QUESTIONS_PER_PAGE).min(items.len());
            items[start..end].to_vec()
        }
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(page: &str) -> HashMap<String, String> {
        HashMap::from([("page".to_string(), page.to_string())])
    }

    #[test]
    fn test_page_param() {
        assert_eq!(page_param(&HashMap::new()), 1);
        assert_eq!(page_param(&query("3")), 3);
        assert_eq!(page_param(&query("abc")), 1);
        assert_eq!(page_param(&query("-2")), -2);
    }

    #[test]
    fn test_page_slices() {
        let items: Vec<u32> = (0..25).collect();
        assert_eq!(paginate(1, &items), (0..10).collect::<Vec<_>>());
        assert_eq!(paginate(2, &items), (10..20).collect::<Vec<_>>());
        assert_eq!(paginate(3, &items), (20..25).collect::<Vec<_>>());
    }

    #[test]
    fn test_out_of_range_pages_are_empty() {
        let items: Vec<u32> = (0..25).collect();
        assert!(paginate(4, &items).is_empty());
        assert!(paginate(0, &items).is_empty());
        assert!(paginate(-1, &items).is_empty());
        assert!(paginate(i64::MAX, &items).is_empty());
        assert!(paginate::<u32>(1, &[]).is_empty());
    }

    #[test]
    fn test_pages_never_exceed_page_size() {
        for total in [0usize, 1, 9, 10, 11, 47] {
            let items: Vec<usize> = (0..total).collect();
            for page in 1..=6 {
                let slice = paginate(page, &items);
                assert!(slice.len() <= QUESTIONS_PER_PAGE);
                let start = (page as usize - 1) * QUESTIONS_PER_PAGE;
                let expected: Vec<usize> = items.iter().copied().skip(start).take(10).collect();
                assert_eq!(slice, expected);
            }
        }
    }
}
