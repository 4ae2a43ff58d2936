//! Pagination container for search results.

use serde::ser::{Serialize, SerializeStruct, Serializer};

/// One page of resolved records.
///
/// Pages are 1-indexed. Serializes as `{ "meta": {...}, "data": [...] }`.
#[derive(Debug, Clone, PartialEq)]
pub struct Paginator<T> {
    total: u64,
    per_page: usize,
    current_page: usize,
    items: Vec<T>,
}

/// Summary of a page, used when serializing a [`Paginator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct PaginationMeta {
    pub total: u64,
    pub per_page: usize,
    pub current_page: usize,
    pub first_page: usize,
    pub last_page: usize,
}

impl<T> Paginator<T> {
    pub fn new(total: u64, per_page: usize, current_page: usize, items: Vec<T>) -> Self {
        Self {
            total,
            per_page,
            current_page,
            items,
        }
    }

    /// Total number of matching records across all pages.
    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn per_page(&self) -> usize {
        self.per_page
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn first_page(&self) -> usize {
        1
    }

    /// Number of the last page; never less than 1.
    pub fn last_page(&self) -> usize {
        if self.per_page == 0 {
            return 1;
        }
        let pages = self.total.div_ceil(self.per_page as u64);
        usize::try_from(pages).unwrap_or(usize::MAX).max(1)
    }

    /// Whether the results span more than one page.
    pub fn has_pages(&self) -> bool {
        self.last_page() > 1
    }

    pub fn has_more_pages(&self) -> bool {
        self.current_page < self.last_page()
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    /// Number of records on this page.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn meta(&self) -> PaginationMeta {
        PaginationMeta {
            total: self.total,
            per_page: self.per_page,
            current_page: self.current_page,
            first_page: self.first_page(),
            last_page: self.last_page(),
        }
    }
}

impl<T: Serialize> Serialize for Paginator<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Paginator", 2)?;
        state.serialize_field("meta", &self.meta())?;
        state.serialize_field("data", &self.items)?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_page_arithmetic() {
        let page = Paginator::new(45, 20, 2, vec![1, 2, 3]);

        assert_eq!(page.last_page(), 3);
        assert!(page.has_pages());
        assert!(page.has_more_pages());
        assert_eq!(page.len(), 3);
    }

    #[test]
    fn test_last_page() {
        let page = Paginator::new(40, 20, 2, vec!["a"]);
        assert_eq!(page.last_page(), 2);
        assert!(!page.has_more_pages());
    }

    #[test]
    fn test_empty_results_have_one_page() {
        let page: Paginator<u8> = Paginator::new(0, 20, 1, vec![]);

        assert_eq!(page.last_page(), 1);
        assert!(!page.has_pages());
        assert!(page.is_empty());
    }

    #[test]
    fn test_zero_per_page() {
        let page: Paginator<u8> = Paginator::new(10, 0, 1, vec![]);
        assert_eq!(page.last_page(), 1);
    }

    #[test]
    fn test_serialize() {
        let page = Paginator::new(3, 2, 1, vec!["x", "y"]);

        assert_eq!(
            serde_json::to_value(&page).unwrap(),
            json!({
                "meta": {
                    "total": 3,
                    "per_page": 2,
                    "current_page": 1,
                    "first_page": 1,
                    "last_page": 2
                },
                "data": ["x", "y"]
            })
        );
    }
}
