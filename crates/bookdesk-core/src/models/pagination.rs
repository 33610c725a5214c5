use serde::{Deserialize, Serialize};

/// Page-count metadata shown next to a paginated table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationInfo {
    pub current_page: usize,
    pub total_pages: usize,
    pub total_items: usize,
    pub items_per_page: usize,
}

impl PaginationInfo {
    pub fn new(total_items: usize, current_page: usize, items_per_page: usize) -> Self {
        Self {
            current_page,
            total_pages: total_pages(total_items, items_per_page),
            total_items,
            items_per_page,
        }
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1 && self.total_pages > 0
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }
}

/// `ceil(total_items / items_per_page)`. Zero items yield zero pages, and so
/// does a zero page size.
pub fn total_pages(total_items: usize, items_per_page: usize) -> usize {
    if items_per_page == 0 {
        return 0;
    }
    total_items.div_ceil(items_per_page)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(25, 10), 3);
        assert_eq!(total_pages(20, 10), 2);
        assert_eq!(total_pages(1, 10), 1);
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(5, 0), 0);
    }

    #[test]
    fn test_navigation_flags() {
        let info = PaginationInfo::new(25, 1, 10);
        assert!(!info.has_previous());
        assert!(info.has_next());

        let last = PaginationInfo::new(25, 3, 10);
        assert!(last.has_previous());
        assert!(!last.has_next());

        let empty = PaginationInfo::new(0, 1, 10);
        assert!(!empty.has_previous());
        assert!(!empty.has_next());
    }
}
