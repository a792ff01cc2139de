//! Offset pagination shared by the repositories and list endpoints.

/// A 0-based page request as the store sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub number: u64,
    pub size: u64,
}

impl PageRequest {
    pub fn new(number: u64, size: u64) -> Self {
        Self { number, size }
    }

    /// Number of items to skip before this page.
    pub fn offset(&self) -> u64 {
        self.number.saturating_mul(self.size)
    }

    /// Whether the page starts at or after the last of `total` items.
    ///
    /// Such a page is empty and need not reach the store; its offset may
    /// also exceed what the store accepts as a skip.
    pub fn starts_after(&self, total: u64) -> bool {
        self.offset() >= total
    }
}

/// One page of results plus the totals needed for list metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub content: Vec<T>,
    /// 0-based page number
    pub number: u64,
    pub size: u64,
    pub total_elements: u64,
}

impl<T> Page<T> {
    pub fn new(content: Vec<T>, request: PageRequest, total_elements: u64) -> Self {
        Self {
            content,
            number: request.number,
            size: request.size,
            total_elements,
        }
    }

    pub fn total_pages(&self) -> u64 {
        if self.size == 0 {
            return 0;
        }
        self.total_elements.div_ceil(self.size)
    }

    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            content: self.content.into_iter().map(f).collect(),
            number: self.number,
            size: self.size,
            total_elements: self.total_elements,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset() {
        assert_eq!(PageRequest::new(0, 10).offset(), 0);
        assert_eq!(PageRequest::new(3, 10).offset(), 30);
    }

    #[test]
    fn test_huge_page_starts_after_everything() {
        let last = PageRequest::new(i64::MAX as u64 - 1, 100);
        assert_eq!(last.offset(), u64::MAX);
        assert!(last.starts_after(0));
        assert!(last.starts_after(i64::MAX as u64));

        assert!(!PageRequest::new(0, 10).starts_after(1));
        assert!(!PageRequest::new(2, 10).starts_after(21));
        assert!(PageRequest::new(2, 10).starts_after(20));
        assert!(PageRequest::new(0, 10).starts_after(0));
    }

    #[test]
    fn test_total_pages_rounds_up() {
        let page: Page<u8> = Page::new(vec![], PageRequest::new(0, 10), 21);
        assert_eq!(page.total_pages(), 3);

        let exact: Page<u8> = Page::new(vec![], PageRequest::new(0, 10), 20);
        assert_eq!(exact.total_pages(), 2);

        let empty: Page<u8> = Page::new(vec![], PageRequest::new(0, 10), 0);
        assert_eq!(empty.total_pages(), 0);
    }

    #[test]
    fn test_map_keeps_totals() {
        let page = Page::new(vec![1, 2], PageRequest::new(1, 2), 5).map(|n| n * 10);
        assert_eq!(page.content, vec![10, 20]);
        assert_eq!(page.number, 1);
        assert_eq!(page.total_elements, 5);
    }
}
