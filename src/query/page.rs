//! Pager
//!
//! Selects `[number * size, number * size + size)` from an ordered result.

use super::errors::{QueryError, QueryResult};

/// Page number used when `pageNumber` is absent
pub const DEFAULT_PAGE_NUMBER: usize = 0;

/// Page size used when `pageSize` is absent
pub const DEFAULT_PAGE_SIZE: usize = 3;

/// Zero-based page of a result set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSpec {
    pub number: usize,
    pub size: usize,
}

impl Default for PageSpec {
    fn default() -> Self {
        Self {
            number: DEFAULT_PAGE_NUMBER,
            size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PageSpec {
    /// Build a page, rejecting a negative number or a non-positive size
    pub fn new(number: i64, size: i64) -> QueryResult<Self> {
        let number = usize::try_from(number).map_err(|_| QueryError::InvalidPageNumber(number))?;
        let size = match usize::try_from(size) {
            Ok(size) if size > 0 => size,
            _ => return Err(QueryError::InvalidPageSize(size)),
        };
        Ok(Self { number, size })
    }

    /// Index of the first record on this page
    pub fn offset(&self) -> usize {
        self.number.saturating_mul(self.size)
    }

    /// Take this page out of an already ordered sequence
    pub fn slice<T>(&self, items: impl IntoIterator<Item = T>) -> Vec<T> {
        items
            .into_iter()
            .skip(self.offset())
            .take(self.size)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let page = PageSpec::default();
        assert_eq!(page.number, 0);
        assert_eq!(page.size, 3);
    }

    #[test]
    fn test_rejects_out_of_range() {
        assert_eq!(PageSpec::new(-1, 3), Err(QueryError::InvalidPageNumber(-1)));
        assert_eq!(PageSpec::new(0, 0), Err(QueryError::InvalidPageSize(0)));
        assert_eq!(PageSpec::new(0, -5), Err(QueryError::InvalidPageSize(-5)));
    }

    #[test]
    fn test_slice() {
        let items: Vec<u32> = (0..10).collect();

        assert_eq!(PageSpec::new(0, 3).unwrap().slice(items.clone()), vec![0, 1, 2]);
        assert_eq!(PageSpec::new(3, 3).unwrap().slice(items.clone()), vec![9]);
        assert!(PageSpec::new(4, 3).unwrap().slice(items).is_empty());
    }

    #[test]
    fn test_pages_cover_everything_once() {
        for total in 0..25usize {
            for size in 1..7usize {
                let items: Vec<usize> = (0..total).collect();
                let mut seen = Vec::new();
                let mut number = 0;
                loop {
                    let page = PageSpec { number, size }.slice(items.iter().copied());
                    assert!(page.len() <= size);
                    if page.is_empty() {
                        break;
                    }
                    seen.extend(page);
                    number += 1;
                }
                assert_eq!(seen, items);
            }
        }
    }

    #[test]
    fn test_huge_page_number_does_not_overflow() {
        let page = PageSpec {
            number: usize::MAX,
            size: 10,
        };
        assert!(page.slice(0..100).is_empty());
    }
}
