use std::fmt::{Debug, Display};

/// Aggregate root marker.
///
/// `Id` is the key type the repositories use to address the aggregate.
pub trait AggregateRoot {
    type Id: Copy + Debug + Display + Send + Sync + 'static;
}

/// One-based page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// Page number, starts at 1.
    pub page: u64,
    /// Page size.
    pub size: u64,
}

impl Pagination {
    pub const MAX_SIZE: u64 = 100;

    /// `None` unless both values are positive, `size` is at most [`Self::MAX_SIZE`] and the
    /// offset fits a signed 64 bit column.
    pub fn new(page: u64, size: u64) -> Option<Self> {
        if page == 0 || size == 0 || size > Self::MAX_SIZE {
            return None;
        }
        (page - 1)
            .checked_mul(size)
            .filter(|offset| *offset <= i64::MAX as u64)
            .map(|_| Self { page, size })
    }

    /// Rows to skip before this page.
    pub fn offset(&self) -> u64 {
        self.page.saturating_sub(1).saturating_mul(self.size)
    }
}

#[cfg(test)]
mod tests {
    use super::Pagination;

    #[test]
    fn test_pagination_rejects_zero() {
        assert!(Pagination::new(0, 10).is_none());
        assert!(Pagination::new(1, 0).is_none());
    }

    #[test]
    fn test_pagination_offset() {
        let page = Pagination::new(3, 10).unwrap();
        assert_eq!(page.offset(), 20);
        assert_eq!(Pagination::new(1, 5).unwrap().offset(), 0);
    }

    #[test]
    fn test_pagination_rejects_huge_values() {
        assert!(Pagination::new(u64::MAX, 2).is_none());
        assert!(Pagination::new(1, Pagination::MAX_SIZE + 1).is_none());
        assert!(Pagination::new(u64::MAX / 2, Pagination::MAX_SIZE).is_none());
        assert!(Pagination::new(2, Pagination::MAX_SIZE).is_some());
    }

    #[test]
    fn test_offset_saturates() {
        let page = Pagination {
            page: u64::MAX,
            size: 2,
        };
        assert_eq!(page.offset(), u64::MAX);
    }
}
