use crate::error::Result;
use crate::query_builder::PageRequest;
use serde::{Deserialize, Serialize};
use std::future::Future;

/// One page of results plus the total matching count across all pages.
///
/// Invariants: `content.len() <= page_size` and `total >= content.len()`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub content: Vec<T>,
    pub total: i64,
    pub page_number: u32,
    pub page_size: u32,
    pub total_pages: u32,
}

impl<T> Page<T> {
    /// Assemble the page envelope from fetched content, the originating
    /// request, and the resolved total. Pure, no I/O.
    pub fn from_parts(content: Vec<T>, request: &PageRequest, total: i64) -> Self {
        let total_pages = if request.size == 0 {
            // Guarded by PageRequest::validate; kept for the pure-function
            // contract of this constructor.
            0
        } else {
            u32::try_from((total.max(0) as u64).div_ceil(u64::from(request.size))).unwrap_or(u32::MAX)
        };

        Self {
            content,
            total,
            page_number: request.page,
            page_size: request.size,
            total_pages,
        }
    }

    pub fn has_next(&self) -> bool {
        u64::from(self.page_number) + 1 < u64::from(self.total_pages)
    }

    pub fn has_previous(&self) -> bool {
        self.page_number > 0
    }
}

/// Decide whether the total can be deduced from the fetched page alone.
///
/// Returns `Some(total)` when the count query can be skipped:
/// - first page fetched fewer rows than requested: the page is both first
///   and last, so the total is the content length;
/// - a later page fetched a non-empty, partial page: it is provably the last
///   page, so the total is `offset + content length`.
///
/// Returns `None` otherwise (full page, or an empty page past the end):
/// the caller must run the exact count. Elision is an optimization, never an
/// approximation.
pub fn resolve_total(content_len: usize, request: &PageRequest) -> Option<i64> {
    let fetched = content_len as i64;
    let offset = request.offset() as i64;
    let size = request.size as usize;

    if offset == 0 && content_len < size {
        return Some(fetched);
    }

    if offset > 0 && content_len > 0 && content_len < size {
        return Some(offset + fetched);
    }

    None
}

/// Package fetched content into a [`Page`], invoking the exact-count
/// function lazily, only when [`resolve_total`] cannot prove the total.
///
/// ```
/// use roster_core::search::paged;
/// use roster_core::{PageRequest, RosterError};
///
/// // Three rows on an undersized first page: the total is provable from
/// // the content alone and the count function's result is never used.
/// let page = tokio_test::block_on(paged(
///     vec![1, 2, 3],
///     &PageRequest::new(0, 10),
///     || async { Ok::<i64, RosterError>(99) },
/// ))
/// .unwrap();
/// assert_eq!(page.total, 3);
/// assert_eq!(page.total_pages, 1);
/// ```
pub async fn paged<T, F, Fut>(content: Vec<T>, request: &PageRequest, count: F) -> Result<Page<T>>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<i64>>,
{
    let total = match resolve_total(content.len(), request) {
        Some(total) => {
            tracing::debug!(total, "count query elided");
            total
        }
        None => count().await?,
    };

    Ok(Page::from_parts(content, request, total))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RosterError;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_first_short_page_elides_count() {
        // offset 0, 3 rows fetched, 10 requested: total is provably 3
        assert_eq!(resolve_total(3, &PageRequest::new(0, 10)), Some(3));
    }

    #[test]
    fn test_empty_first_page_elides_count() {
        assert_eq!(resolve_total(0, &PageRequest::new(0, 10)), Some(0));
    }

    #[test]
    fn test_full_page_requires_count() {
        assert_eq!(resolve_total(10, &PageRequest::new(0, 10)), None);
        assert_eq!(resolve_total(10, &PageRequest::new(3, 10)), None);
    }

    #[test]
    fn test_partial_later_page_is_provably_last() {
        // page 2 of size 10 fetched 4 rows: total is exactly 24
        assert_eq!(resolve_total(4, &PageRequest::new(2, 10)), Some(24));
    }

    #[test]
    fn test_empty_later_page_requires_count() {
        // offset past the end of data proves nothing about the total
        assert_eq!(resolve_total(0, &PageRequest::new(5, 10)), None);
    }

    #[tokio::test]
    async fn test_paged_never_counts_when_total_is_provable() {
        let invocations = AtomicUsize::new(0);
        let page = paged(vec![1, 2, 3], &PageRequest::new(0, 10), || async {
            invocations.fetch_add(1, Ordering::SeqCst);
            Ok::<i64, RosterError>(999)
        })
        .await
        .unwrap();

        assert_eq!(invocations.load(Ordering::SeqCst), 0);
        assert_eq!(page.total, 3);
        assert_eq!(page.total_pages, 1);
    }

    #[tokio::test]
    async fn test_paged_counts_exactly_once_for_full_page() {
        let invocations = AtomicUsize::new(0);
        let page = paged(vec![1, 2, 3], &PageRequest::new(0, 3), || async {
            invocations.fetch_add(1, Ordering::SeqCst);
            Ok::<i64, RosterError>(7)
        })
        .await
        .unwrap();

        assert_eq!(invocations.load(Ordering::SeqCst), 1);
        assert_eq!(page.total, 7);
        assert_eq!(page.total_pages, 3);
    }

    #[tokio::test]
    async fn test_paged_count_failure_fails_the_whole_request() {
        let result = paged(vec![1, 2, 3], &PageRequest::new(0, 3), || async {
            Err::<i64, RosterError>(RosterError::Database(sqlx::Error::PoolClosed))
        })
        .await;

        assert!(matches!(result, Err(RosterError::Database(_))));
    }

    #[test]
    fn test_total_pages_is_ceiling_division() {
        let request = PageRequest::new(0, 3);
        assert_eq!(Page::<i32>::from_parts(vec![], &request, 4).total_pages, 2);
        assert_eq!(Page::<i32>::from_parts(vec![], &request, 6).total_pages, 2);
        assert_eq!(Page::<i32>::from_parts(vec![], &request, 7).total_pages, 3);
        assert_eq!(Page::<i32>::from_parts(vec![], &request, 0).total_pages, 0);
    }

    #[test]
    fn test_page_navigation_flags() {
        let request = PageRequest::new(0, 3);
        let first = Page::from_parts(vec![1, 2, 3], &request, 7);
        assert!(first.has_next());
        assert!(!first.has_previous());

        let last_request = PageRequest::new(2, 3);
        let last = Page::from_parts(vec![7], &last_request, 7);
        assert!(!last.has_next());
        assert!(last.has_previous());
    }
}
