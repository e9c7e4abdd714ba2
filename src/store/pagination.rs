//! Offset pagination arithmetic shared by every listing query.
//!
//! Pages are 1-indexed. A page past the end is an empty slice, never an
//! error; an empty collection has zero pages.

/// Events shown on the home listing.
pub const HOME_PAGE_SIZE: i64 = 5;
/// Rows shown on the full event/organizer/attendee listings.
pub const LIST_PAGE_SIZE: i64 = 10;

/// One page of a listing plus the numbers the pagination links need.
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub number: i64,
    pub total_pages: i64,
    pub total_count: i64,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, number: i64, total_count: i64, page_size: i64) -> Self {
        Self {
            items,
            number,
            total_pages: total_pages(total_count, page_size),
            total_count,
        }
    }
}

/// `ceil(total_count / page_size)`; zero rows means zero pages.
pub fn total_pages(total_count: i64, page_size: i64) -> i64 {
    (total_count + page_size - 1) / page_size
}

/// Requested page numbers below 1 are treated as the first page rather
/// than turning into a negative OFFSET.
pub fn clamp_page(page: Option<i64>) -> i64 {
    page.unwrap_or(1).max(1)
}

/// Saturates instead of overflowing: an absurdly large page number lands
/// past the end of the collection and selects nothing.
pub fn offset(page: i64, page_size: i64) -> i64 {
    (page - 1).saturating_mul(page_size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages_is_ceiling() {
        assert_eq!(total_pages(0, 5), 0);
        assert_eq!(total_pages(1, 5), 1);
        assert_eq!(total_pages(5, 5), 1);
        assert_eq!(total_pages(6, 5), 2);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(99, 10), 10);
    }

    #[test]
    fn test_clamp_page_defaults_and_floors() {
        assert_eq!(clamp_page(None), 1);
        assert_eq!(clamp_page(Some(3)), 3);
        assert_eq!(clamp_page(Some(0)), 1);
        assert_eq!(clamp_page(Some(-7)), 1);
    }

    #[test]
    fn test_offset_steps_by_page_size() {
        assert_eq!(offset(1, 5), 0);
        assert_eq!(offset(2, 5), 5);
        assert_eq!(offset(4, 10), 30);
    }

    #[test]
    fn test_offset_saturates_on_huge_page() {
        assert_eq!(offset(clamp_page(Some(i64::MAX)), HOME_PAGE_SIZE), i64::MAX);
        assert_eq!(offset(i64::MAX, LIST_PAGE_SIZE), i64::MAX);
        assert!(offset(clamp_page(Some(i64::MAX)), LIST_PAGE_SIZE) >= 0);
    }

    // The slices of all pages, concatenated in page order, must reproduce
    // the sorted collection exactly once. Exercised here against an
    // in-memory collection with the same LIMIT/OFFSET arithmetic the SQL
    // queries use.
    #[test]
    fn test_pages_partition_the_collection() {
        for (total, page_size) in [(0i64, 5i64), (4, 5), (5, 5), (23, 5), (30, 10)] {
            let collection: Vec<i64> = (0..total).collect();
            let pages = total_pages(total, page_size);

            let mut concatenated = Vec::new();
            for page in 1..=pages {
                let start = offset(page, page_size) as usize;
                let slice: Vec<i64> = collection.iter().skip(start).take(page_size as usize).copied().collect();
                assert!(!slice.is_empty(), "page {page} of {pages} must not be empty");
                concatenated.extend(slice);
            }
            assert_eq!(concatenated, collection);

            // Past-the-end pages are empty slices, not errors.
            let beyond = offset(pages + 1, page_size) as usize;
            assert!(collection.iter().skip(beyond).next().is_none());
        }
    }
}
