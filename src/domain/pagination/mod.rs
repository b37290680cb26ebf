//! Pagination domain — pager display items and page-count estimation.

pub mod window;

use serde::{Serialize, Serializer};

pub use window::{build_page_numbers, MAX_VISIBLE_PAGES};

/// Page count assumed while the API keeps returning full pages below page 100.
const ESTIMATE_STEP: u32 = 100;

// ─── PageItem ────────────────────────────────────────────────────────────────

/// One entry of a pager: a concrete page or an ellipsis gap.
///
/// Gaps are not navigable. Serializes as the page number or `"ellipsis"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageItem {
    Page(u32),
    Gap,
}

impl PageItem {
    pub fn page(&self) -> Option<u32> {
        match self {
            Self::Page(n) => Some(*n),
            Self::Gap => None,
        }
    }

    pub fn is_gap(&self) -> bool {
        matches!(self, Self::Gap)
    }
}

impl std::fmt::Display for PageItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Page(n) => write!(f, "{}", n),
            Self::Gap => write!(f, "…"),
        }
    }
}

impl Serialize for PageItem {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Page(n) => serializer.serialize_u32(*n),
            Self::Gap => serializer.serialize_str("ellipsis"),
        }
    }
}

// ─── Pagination ──────────────────────────────────────────────────────────────

/// Pager state for a list whose true length the API does not report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Pagination {
    pub current_page: u32,
    pub total_pages: u32,
    pub has_more_pages: bool,
}

impl Pagination {
    /// Derive pager state from one fetched page: a full page means more may follow.
    pub fn from_fetch(current_page: u32, per_page: u32, fetched: usize) -> Self {
        let current_page = current_page.max(1);
        let has_more_pages = per_page > 0 && fetched == per_page as usize;
        Self {
            current_page,
            total_pages: estimate_total_pages(current_page, has_more_pages),
            has_more_pages,
        }
    }

    pub fn items(&self) -> Vec<PageItem> {
        build_page_numbers(self.current_page, self.total_pages)
    }

    pub fn is_last_page(&self) -> bool {
        !self.has_more_pages || self.current_page >= self.total_pages
    }

    /// Page reached by the "previous" control, if enabled.
    pub fn previous(&self) -> Option<u32> {
        (self.current_page > 1).then(|| self.current_page - 1)
    }

    /// Page reached by the "next" control, if enabled.
    pub fn next(&self) -> Option<u32> {
        (!self.is_last_page()).then(|| self.current_page.saturating_add(1))
    }
}

/// Estimate a page count when only "is there another page" is known.
///
/// With more pages available the estimate is 100, or the next hundred past
/// `current_page` plus one more hundred once page 100 is reached. Otherwise
/// the current page is the last.
pub fn estimate_total_pages(current_page: u32, has_more_pages: bool) -> u32 {
    if !has_more_pages {
        return current_page;
    }
    if current_page >= ESTIMATE_STEP {
        current_page
            .div_ceil(ESTIMATE_STEP)
            .saturating_mul(ESTIMATE_STEP)
            .saturating_add(ESTIMATE_STEP)
    } else {
        ESTIMATE_STEP
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_item_serializes_gap_as_ellipsis() {
        let items = vec![PageItem::Page(1), PageItem::Gap, PageItem::Page(20)];
        assert_eq!(serde_json::to_string(&items).unwrap(), r#"[1,"ellipsis",20]"#);
        assert_eq!(PageItem::Gap.to_string(), "…");
        assert_eq!(PageItem::Page(7).page(), Some(7));
    }

    #[test]
    fn test_estimate_total_pages() {
        assert_eq!(estimate_total_pages(1, true), 100);
        assert_eq!(estimate_total_pages(99, true), 100);
        assert_eq!(estimate_total_pages(100, true), 200);
        assert_eq!(estimate_total_pages(101, true), 300);
        assert_eq!(estimate_total_pages(250, true), 400);
        assert_eq!(estimate_total_pages(37, false), 37);
    }

    #[test]
    fn test_from_fetch_full_page_has_more() {
        let p = Pagination::from_fetch(3, 100, 100);
        assert!(p.has_more_pages);
        assert_eq!(p.total_pages, 100);
        assert_eq!(p.previous(), Some(2));
        assert_eq!(p.next(), Some(4));
    }

    #[test]
    fn test_from_fetch_short_page_is_last() {
        let p = Pagination::from_fetch(12, 100, 40);
        assert!(!p.has_more_pages);
        assert_eq!(p.total_pages, 12);
        assert!(p.is_last_page());
        assert_eq!(p.next(), None);
        assert_eq!(p.items().last(), Some(&PageItem::Page(12)));
    }

    #[test]
    fn test_first_page_has_no_previous() {
        let p = Pagination::from_fetch(1, 50, 50);
        assert_eq!(p.previous(), None);
        assert_eq!(
            p.items(),
            vec![
                PageItem::Page(1),
                PageItem::Page(2),
                PageItem::Page(3),
                PageItem::Gap,
                PageItem::Page(100)
            ]
        );
    }

    #[test]
    fn test_extreme_pages_saturate() {
        assert_eq!(estimate_total_pages(u32::MAX, true), u32::MAX);
        assert_eq!(estimate_total_pages(u32::MAX - 150, true), u32::MAX);

        let p = Pagination::from_fetch(u32::MAX, 10, 10);
        assert_eq!(p.total_pages, u32::MAX);
        assert!(p.is_last_page());
        assert_eq!(p.next(), None);

        let p = Pagination::from_fetch(u32::MAX - 1, 10, 10);
        assert_eq!(p.next(), Some(u32::MAX));
        assert_eq!(p.items().last(), Some(&PageItem::Page(u32::MAX)));
    }
}
