//! Page-window construction for a bounded-width pager.

use super::PageItem;

/// Pagers with at most this many pages list every page without gaps.
pub const MAX_VISIBLE_PAGES: u32 = 5;

/// Build the display sequence for a pager.
///
/// Up to [`MAX_VISIBLE_PAGES`] pages are listed in full. Beyond that the
/// sequence is the first page, the interior part of a three-page window
/// around `current_page`, and the last page, with a [`PageItem::Gap`]
/// wherever pages are skipped. The window is centred on `current_page` and
/// shifted to stay within `[1, total_pages]`, so the first and last pages
/// still show two neighbours: `(1, 20)` gives `[1, 2, 3, …, 20]`.
///
/// `current_page` outside `[1, total_pages]` is clamped into range first.
/// `total_pages == 0` yields an empty sequence.
pub fn build_page_numbers(current_page: u32, total_pages: u32) -> Vec<PageItem> {
    if total_pages == 0 {
        return Vec::new();
    }

    if total_pages <= MAX_VISIBLE_PAGES {
        return (1..=total_pages).map(PageItem::Page).collect();
    }

    // Centre of the three-page window, kept off the first and last pages.
    let centre = current_page.clamp(2, total_pages - 1);
    let window_start = centre - 1;
    let window_end = centre + 1;

    let start = window_start.max(2);
    let end = window_end.min(total_pages - 1);

    let mut pages = Vec::with_capacity(MAX_VISIBLE_PAGES as usize + 2);
    pages.push(PageItem::Page(1));

    if start > 2 {
        pages.push(PageItem::Gap);
    }

    pages.extend((start..=end).map(PageItem::Page));

    if end < total_pages - 1 {
        pages.push(PageItem::Gap);
    }

    pages.push(PageItem::Page(total_pages));
    pages
}
