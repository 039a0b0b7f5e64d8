// Villa Catalog — Pagination Windower
//
// Computes the slice bounds for one result page and the compressed
// page-number sequence surfaced as pagination buttons.

/// Page size used by the listing grid.
pub const DEFAULT_PAGE_SIZE: usize = 12;

/// Maximum number of page buttons surfaced at once.
pub const MAX_PAGE_BUTTONS: usize = 5;

/// A resolved page window over a collection of `total` items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageWindow {
    /// The effective page number, clamped into `[1, total_pages]`.
    pub page: usize,
    pub total_pages: usize,
    /// Start index of the page slice (inclusive).
    pub start: usize,
    /// End index of the page slice (exclusive, clamped to `total`).
    pub end: usize,
    /// Page numbers to surface as buttons, at most [`MAX_PAGE_BUTTONS`].
    pub buttons: Vec<usize>,
}

/// Compute the page window for `total` items at `page_size` per page.
///
/// The requested page is clamped silently; an empty collection yields a
/// single empty page. `page_size` must be positive — a zero page size is
/// a programmer error, not an input condition.
pub fn window(total: usize, page_size: usize, page: usize) -> PageWindow {
    assert!(page_size > 0, "page_size must be positive");

    if total == 0 {
        return PageWindow {
            page: 1,
            total_pages: 1,
            start: 0,
            end: 0,
            buttons: vec![1],
        };
    }

    let total_pages = total.div_ceil(page_size);
    let page = page.clamp(1, total_pages);
    let start = (page - 1) * page_size;
    let end = (start + page_size).min(total);

    PageWindow {
        page,
        total_pages,
        start,
        end,
        buttons: buttons(page, total_pages),
    }
}

/// The compressed page-number sequence.
///
/// All pages when five or fewer exist; the first five while on pages 1–3;
/// the last five while within two pages of the end; otherwise the current
/// page with two neighbours on each side.
fn buttons(page: usize, total_pages: usize) -> Vec<usize> {
    let range = if total_pages <= MAX_PAGE_BUTTONS {
        1..=total_pages
    } else if page <= 3 {
        1..=MAX_PAGE_BUTTONS
    } else if page >= total_pages - 2 {
        (total_pages - (MAX_PAGE_BUTTONS - 1))..=total_pages
    } else {
        (page - 2)..=(page + 2)
    };
    range.collect()
}
