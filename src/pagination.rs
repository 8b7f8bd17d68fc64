// Page-number windowing for the auction list pager

use serde::{Serialize, Serializer};
use std::fmt;

/// Totals up to this many pages are shown in full, without ellipsis.
pub const PAGE_WINDOW_FULL_LIMIT: u32 = 7;

/// Text rendered for an ellipsis gap
pub const ELLIPSIS: &str = "...";

/// One entry of a rendered pager
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageMarker {
    /// A clickable page number (1-based)
    Page(u32),
    /// A non-clickable gap between page numbers
    Ellipsis,
}

impl PageMarker {
    pub fn page(&self) -> Option<u32> {
        match self {
            PageMarker::Page(n) => Some(*n),
            PageMarker::Ellipsis => None,
        }
    }

    pub fn is_ellipsis(&self) -> bool {
        matches!(self, PageMarker::Ellipsis)
    }
}

impl fmt::Display for PageMarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageMarker::Page(n) => write!(f, "{}", n),
            PageMarker::Ellipsis => f.write_str(ELLIPSIS),
        }
    }
}

// Pages go out as JSON numbers, gaps as the "..." string.
impl Serialize for PageMarker {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            PageMarker::Page(n) => serializer.serialize_u32(*n),
            PageMarker::Ellipsis => serializer.serialize_str(ELLIPSIS),
        }
    }
}

/// Clamp a requested page into `1..=total` (returns 1 when there are no pages).
pub fn clamp_page(current: u32, total: u32) -> u32 {
    current.clamp(1, total.max(1))
}

/// Build the ordered list of page markers for a pager.
///
/// Small totals are listed in full. Larger totals always show the first and
/// last page, plus a window of one page either side of `current`, with an
/// ellipsis standing in for each hidden run. On the first and last page the
/// window widens so that three numbers sit next to the current edge.
///
/// `current` must already lie within `1..=total`; see [`clamp_page`].
pub fn build_page_window(current: u32, total: u32) -> Vec<PageMarker> {
    if total <= PAGE_WINDOW_FULL_LIMIT {
        return (1..=total).map(PageMarker::Page).collect();
    }

    let last_inner = total - 1;
    let left = current.saturating_sub(1).min(total - 2).max(2);
    let right = current.saturating_add(1).max(3).min(last_inner);

    let mut markers = Vec::with_capacity(7);
    markers.push(PageMarker::Page(1));
    if left > 2 {
        markers.push(PageMarker::Ellipsis);
    }
    markers.extend((left..=right).map(PageMarker::Page));
    if right < last_inner {
        markers.push(PageMarker::Ellipsis);
    }
    markers.push(PageMarker::Page(total));
    markers
}

/// Render markers as a single space-separated line, e.g. `1 ... 9 10 11 ... 20`.
pub fn render_line(markers: &[PageMarker]) -> String {
    markers
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
