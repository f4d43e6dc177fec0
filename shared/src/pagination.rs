//! ==============================================================================
//! pagination.rs - website list query and page controls
//! ==============================================================================
//!
//! purpose:
//!     the list view keeps one `WebsitesQuery` (page, limit, active filter).
//!     any change to it triggers exactly one fetch. changing the limit or the
//!     filter goes back to the first page in the same update.
//!
//! page controls:
//!     shown only when total > limit. page items follow the usual paginator
//!     layout: a few pages at each edge, a window around the current page,
//!     gaps in between.
//!
//! ==============================================================================

use std::collections::BTreeSet;

pub const DEFAULT_LIMIT: u32 = 10;
/// "results per page" choices
pub const LIMIT_OPTIONS: [u32; 3] = [10, 100, 1000];
/// pages always shown at each edge
pub const MARGIN_PAGES: u32 = 2;
/// pages shown around the current one
pub const PAGE_RANGE: u32 = 5;

// ==============================================================================
// query
// ==============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WebsitesQuery {
    /// zero-based page index
    pub page: u32,
    pub limit: u32,
    /// None lists every website
    pub active: Option<bool>,
}

impl Default for WebsitesQuery {
    fn default() -> Self {
        Self {
            page: 0,
            limit: DEFAULT_LIMIT,
            active: None,
        }
    }
}

impl WebsitesQuery {
    pub fn offset(&self) -> u64 {
        u64::from(self.page) * u64::from(self.limit)
    }

    pub fn with_page(self, page: u32) -> Self {
        Self { page, ..self }
    }

    /// a zero limit falls back to the default
    pub fn with_limit(self, limit: u32) -> Self {
        let limit = if limit == 0 { DEFAULT_LIMIT } else { limit };
        Self { page: 0, limit, ..self }
    }

    pub fn with_active(self, active: Option<bool>) -> Self {
        Self { page: 0, active, ..self }
    }

    /// `limit=..&offset=..[&active=..]`
    pub fn to_query_string(&self) -> String {
        let mut query = format!("limit={}&offset={}", self.limit, self.offset());
        if let Some(active) = self.active {
            query.push_str(&format!("&active={active}"));
        }
        query
    }

    pub fn page_count(&self, total: u64) -> u32 {
        let limit = u64::from(self.limit.max(1));
        u32::try_from(total.div_ceil(limit)).unwrap_or(u32::MAX)
    }

    pub fn needs_pagination(&self, total: u64) -> bool {
        total > u64::from(self.limit)
    }
}

// ==============================================================================
// select values
// ==============================================================================

/// status filter select: "" = all, "true" = active, anything else = inactive
pub fn parse_active_filter(value: &str) -> Option<bool> {
    match value {
        "" => None,
        v => Some(v == "true"),
    }
}

pub fn active_filter_value(active: Option<bool>) -> &'static str {
    match active {
        None => "",
        Some(true) => "true",
        Some(false) => "false",
    }
}

/// results-per-page select, unparseable values fall back to the default
pub fn parse_limit(value: &str) -> u32 {
    match value.trim().parse::<u32>() {
        Ok(limit) if limit > 0 => limit,
        _ => DEFAULT_LIMIT,
    }
}

// ==============================================================================
// page items
// ==============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    /// zero-based page index
    Page(u32),
    /// run of hidden pages, rendered as an ellipsis
    Gap,
}

pub fn page_items(current: u32, count: u32) -> Vec<PageItem> {
    if count == 0 {
        return Vec::new();
    }
    if count <= PAGE_RANGE + 2 * MARGIN_PAGES {
        return (0..count).map(PageItem::Page).collect();
    }

    let current = current.min(count - 1);
    let mut left = current.saturating_sub(PAGE_RANGE / 2);
    let mut right = left + PAGE_RANGE - 1;
    if right >= count {
        right = count - 1;
        left = right + 1 - PAGE_RANGE;
    }

    let mut shown = BTreeSet::new();
    shown.extend(0..MARGIN_PAGES);
    shown.extend(left..=right);
    shown.extend(count - MARGIN_PAGES..count);

    let mut items = Vec::with_capacity(shown.len() + 2);
    let mut prev: Option<u32> = None;
    for page in shown {
        if let Some(prev) = prev {
            match page - prev {
                1 => {}
                // lone hidden page, show it instead of a gap
                2 => items.push(PageItem::Page(prev + 1)),
                _ => items.push(PageItem::Gap),
            }
        }
        items.push(PageItem::Page(page));
        prev = Some(page);
    }
    items
}

// ==============================================================================
// tests
// ==============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use PageItem::{Gap, Page};

    #[test]
    fn test_default_query() {
        let query = WebsitesQuery::default();
        assert_eq!(query.limit, 10);
        assert_eq!(query.offset(), 0);
        assert_eq!(query.to_query_string(), "limit=10&offset=0");
    }

    #[test]
    fn test_offset_follows_page() {
        let query = WebsitesQuery::default().with_page(3);
        assert_eq!(query.offset(), 30);
        assert_eq!(query.to_query_string(), "limit=10&offset=30");
    }

    #[test]
    fn test_limit_and_filter_reset_page() {
        let query = WebsitesQuery::default().with_page(4).with_limit(100);
        assert_eq!(query.page, 0);
        assert_eq!(query.limit, 100);

        let query = query.with_page(2).with_active(Some(false));
        assert_eq!(query.page, 0);
        assert_eq!(query.to_query_string(), "limit=100&offset=0&active=false");
    }

    #[test]
    fn test_zero_limit_uses_default() {
        assert_eq!(WebsitesQuery::default().with_limit(0).limit, DEFAULT_LIMIT);
    }

    #[test]
    fn test_page_count() {
        let query = WebsitesQuery::default();
        assert_eq!(query.page_count(0), 0);
        assert_eq!(query.page_count(10), 1);
        assert_eq!(query.page_count(11), 2);
        assert!(!query.needs_pagination(10));
        assert!(query.needs_pagination(11));
    }

    #[test]
    fn test_select_values() {
        assert_eq!(parse_active_filter(""), None);
        assert_eq!(parse_active_filter("true"), Some(true));
        assert_eq!(parse_active_filter("false"), Some(false));
        for active in [None, Some(true), Some(false)] {
            assert_eq!(parse_active_filter(active_filter_value(active)), active);
        }
        assert_eq!(parse_limit("1000"), 1000);
        assert_eq!(parse_limit("abc"), DEFAULT_LIMIT);
        assert_eq!(parse_limit("0"), DEFAULT_LIMIT);
    }

    #[test]
    fn test_few_pages_all_shown() {
        assert!(page_items(0, 0).is_empty());
        assert_eq!(page_items(0, 3), vec![Page(0), Page(1), Page(2)]);
        assert_eq!(page_items(5, 9).len(), 9);
    }

    #[test]
    fn test_window_at_start() {
        assert_eq!(
            page_items(0, 20),
            vec![Page(0), Page(1), Page(2), Page(3), Page(4), Gap, Page(18), Page(19)]
        );
    }

    #[test]
    fn test_window_in_middle() {
        assert_eq!(
            page_items(10, 20),
            vec![
                Page(0),
                Page(1),
                Gap,
                Page(8),
                Page(9),
                Page(10),
                Page(11),
                Page(12),
                Gap,
                Page(18),
                Page(19),
            ]
        );
    }

    #[test]
    fn test_window_at_end() {
        assert_eq!(
            page_items(19, 20),
            vec![Page(0), Page(1), Gap, Page(15), Page(16), Page(17), Page(18), Page(19)]
        );
    }

    #[test]
    fn test_single_hidden_page_filled_in() {
        // window 3..=7 leaves only page 2 between it and the left margin
        let items = page_items(5, 20);
        assert_eq!(&items[..4], &[Page(0), Page(1), Page(2), Page(3)]);
    }

    proptest! {
        #[test]
        fn prop_offset_is_page_times_limit(page in 0u32..10_000, limit in 1u32..=1000) {
            let query = WebsitesQuery::default().with_limit(limit).with_page(page);
            prop_assert_eq!(query.offset(), u64::from(page) * u64::from(limit));
        }

        #[test]
        fn prop_current_page_always_listed(count in 1u32..500, current in 0u32..500) {
            let current = current % count;
            prop_assert!(page_items(current, count).contains(&Page(current)));
        }
    }
}
