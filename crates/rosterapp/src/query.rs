//! # Query Engine
//!
//! Pure derivation of what is displayed from a collection snapshot: first a
//! case-insensitive substring [`filter`], then deterministic pagination.
//! Nothing here holds state or touches storage.
//!
//! ```text
//! collection ──filter(term)──▶ matches ──paginate(page, size)──▶ rows
//!                                 │
//!                                 └──total_pages(size)
//! ```
//!
//! `paginate` does not clamp: a page past the end is simply empty. Keeping
//! the page in range is the job of [`crate::view_state`].

use crate::model::{leading_integer, Record};
use serde::Serialize;
use std::fmt;

/// Allowed rows-per-page values. The first is the default.
pub const PAGE_SIZE_OPTIONS: [usize; 4] = [5, 10, 15, 20];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct PageSize(usize);

impl PageSize {
    pub fn new(value: usize) -> Option<PageSize> {
        PAGE_SIZE_OPTIONS
            .contains(&value)
            .then_some(PageSize(value))
    }

    /// Parses external input, falling back to the default for anything that
    /// is missing, non-numeric, or not one of the allowed sizes.
    pub fn coerce(input: Option<&str>) -> PageSize {
        input
            .and_then(leading_integer)
            .and_then(|v| usize::try_from(v).ok())
            .and_then(PageSize::new)
            .unwrap_or_default()
    }

    pub fn get(&self) -> usize {
        self.0
    }

    pub fn is_default(&self) -> bool {
        *self == PageSize::default()
    }
}

impl Default for PageSize {
    fn default() -> Self {
        PageSize(PAGE_SIZE_OPTIONS[0])
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A 1-based page number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Page(usize);

impl Page {
    pub const FIRST: Page = Page(1);

    pub fn new(value: usize) -> Option<Page> {
        (value >= 1).then_some(Page(value))
    }

    /// Parses external input; missing, non-numeric, zero or negative input
    /// becomes the first page.
    pub fn coerce(input: Option<&str>) -> Page {
        input
            .and_then(leading_integer)
            .and_then(|v| usize::try_from(v).ok())
            .and_then(Page::new)
            .unwrap_or_default()
    }

    pub fn get(&self) -> usize {
        self.0
    }

    pub fn is_first(&self) -> bool {
        *self == Page::FIRST
    }
}

impl Default for Page {
    fn default() -> Self {
        Page::FIRST
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn matches(record: &Record, needle: &str) -> bool {
    record.name.to_lowercase().contains(needle)
        || record.email.to_lowercase().contains(needle)
        || record.role.label().to_lowercase().contains(needle)
        || record.status.label().to_lowercase().contains(needle)
}

/// Records whose name, email, role or status contains `term`, ignoring case.
/// An empty term matches everything. Source order is kept.
pub fn filter<'a>(records: &'a [Record], term: &str) -> Vec<&'a Record> {
    if term.is_empty() {
        return records.iter().collect();
    }
    let needle = term.to_lowercase();
    records.iter().filter(|r| matches(r, &needle)).collect()
}

/// `ceil(len / page_size)`; 0 for an empty result.
pub fn total_pages(len: usize, page_size: PageSize) -> usize {
    len.div_ceil(page_size.get())
}

/// The slice for `page`, clipped to bounds. Pages past the end are empty.
pub fn paginate<T>(items: &[T], page: Page, page_size: PageSize) -> &[T] {
    let size = page_size.get();
    let start = (page.get() - 1).saturating_mul(size);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(size).min(items.len());
    &items[start..end]
}

/// One displayed page of a filtered collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryView {
    pub rows: Vec<Record>,
    pub total_matches: usize,
    pub total_pages: usize,
    pub page: Page,
    pub page_size: PageSize,
}

/// Filters, counts and paginates in one pass. `page` is used as given.
pub fn run(records: &[Record], term: &str, page: Page, page_size: PageSize) -> QueryView {
    let matched = filter(records, term);
    QueryView {
        rows: paginate(&matched, page, page_size)
            .iter()
            .map(|r| (*r).clone())
            .collect(),
        total_matches: matched.len(),
        total_pages: total_pages(matched.len(), page_size),
        page,
        page_size,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{seed_records, RecordId, Role};

    fn ids(records: &[&Record]) -> Vec<u64> {
        records.iter().map(|r| r.id.0).collect()
    }

    fn size(n: usize) -> PageSize {
        PageSize::new(n).unwrap()
    }

    #[test]
    fn empty_term_returns_collection_in_order() {
        let seed = seed_records();
        let all = filter(&seed, "");
        assert_eq!(all.len(), 15);
        assert!(all.iter().zip(seed.iter()).all(|(a, b)| *a == b));
    }

    #[test]
    fn role_search_is_case_insensitive() {
        let seed = seed_records();
        let devs = filter(&seed, "DeVeLoPeR");
        assert_eq!(ids(&devs), vec![1, 4, 7, 9, 12, 15]);
        assert!(devs.iter().all(|r| r.role == Role::Developer));
    }

    #[test]
    fn searches_name_email_and_status() {
        let seed = seed_records();
        assert_eq!(ids(&filter(&seed, "widodo")), vec![7]);
        assert_eq!(ids(&filter(&seed, "LINDA@")), vec![14]);
        assert_eq!(ids(&filter(&seed, "inactive")), vec![3, 6, 9, 12]);
        assert_eq!(ids(&filter(&seed, "qa eng")), vec![5, 10, 14]);
    }

    #[test]
    fn active_also_matches_inactive() {
        let seed = seed_records();
        assert_eq!(filter(&seed, "active").len(), 15);
    }

    #[test]
    fn no_match_is_empty() {
        let seed = seed_records();
        assert!(filter(&seed, "zzz").is_empty());
    }

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(total_pages(0, size(5)), 0);
        assert_eq!(total_pages(1, size(5)), 1);
        assert_eq!(total_pages(15, size(5)), 3);
        assert_eq!(total_pages(16, size(5)), 4);
        assert_eq!(total_pages(15, size(20)), 1);
    }

    #[test]
    fn paginate_third_page_of_fifteen() {
        let seed = seed_records();
        let page = paginate(&seed, Page::new(3).unwrap(), size(5));
        let got: Vec<RecordId> = page.iter().map(|r| r.id).collect();
        assert_eq!(got, (11..=15).map(RecordId).collect::<Vec<_>>());
    }

    #[test]
    fn paginate_clips_last_page() {
        let items: Vec<u32> = (1..=12).collect();
        assert_eq!(paginate(&items, Page::new(3).unwrap(), size(5)), &[11, 12]);
    }

    #[test]
    fn paginate_past_end_is_empty() {
        let items: Vec<u32> = (1..=12).collect();
        assert!(paginate(&items, Page::new(4).unwrap(), size(5)).is_empty());
        assert!(paginate(&items, Page::new(usize::MAX).unwrap(), size(20)).is_empty());
        let none: Vec<u32> = Vec::new();
        assert!(paginate(&none, Page::FIRST, size(5)).is_empty());
    }

    #[test]
    fn page_size_coercion() {
        assert_eq!(PageSize::coerce(Some("10")).get(), 10);
        assert_eq!(PageSize::coerce(Some("20rows")).get(), 20);
        assert_eq!(PageSize::coerce(Some("7")).get(), 5);
        assert_eq!(PageSize::coerce(Some("abc")).get(), 5);
        assert_eq!(PageSize::coerce(Some("-10")).get(), 5);
        assert_eq!(PageSize::coerce(None).get(), 5);
    }

    #[test]
    fn page_coercion() {
        assert_eq!(Page::coerce(Some("3")).get(), 3);
        assert_eq!(Page::coerce(Some("0")), Page::FIRST);
        assert_eq!(Page::coerce(Some("-2")), Page::FIRST);
        assert_eq!(Page::coerce(Some("two")), Page::FIRST);
        assert_eq!(Page::coerce(None), Page::FIRST);
    }

    #[test]
    fn run_composes_filter_and_pages() {
        let seed = seed_records();
        let view = run(&seed, "developer", Page::new(2).unwrap(), size(5));
        assert_eq!(view.total_matches, 6);
        assert_eq!(view.total_pages, 2);
        assert_eq!(view.rows.len(), 1);
        assert_eq!(view.rows[0].id, RecordId(15));
    }
}
