//! # View State
//!
//! The tuple that selects what the list shows: search term, page and page
//! size. It lives in memory for the session and is mirrored to a URL query
//! string so a view can be bookmarked or shared.
//!
//! ## Rules
//!
//! - Changing the search term or the page size goes back to page 1.
//! - After the result count changes, a page past the last page is clamped
//!   down to the last page. With no results at all the page stays where it
//!   is (page 1 after a new search), never 0.
//! - The query string only carries values that differ from their defaults:
//!   `search` (non-empty), `page` (> 1), `perPage` (not the smallest size).
//! - Reading a query string never fails. Missing or malformed values become
//!   defaults and unknown parameters are ignored.

use crate::query::{Page, PageSize};
use serde::Serialize;
use url::form_urlencoded;

pub const SEARCH_PARAM: &str = "search";
pub const PAGE_PARAM: &str = "page";
pub const PER_PAGE_PARAM: &str = "perPage";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ViewState {
    pub search: String,
    pub page: Page,
    pub page_size: PageSize,
}

impl ViewState {
    pub fn new(search: impl Into<String>, page: Page, page_size: PageSize) -> Self {
        Self {
            search: search.into(),
            page,
            page_size,
        }
    }

    /// Reads a query string such as `?search=dev&page=2&perPage=10`.
    /// The leading `?` is optional. The first occurrence of a parameter wins.
    pub fn from_query(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let mut search = None;
        let mut page = None;
        let mut per_page = None;

        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            let slot = match &*key {
                SEARCH_PARAM => &mut search,
                PAGE_PARAM => &mut page,
                PER_PAGE_PARAM => &mut per_page,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.into_owned());
            }
        }

        Self {
            search: search.unwrap_or_default(),
            page: Page::coerce(page.as_deref()),
            page_size: PageSize::coerce(per_page.as_deref()),
        }
    }

    /// The canonical query string, without a leading `?`. Empty when every
    /// value is at its default.
    pub fn to_query(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        if !self.search.is_empty() {
            serializer.append_pair(SEARCH_PARAM, &self.search);
        }
        if !self.page.is_first() {
            serializer.append_pair(PAGE_PARAM, &self.page.to_string());
        }
        if !self.page_size.is_default() {
            serializer.append_pair(PER_PAGE_PARAM, &self.page_size.to_string());
        }
        serializer.finish()
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
        self.page = Page::FIRST;
    }

    pub fn set_page_size(&mut self, page_size: PageSize) {
        self.page_size = page_size;
        self.page = Page::FIRST;
    }

    pub fn set_page(&mut self, page: Page) {
        self.page = page;
    }

    /// Clamps the page to `total_pages` when it points past the end.
    /// Returns true if the page changed.
    pub fn converge(&mut self, total_pages: usize) -> bool {
        match Page::new(total_pages) {
            Some(last) if self.page > last => {
                self.page = last;
                true
            }
            _ => false,
        }
    }

    /// Converges against `total_pages` and returns the query string the
    /// address bar should be replaced with.
    pub fn reconcile(&mut self, total_pages: usize) -> String {
        self.converge(total_pages);
        self.to_query()
    }
}
