use crate::commands::{CmdMessage, CmdResult, Listing};
use crate::error::Result;
use crate::query;
use crate::store::backend::StorageBackend;
use crate::store::record_store::RecordStore;
use crate::view_state::ViewState;

/// Filters and paginates the collection for `state`.
///
/// The page is converged first: a page past the last one is clamped, so
/// the rows returned are never an empty page of a non-empty result. The
/// listing carries the converged state and its query string.
pub fn run<B: StorageBackend>(store: &RecordStore<B>, mut state: ViewState) -> Result<CmdResult> {
    let matches = query::filter(store.records(), &state.search).len();
    let query = state.reconcile(query::total_pages(matches, state.page_size));
    let view = query::run(store.records(), &state.search, state.page, state.page_size);

    let mut result = CmdResult::default().with_listed_records(view.rows.clone());
    if view.total_matches == 0 {
        let message = if state.search.is_empty() {
            "No records yet".to_string()
        } else {
            format!("No records match \"{}\"", state.search)
        };
        result.add_message(CmdMessage::info(message));
    }
    result.listing = Some(Listing { state, view, query });
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RecordId;
    use crate::query::{Page, PageSize};
    use crate::test_utils::seeded_store;

    fn ids(result: &CmdResult) -> Vec<u64> {
        result.listed_records.iter().map(|r| r.id.0).collect()
    }

    #[test]
    fn default_state_shows_first_page() {
        let result = run(&seeded_store(), ViewState::default()).unwrap();
        assert_eq!(ids(&result), vec![1, 2, 3, 4, 5]);
        let listing = result.listing.unwrap();
        assert_eq!(listing.view.total_pages, 3);
        assert_eq!(listing.query, "");
    }

    #[test]
    fn third_page_of_five() {
        let state = ViewState::new("", Page::new(3).unwrap(), PageSize::default());
        let result = run(&seeded_store(), state).unwrap();
        assert_eq!(ids(&result), vec![11, 12, 13, 14, 15]);
        assert_eq!(result.listing.unwrap().query, "page=3");
    }

    #[test]
    fn page_past_end_is_clamped() {
        let state = ViewState::from_query("search=developer&page=7");
        let result = run(&seeded_store(), state).unwrap();
        assert_eq!(ids(&result), vec![15]);
        let listing = result.listing.unwrap();
        assert_eq!(listing.state.page.get(), 2);
        assert_eq!(listing.query, "search=developer&page=2");
    }

    #[test]
    fn no_matches_keeps_page_one() {
        let mut state = ViewState::default();
        state.set_search("zzz");
        let result = run(&seeded_store(), state).unwrap();

        assert!(result.listed_records.is_empty());
        assert_eq!(result.messages[0].content, "No records match \"zzz\"");
        let listing = result.listing.unwrap();
        assert_eq!(listing.view.total_pages, 0);
        assert_eq!(listing.state.page, Page::FIRST);
    }

    #[test]
    fn larger_page_size_fits_all() {
        let state = ViewState::from_query("perPage=20");
        let result = run(&seeded_store(), state).unwrap();
        assert_eq!(result.listed_records.len(), 15);
        assert_eq!(result.listed_records.last().map(|r| r.id), Some(RecordId(15)));
    }
}
