use proptest::prelude::*;
use proptest::test_runner::Config;
use rosterapp::model::{Record, RecordFields, RecordId, RecordPatch, Role, Status};
use rosterapp::query::{filter, paginate, total_pages, Page, PageSize, PAGE_SIZE_OPTIONS};
use rosterapp::store::backend::StorageBackend;
use rosterapp::store::mem_backend::MemBackend;
use rosterapp::store::record_store::RecordStore;
use std::rc::Rc;

const KEY: &str = "prop_data";

fn fields_strategy() -> impl Strategy<Value = RecordFields> {
    (
        "[A-Za-z][A-Za-z ]{0,11}",
        "[a-z]{1,6}",
        0usize..Role::ALL.len(),
        any::<bool>(),
    )
        .prop_map(|(name, user, role, active)| {
            RecordFields::new(
                name,
                format!("{}@example.com", user),
                Role::ALL[role],
                if active { Status::Active } else { Status::Inactive },
            )
        })
}

fn collection_strategy() -> impl Strategy<Value = Vec<Record>> {
    proptest::collection::vec(fields_strategy(), 0..40).prop_map(|all| {
        all.into_iter()
            .zip(1u64..)
            .map(|(fields, id)| Record::new(RecordId(id), fields))
            .collect()
    })
}

fn page_size_strategy() -> impl Strategy<Value = PageSize> {
    proptest::sample::select(PAGE_SIZE_OPTIONS.to_vec()).prop_map(|n| PageSize::new(n).unwrap())
}

fn empty_store() -> RecordStore<MemBackend> {
    let backend = Rc::new(MemBackend::new());
    backend.write(KEY, "[]").unwrap();
    RecordStore::open(backend, KEY)
}

proptest! {
    #![proptest_config(Config::with_cases(128))]

    #[test]
    fn pages_reassemble_the_filtered_collection(
        records in collection_strategy(),
        term in "[a-zA-Z]{0,3}",
        size in page_size_strategy(),
    ) {
        let filtered = filter(&records, &term);
        let pages = total_pages(filtered.len(), size);

        let mut rebuilt = Vec::new();
        for n in 1..=pages {
            let page = paginate(&filtered, Page::new(n).unwrap(), size);
            prop_assert!(page.len() <= size.get());
            prop_assert!(!page.is_empty());
            rebuilt.extend_from_slice(page);
        }
        prop_assert_eq!(rebuilt, filtered.clone());

        let past_end = Page::new(pages + 1).unwrap();
        prop_assert!(paginate(&filtered, past_end, size).is_empty());
    }

    #[test]
    fn empty_term_is_identity(records in collection_strategy()) {
        let all: Vec<Record> = filter(&records, "").into_iter().cloned().collect();
        prop_assert_eq!(all, records);
    }

    #[test]
    fn filter_keeps_source_order(records in collection_strategy(), term in "[a-z]{1,2}") {
        let ids: Vec<RecordId> = filter(&records, &term).iter().map(|r| r.id).collect();
        prop_assert!(ids.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn created_ids_are_previous_max_plus_one(batch in proptest::collection::vec(fields_strategy(), 1..20)) {
        let mut store = empty_store();
        let mut previous = 0u64;
        for fields in batch {
            let created = store.create(fields).unwrap();
            prop_assert_eq!(created.id, RecordId(previous + 1));
            previous = created.id.0;
        }
    }

    #[test]
    fn delete_then_get_is_not_found(
        batch in proptest::collection::vec(fields_strategy(), 1..20),
        pick in any::<prop::sample::Index>(),
    ) {
        let mut store = empty_store();
        for fields in batch {
            store.create(fields).unwrap();
        }
        let before = store.len();
        let id = store.records()[pick.index(before)].id;

        prop_assert!(store.delete(id).is_some());
        prop_assert!(store.get(id).is_none());
        prop_assert_eq!(store.len(), before - 1);

        prop_assert!(store.delete(id).is_none());
        prop_assert_eq!(store.len(), before - 1);
    }

    #[test]
    fn empty_patch_changes_nothing(
        batch in proptest::collection::vec(fields_strategy(), 1..10),
        pick in any::<prop::sample::Index>(),
    ) {
        let mut store = empty_store();
        for fields in batch {
            store.create(fields).unwrap();
        }
        let original = store.records()[pick.index(store.len())].clone();
        let updated = store.update(original.id, RecordPatch::default());
        prop_assert_eq!(updated, Some(original));
    }
}
