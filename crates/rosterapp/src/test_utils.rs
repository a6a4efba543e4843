use crate::api::RosterApi;
use crate::config::RosterConfig;
use crate::store::mem_backend::MemBackend;
use crate::store::record_store::RecordStore;
use std::rc::Rc;

pub const TEST_DATA_KEY: &str = "aksamedia_data";

/// A record store over a fresh in-memory backend, hydrated with the seed.
pub fn seeded_store() -> RecordStore<MemBackend> {
    RecordStore::open(Rc::new(MemBackend::new()), TEST_DATA_KEY)
}

/// An API with the default config, signed in as the demo user.
pub fn logged_in_api() -> RosterApi<MemBackend> {
    let mut api = RosterApi::new(Rc::new(MemBackend::new()), &RosterConfig::default());
    assert!(api.login("admin", "password123").success);
    api
}
