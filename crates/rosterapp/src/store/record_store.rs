use super::backend::StorageBackend;
use crate::error::{Result, RosterError};
use crate::model::{seed_records, Record, RecordFields, RecordId, RecordPatch};
use std::collections::HashSet;
use std::rc::Rc;
use tracing::{debug, warn};

/// Whether the last write to the persisted mirror succeeded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MirrorStatus {
    Synced,
    /// The last write failed. The in-memory collection is still
    /// authoritative but changes will not survive a restart.
    Unavailable(String),
}

impl MirrorStatus {
    pub fn is_synced(&self) -> bool {
        matches!(self, MirrorStatus::Synced)
    }
}

/// Where the collection came from when the store was opened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Hydration {
    Persisted,
    /// Nothing usable was stored; the seed set was loaded instead.
    Seeded { reason: String },
}

/// Emitted after every mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    Created(Record),
    Updated(Record),
    Deleted(Record),
    Reset,
}

type Listener = Box<dyn FnMut(&StoreEvent)>;

/// Authoritative owner of the record collection.
///
/// All changes go through this type so the persisted mirror stays
/// consistent: every mutation rewrites the whole collection under `key`.
/// A failed write never fails the mutation; it is recorded in
/// [`MirrorStatus`] and logged.
pub struct RecordStore<B: StorageBackend> {
    backend: Rc<B>,
    key: String,
    records: Vec<Record>,
    hydration: Hydration,
    mirror: MirrorStatus,
    listeners: Vec<Listener>,
}

impl<B: StorageBackend> RecordStore<B> {
    /// Opens the store, hydrating from `key`. Absent, unreadable or corrupt
    /// data falls back to the seed set, which is then persisted.
    pub fn open(backend: Rc<B>, key: impl Into<String>) -> Self {
        let key = key.into();
        let loaded = load_collection(backend.as_ref(), &key);

        let mut store = Self {
            backend,
            key,
            records: Vec::new(),
            hydration: Hydration::Persisted,
            mirror: MirrorStatus::Synced,
            listeners: Vec::new(),
        };

        match loaded {
            Ok(records) => {
                debug!(key = %store.key, count = records.len(), "hydrated record collection");
                store.records = records;
            }
            Err(reason) => {
                warn!(key = %store.key, %reason, "falling back to seed records");
                store.records = seed_records();
                store.hydration = Hydration::Seeded { reason };
                store.persist();
            }
        }
        store
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn hydration(&self) -> &Hydration {
        &self.hydration
    }

    pub fn mirror_status(&self) -> &MirrorStatus {
        &self.mirror
    }

    /// `max(id) + 1`, or 1 for an empty collection. Deleting the highest
    /// record frees its id for the next create. `None` when the highest id
    /// is already `u64::MAX`.
    pub fn next_id(&self) -> Option<RecordId> {
        match self.records.iter().map(|r| r.id).max() {
            Some(max) => max.next(),
            None => Some(RecordId(1)),
        }
    }

    /// Appends a record under [`next_id`](Self::next_id). Fails without
    /// touching the collection when no id is left.
    pub fn create(&mut self, fields: RecordFields) -> Result<Record> {
        let id = self
            .next_id()
            .ok_or_else(|| RosterError::Store("no record id left after the highest stored id".to_string()))?;
        let record = Record::new(id, fields);
        self.records.push(record.clone());
        debug!(id = %record.id, "created record");
        self.persist();
        self.emit(StoreEvent::Created(record.clone()));
        Ok(record)
    }

    pub fn get(&self, id: RecordId) -> Option<&Record> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Looks up by external input, coerced with [`RecordId::coerce`].
    /// Non-numeric input is simply not found.
    pub fn get_by_input(&self, raw: &str) -> Option<&Record> {
        RecordId::coerce(raw).and_then(|id| self.get(id))
    }

    /// Replaces the supplied fields. Returns the updated record, or `None`
    /// when no record has `id` (nothing is written in that case).
    pub fn update(&mut self, id: RecordId, patch: RecordPatch) -> Option<Record> {
        let record = self.records.iter_mut().find(|r| r.id == id)?;
        record.apply(patch);
        let updated = record.clone();
        debug!(%id, "updated record");
        self.persist();
        self.emit(StoreEvent::Updated(updated.clone()));
        Some(updated)
    }

    /// Removes the record. Returns it, or `None` when it was absent.
    pub fn delete(&mut self, id: RecordId) -> Option<Record> {
        let pos = self.records.iter().position(|r| r.id == id)?;
        let removed = self.records.remove(pos);
        debug!(%id, "deleted record");
        self.persist();
        self.emit(StoreEvent::Deleted(removed.clone()));
        Some(removed)
    }

    pub fn reset_to_defaults(&mut self) {
        self.records = seed_records();
        debug!("reset record collection to seed");
        self.persist();
        self.emit(StoreEvent::Reset);
    }

    /// Registers a listener called after each mutation.
    pub fn subscribe(&mut self, listener: impl FnMut(&StoreEvent) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    fn persist(&mut self) {
        let outcome = serde_json::to_string(&self.records)
            .map_err(|e| e.to_string())
            .and_then(|json| {
                self.backend
                    .write(&self.key, &json)
                    .map_err(|e| e.to_string())
            });
        self.mirror = match outcome {
            Ok(()) => MirrorStatus::Synced,
            Err(reason) => {
                warn!(key = %self.key, %reason, "record collection not persisted");
                MirrorStatus::Unavailable(reason)
            }
        };
    }

    fn emit(&mut self, event: StoreEvent) {
        for listener in self.listeners.iter_mut() {
            listener(&event);
        }
    }
}

fn load_collection<B: StorageBackend>(
    backend: &B,
    key: &str,
) -> std::result::Result<Vec<Record>, String> {
    let raw = match backend.read(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Err("no stored collection".to_string()),
        Err(e) => return Err(format!("storage unreadable: {}", e)),
    };
    let records: Vec<Record> =
        serde_json::from_str(&raw).map_err(|e| format!("stored collection is malformed: {}", e))?;

    let mut seen = HashSet::new();
    if let Some(dup) = records.iter().find(|r| !seen.insert(r.id)) {
        return Err(format!("stored collection repeats id {}", dup.id));
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Role, Status};
    use crate::store::mem_backend::MemBackend;
    use std::cell::RefCell;

    const KEY: &str = "test_data";

    fn fields(name: &str) -> RecordFields {
        RecordFields::new(name, "x@y.com", Role::Developer, Status::Active)
    }

    fn open_seeded() -> (Rc<MemBackend>, RecordStore<MemBackend>) {
        let backend = Rc::new(MemBackend::new());
        let store = RecordStore::open(Rc::clone(&backend), KEY);
        (backend, store)
    }

    fn stored(backend: &MemBackend) -> Vec<Record> {
        serde_json::from_str(&backend.read(KEY).unwrap().unwrap()).unwrap()
    }

    #[test]
    fn empty_storage_hydrates_seed_and_persists_it() {
        let (backend, store) = open_seeded();
        assert_eq!(store.len(), 15);
        assert!(matches!(store.hydration(), Hydration::Seeded { .. }));
        assert_eq!(stored(&backend), seed_records());
    }

    #[test]
    fn hydrates_previously_persisted_collection() {
        let backend = Rc::new(MemBackend::new());
        let saved = vec![Record::new(RecordId(42), fields("Kept"))];
        backend
            .write(KEY, &serde_json::to_string(&saved).unwrap())
            .unwrap();

        let store = RecordStore::open(Rc::clone(&backend), KEY);
        assert_eq!(store.records(), saved.as_slice());
        assert_eq!(store.hydration(), &Hydration::Persisted);
    }

    #[test]
    fn persisted_empty_collection_stays_empty() {
        let backend = Rc::new(MemBackend::new());
        backend.write(KEY, "[]").unwrap();
        let store = RecordStore::open(backend, KEY);
        assert!(store.is_empty());
        assert_eq!(store.next_id(), Some(RecordId(1)));
    }

    #[test]
    fn corrupt_storage_falls_back_to_seed() {
        let backend = Rc::new(MemBackend::new());
        backend.insert_raw(KEY, "{not json");
        let store = RecordStore::open(Rc::clone(&backend), KEY);
        assert_eq!(store.records(), seed_records().as_slice());
        assert_eq!(stored(&backend), seed_records());
    }

    #[test]
    fn duplicate_ids_are_treated_as_corrupt() {
        let backend = Rc::new(MemBackend::new());
        let dupes = vec![
            Record::new(RecordId(3), fields("A")),
            Record::new(RecordId(3), fields("B")),
        ];
        backend.insert_raw(KEY, &serde_json::to_string(&dupes).unwrap());
        let store = RecordStore::open(backend, KEY);
        assert_eq!(store.len(), 15);
    }

    #[test]
    fn exhausted_ids_fail_create_instead_of_wrapping() {
        let backend = Rc::new(MemBackend::new());
        let top = vec![Record::new(RecordId(u64::MAX), fields("Top"))];
        backend.insert_raw(KEY, &serde_json::to_string(&top).unwrap());
        let mut store = RecordStore::open(Rc::clone(&backend), KEY);
        assert_eq!(store.hydration(), &Hydration::Persisted);
        assert_eq!(store.next_id(), None);

        assert!(matches!(store.create(fields("A")), Err(RosterError::Store(_))));
        assert!(matches!(store.create(fields("B")), Err(RosterError::Store(_))));
        assert_eq!(store.records(), top.as_slice());
        assert_eq!(stored(&backend), top);
    }

    #[test]
    fn create_reaches_the_last_id_once() {
        let backend = Rc::new(MemBackend::new());
        let near = vec![Record::new(RecordId(u64::MAX - 1), fields("Near"))];
        backend.insert_raw(KEY, &serde_json::to_string(&near).unwrap());
        let mut store = RecordStore::open(backend, KEY);

        assert_eq!(store.create(fields("Last")).unwrap().id, RecordId(u64::MAX));
        assert!(store.create(fields("Over")).is_err());
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn create_assigns_max_plus_one_and_appends() {
        let (backend, mut store) = open_seeded();
        let created = store.create(fields("X")).unwrap();
        assert_eq!(created.id, RecordId(16));
        assert_eq!(store.records().last(), Some(&created));
        assert_eq!(stored(&backend).len(), 16);
    }

    #[test]
    fn create_on_empty_starts_at_one() {
        let backend = Rc::new(MemBackend::new());
        backend.write(KEY, "[]").unwrap();
        let mut store = RecordStore::open(backend, KEY);
        assert_eq!(store.create(fields("First")).unwrap().id, RecordId(1));
        assert_eq!(store.create(fields("Second")).unwrap().id, RecordId(2));
    }

    #[test]
    fn id_follows_max_not_a_counter() {
        let (_backend, mut store) = open_seeded();
        store.delete(RecordId(3));
        assert_eq!(store.create(fields("X")).unwrap().id, RecordId(16));
        store.delete(RecordId(16));
        assert_eq!(store.create(fields("Y")).unwrap().id, RecordId(16));
    }

    #[test]
    fn get_by_input_coerces() {
        let (_backend, store) = open_seeded();
        assert_eq!(store.get_by_input("7").map(|r| r.name.as_str()), Some("Joko Widodo"));
        assert_eq!(store.get_by_input("7px").map(|r| r.id), Some(RecordId(7)));
        assert!(store.get_by_input("seven").is_none());
        assert!(store.get_by_input("99").is_none());
    }

    #[test]
    fn update_replaces_supplied_fields_only() {
        let (backend, mut store) = open_seeded();
        let updated = store
            .update(
                RecordId(2),
                RecordPatch {
                    email: Some("siti@new.org".into()),
                    ..Default::default()
                },
            )
            .unwrap();
        assert_eq!(updated.email, "siti@new.org");
        assert_eq!(updated.name, "Siti Nurhaliza");
        assert_eq!(stored(&backend)[1].email, "siti@new.org");
    }

    #[test]
    fn update_missing_is_not_found_and_writes_nothing() {
        let (backend, mut store) = open_seeded();
        backend.set_simulate_write_error(true);
        assert!(store.update(RecordId(99), fields("Z").into()).is_none());
        assert!(store.mirror_status().is_synced());
    }

    #[test]
    fn delete_removes_and_persists() {
        let (backend, mut store) = open_seeded();
        let removed = store.delete(RecordId(15)).unwrap();
        assert_eq!(removed.name, "Bambang Sutrisno");
        assert!(store.get(RecordId(15)).is_none());
        assert_eq!(store.len(), 14);
        assert_eq!(stored(&backend).len(), 14);
        assert!(store.delete(RecordId(15)).is_none());
        assert_eq!(store.len(), 14);
    }

    #[test]
    fn reset_restores_seed() {
        let (backend, mut store) = open_seeded();
        store.delete(RecordId(1));
        store.create(fields("X")).unwrap();
        store.reset_to_defaults();
        assert_eq!(store.records(), seed_records().as_slice());
        assert_eq!(stored(&backend), seed_records());
    }

    #[test]
    fn write_failure_keeps_memory_authoritative() {
        let (backend, mut store) = open_seeded();
        backend.set_simulate_write_error(true);

        let created = store.create(fields("Offline")).unwrap();
        assert_eq!(store.get(created.id), Some(&created));
        assert!(matches!(store.mirror_status(), MirrorStatus::Unavailable(_)));
        assert_eq!(stored(&backend).len(), 15);

        backend.set_simulate_write_error(false);
        store.delete(RecordId(1));
        assert!(store.mirror_status().is_synced());
        assert_eq!(stored(&backend).len(), 15);
    }

    #[test]
    fn listeners_see_every_mutation() {
        let (_backend, mut store) = open_seeded();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        store.subscribe(move |event| sink.borrow_mut().push(event.clone()));

        let created = store.create(fields("X")).unwrap();
        store.update(created.id, RecordPatch::default());
        store.delete(created.id);
        store.delete(RecordId(99));
        store.reset_to_defaults();

        let seen = seen.borrow();
        assert_eq!(seen.len(), 4);
        assert_eq!(seen[0], StoreEvent::Created(created.clone()));
        assert_eq!(seen[1], StoreEvent::Updated(created.clone()));
        assert_eq!(seen[2], StoreEvent::Deleted(created));
        assert_eq!(seen[3], StoreEvent::Reset);
    }
}
