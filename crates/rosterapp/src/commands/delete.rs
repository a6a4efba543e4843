use crate::commands::{note_mirror, CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::RecordId;
use crate::store::backend::StorageBackend;
use crate::store::record_store::RecordStore;

/// Removes the record named by `raw_id`. An unknown id is a no-op that
/// reports a warning, not an error.
pub fn run<B: StorageBackend>(store: &mut RecordStore<B>, raw_id: &str) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let removed = RecordId::coerce(raw_id).and_then(|id| store.delete(id));

    match removed {
        Some(record) => {
            result.add_message(CmdMessage::success(format!(
                "Record deleted ({}): {}",
                record.id, record.name
            )));
            note_mirror(store, &mut result);
            Ok(result.with_affected_records(vec![record]))
        }
        None => {
            result.add_message(CmdMessage::warning(format!(
                "No record with id {}",
                raw_id.trim()
            )));
            Ok(result)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{get, MessageLevel};
    use crate::test_utils::seeded_store;

    #[test]
    fn deletes_and_shrinks_collection() {
        let mut store = seeded_store();
        let result = run(&mut store, "15").unwrap();
        assert_eq!(result.affected_records[0].name, "Bambang Sutrisno");
        assert_eq!(store.len(), 14);
        assert!(get::run(&store, "15").is_err());
    }

    #[test]
    fn unknown_id_is_a_noop() {
        let mut store = seeded_store();
        let result = run(&mut store, "77").unwrap();
        assert!(result.affected_records.is_empty());
        assert!(result.has_level(MessageLevel::Warning));
        assert_eq!(store.len(), 15);

        run(&mut store, "nope").unwrap();
        assert_eq!(store.len(), 15);
    }
}
