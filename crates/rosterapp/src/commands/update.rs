use crate::commands::{note_mirror, CmdMessage, CmdResult};
use crate::error::{Result, RosterError};
use crate::model::{RecordId, RecordPatch};
use crate::store::backend::StorageBackend;
use crate::store::record_store::RecordStore;

/// Replaces the supplied fields of the record named by `raw_id`.
pub fn run<B: StorageBackend>(
    store: &mut RecordStore<B>,
    raw_id: &str,
    patch: RecordPatch,
) -> Result<CmdResult> {
    let not_found = || RosterError::RecordNotFound(raw_id.trim().to_string());
    let id = RecordId::coerce(raw_id).ok_or_else(not_found)?;
    let unchanged = patch.is_empty();
    let record = store.update(id, patch).ok_or_else(not_found)?;

    let mut result = CmdResult::default();
    if unchanged {
        result.add_message(CmdMessage::info(format!(
            "Nothing to change ({}): {}",
            record.id, record.name
        )));
    } else {
        result.add_message(CmdMessage::success(format!(
            "Record updated ({}): {}",
            record.id, record.name
        )));
    }
    note_mirror(store, &mut result);
    Ok(result.with_affected_records(vec![record]))
}
