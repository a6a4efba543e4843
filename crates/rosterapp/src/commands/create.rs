use crate::commands::{note_mirror, CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::RecordFields;
use crate::store::backend::StorageBackend;
use crate::store::record_store::RecordStore;

pub fn run<B: StorageBackend>(store: &mut RecordStore<B>, fields: RecordFields) -> Result<CmdResult> {
    let record = store.create(fields)?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Record created ({}): {}",
        record.id, record.name
    )));
    note_mirror(store, &mut result);
    Ok(result.with_affected_records(vec![record]))
}
