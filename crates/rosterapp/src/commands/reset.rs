use crate::commands::{note_mirror, CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::backend::StorageBackend;
use crate::store::record_store::RecordStore;

pub fn run<B: StorageBackend>(store: &mut RecordStore<B>) -> Result<CmdResult> {
    store.reset_to_defaults();
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Restored {} default records",
        store.len()
    )));
    note_mirror(store, &mut result);
    Ok(result)
}
