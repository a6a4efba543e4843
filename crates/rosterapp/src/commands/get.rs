use crate::commands::CmdResult;
use crate::error::{Result, RosterError};
use crate::store::backend::StorageBackend;
use crate::store::record_store::RecordStore;

/// Looks a record up by raw id input. Input that is not a number, or names
/// no record, is `RecordNotFound`.
pub fn run<B: StorageBackend>(store: &RecordStore<B>, raw_id: &str) -> Result<CmdResult> {
    let record = store
        .get_by_input(raw_id)
        .cloned()
        .ok_or_else(|| RosterError::RecordNotFound(raw_id.trim().to_string()))?;
    Ok(CmdResult::default().with_listed_records(vec![record]))
}
