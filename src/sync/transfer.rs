use thiserror::Error;

use crate::attendance::{Event, EventRecord, EventStore};

#[derive(Debug, Error)]
pub enum TransferError {
    #[error("Import data is not a valid event list: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("Import data contains no events")]
    Empty,
}

pub fn export_events(store: &EventStore) -> String {
    let records: Vec<EventRecord> = store.all().into_iter().map(EventRecord::from).collect();
    serde_json::to_string(&records).expect("Failed to serialize event records")
}

pub fn import_events(json: &str) -> Result<Vec<Event>, TransferError> {
    let records: Vec<EventRecord> = serde_json::from_str(json)?;
    if records.is_empty() {
        return Err(TransferError::Empty);
    }
    Ok(records.into_iter().filter_map(EventRecord::into_event).collect())
}
