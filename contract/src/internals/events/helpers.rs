use crate::*;

/// Helper function to loop through events and log them.
pub(crate) fn log_events(events: Vec<EventLog>) {
    for event in events {
        // Log the serialized json.
        env::log_str(&event.to_string());
    }
}

/// Build the `add_key` (or `delete_key`) log entry for a single key
pub(crate) fn key_log(drop_id: &DropId, pk: &PublicKey, key_id: KeyId) -> AddOrDeleteKeyLog {
    AddOrDeleteKeyLog {
        drop_id: drop_id.to_string(),
        public_key: String::from(pk),
        key_id,
    }
}
