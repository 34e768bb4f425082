use std::fmt;

use crate::*;

/// Enum that represents the data type of the EventLog.
#[derive(Serialize, Deserialize, Debug)]
#[serde(tag = "event", content = "data")]
#[serde(rename_all = "snake_case")]
#[serde(crate = "near_sdk::serde")]
#[non_exhaustive]
pub enum EventLogVariant {
    DropCreation(DropCreationLog),
    DropDeletion(DropDeletionLog),
    AddKey(Vec<AddOrDeleteKeyLog>),
    DeleteKey(Vec<AddOrDeleteKeyLog>),
    Claim(ClaimLog),
}

/// Interface to capture data about an event
///
/// Arguments:
/// * `standard`: name of standard e.g. claim_relay
/// * `version`: e.g. 1.0.0
/// * `event`: associate event data
#[derive(Serialize, Deserialize, Debug)]
#[serde(crate = "near_sdk::serde")]
pub struct EventLog {
    pub standard: String,
    pub version: String,

    // `flatten` to not have "event": {<EventLogVariant>} in the JSON, just have the contents of {<EventLogVariant>}.
    #[serde(flatten)]
    pub event: EventLogVariant,
}

impl EventLog {
    /// Wrap an event in the contract's standard and version
    pub fn new(event: EventLogVariant) -> Self {
        Self {
            standard: EVENT_STANDARD_NAME.to_string(),
            version: EVENT_STANDARD_VERSION.to_string(),
            event,
        }
    }
}

impl fmt::Display for EventLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_fmt(format_args!(
            "{}{}",
            EVENT_JSON_PREFIX,
            &serde_json::to_string(self).map_err(|_| fmt::Error)?
        ))
    }
}
