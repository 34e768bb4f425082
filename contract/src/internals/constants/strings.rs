// ------------------------ Access Key Method Names ------------------------ //
/// Drop keys can only ever call `claim` on the contract
pub const ACCESS_KEY_CLAIM_METHOD_NAME: &str = "claim";

// ------------------------ Events ------------------------ //
/// Name of the standard the contract's events follow
pub const EVENT_STANDARD_NAME: &str = "claim_relay";
/// Version of the event standard
pub const EVENT_STANDARD_VERSION: &str = "1.0.0";
/// Prefix of every event log so indexers can pick them up
pub const EVENT_JSON_PREFIX: &str = "EVENT_JSON:";
