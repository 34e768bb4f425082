use crate::*;

/// An event log to capture whenever a new drop is created
///
/// Arguments
/// * `funder_id`: "account.near"
/// * `drop_id`: "my-drop123"
/// * `uses_per_key`: 1500
/// * `deposit_per_use`: yoctoNEAR reserved for every use
///
/// * `metadata`: optional metadata for the drop
#[derive(Serialize, Deserialize, Debug)]
#[serde(crate = "near_sdk::serde")]
pub struct DropCreationLog {
    pub funder_id: String,
    pub drop_id: String,
    pub uses_per_key: UseNumber,
    pub deposit_per_use: U128,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<DropMetadata>,
}

/// An event log to capture whenever a drop is deleted
///
/// Arguments
/// * `funder_id`: "account.near"
/// * `drop_id`: "my-drop123"
#[derive(Serialize, Deserialize, Debug)]
#[serde(crate = "near_sdk::serde")]
pub struct DropDeletionLog {
    pub funder_id: String,
    pub drop_id: String,
}

/// An event log to capture whenever a key is added to or deleted from a drop
///
/// Arguments
/// * `drop_id`: "my-drop123"
/// * `public_key`: "ed25519:8WWpRpZswPHoJn5THFdBaFdbVeSjtSrQmEcoUeaNdkKy"
/// * `key_id`: nonce of the key within its drop
#[derive(Serialize, Deserialize, Debug)]
#[serde(crate = "near_sdk::serde")]
pub struct AddOrDeleteKeyLog {
    pub drop_id: String,
    pub public_key: String,
    pub key_id: KeyId,
}

/// An event log to capture whenever a key is used to call `claim`
///
/// Arguments
/// * `account_id`: "account.near"
/// * `drop_id`: "my-drop123"
/// * `public_key`: "ed25519:8WWpRpZswPHoJn5THFdBaFdbVeSjtSrQmEcoUeaNdkKy"
/// * `use_number`: which use of the key was consumed (starting at 1)
/// * `calls`: the function calls relayed for this use, with their final args
#[derive(Serialize, Deserialize, Debug)]
#[serde(crate = "near_sdk::serde")]
pub struct ClaimLog {
    pub account_id: String,
    pub drop_id: String,
    pub public_key: String,
    pub use_number: UseNumber,

    pub calls: Vec<OutboundCall>,
}
