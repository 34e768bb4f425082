use crate::*;

/// Keep track of info for the method_name to be called
#[derive(BorshDeserialize, BorshSerialize, Serialize, Deserialize, Clone, Debug, PartialEq)]
#[borsh(crate = "near_sdk::borsh")]
#[serde(crate = "near_sdk::serde")]
pub struct MethodData {
    /// Contract that will be called
    pub receiver_id: AccountId,
    /// Method to call on receiver_id contract
    pub method_name: String,
    /// Arguments to pass in (stringified JSON). Written by the funder and never trusted.
    pub args: String,
    /// Amount of yoctoNEAR to attach along with the call
    pub attached_deposit: U128,
    /// How much gas to attach to this method call.
    pub attached_gas: Gas,

    /// Which fields of the args should be overwritten by the contract when the key is claimed
    pub keypom_args: Option<KeypomArgs>,
}

/// Keypom Args struct to be sent to external contracts. Every field is a dotted path into the args
/// (i.e `proposal.kind.AddMemberToRole.member_id`). Whatever the funder put at a declared path is
/// discarded and replaced by the real value at claim time.
#[derive(BorshDeserialize, BorshSerialize, Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[borsh(crate = "near_sdk::borsh")]
#[serde(crate = "near_sdk::serde")]
pub struct KeypomArgs {
    /// Specifies what field the claiming account ID should go in when calling the function
    /// If None, this isn't attached to the args
    pub account_id_field: Option<String>,
    /// Specifies what field the drop ID should go in when calling the function.
    /// If Some(String), attach drop ID to args. Else, don't attach.
    pub drop_id_field: Option<String>,
    /// Specifies what field the key ID should go in when calling the function.
    /// If Some(String), attach key ID to args. Else, don't attach.
    pub key_id_field: Option<String>,
    /// Specifies what field the funder id should go in when calling the function.
    /// If Some(string), attach the funder ID to the args. Else, don't attach.
    pub funder_id_field: Option<String>,
}

/// The values the contract knows how to inject into the args of a method
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InjectedField {
    AccountId,
    DropId,
    KeyId,
    FunderId,
}

impl InjectedField {
    /// Name of the `keypom_args` field that declares where this value goes
    pub fn field_name(&self) -> &'static str {
        match self {
            InjectedField::AccountId => "account_id_field",
            InjectedField::DropId => "drop_id_field",
            InjectedField::KeyId => "key_id_field",
            InjectedField::FunderId => "funder_id_field",
        }
    }
}

impl KeypomArgs {
    /// Every declared path along with the value it receives, in injection order
    pub fn declared_paths(&self) -> Vec<(InjectedField, &str)> {
        [
            (InjectedField::AccountId, &self.account_id_field),
            (InjectedField::DropId, &self.drop_id_field),
            (InjectedField::KeyId, &self.key_id_field),
            (InjectedField::FunderId, &self.funder_id_field),
        ]
        .into_iter()
        .filter_map(|(field, path)| path.as_deref().map(|p| (field, p)))
        .collect()
    }
}

impl MethodData {
    /// Total gas this method needs including the receipt that carries it
    pub fn required_gas(&self) -> Gas {
        self.attached_gas
            .saturating_add(MIN_BASE_GAS_FOR_RECEIPT_SPIN_UP)
    }
}
