/*!
Claim Relay is an access key factory whose keys relay function calls on behalf of the account that
claims them.

A funder creates a *drop*: a bucket of function call access keys that all share the same behaviour.
Every key can be used `uses_per_key` times and each use fires one or more function calls whose
shape was decided by the funder when the drop was created. Keys are handed out (QR codes, links,
backend servers) and the holder claims them by signing a `claim` transaction with the key and
naming the account that should benefit from the claim.

# Function call methods

Each use of a key maps to a list of methods that are called in order:

```rust,ignore
pub struct MethodData {
    /// Contract that will be called
    pub receiver_id: AccountId,
    /// Method to call on receiver_id contract
    pub method_name: String,
    /// Arguments to pass in (stringified JSON)
    pub args: String,
    /// Amount of yoctoNEAR to attach along with the call
    pub attached_deposit: U128,
    /// How much gas to attach to this method call.
    pub attached_gas: Gas,
    /// Which fields of the args should be filled in by the contract at claim time
    pub keypom_args: Option<KeypomArgs>,
}
```

The arguments are written by the funder and are never trusted. Receiving contracts usually want to
know *who* claimed and *who* paid for the drop (a DAO bot adding the claimer to a role only if the
funder sits on the council, for example). The funder declares where those values live through
`keypom_args` using dotted paths such as `proposal.kind.AddMemberToRole.member_id`, and the contract
overwrites whatever the funder put at those paths with the real claiming account and the real
funder. Missing objects along a path are created, while a path that runs into a non-object value
makes the claim fail instead of silently skipping the overwrite. The declared paths are also sent
along under `keypom_args` so receivers can verify which fields were injected.

# Uses and funding

A drop either has one set of methods used for every claim or exactly one set per use. When the drop
is created (or keys are added), the funder must cover `deposit_per_use` for every use of every key
plus the gas allowance of the access keys. The deposit of a use leaves escrow the moment the use is
claimed: the attached deposits of the methods are paid out of it and the rest is credited back to
the funder's balance.

Claims are final once the use is consumed. The relayed calls run asynchronously afterwards and a
failing receiver does not give the use back.
!*/

use near_sdk::borsh::{BorshDeserialize, BorshSerialize};
use near_sdk::collections::{LookupMap, LookupSet, UnorderedSet};
use near_sdk::json_types::{U128, U64};
use near_sdk::serde::{Deserialize, Serialize};
use near_sdk::{
    env, near, AccountId, Allowance, BorshStorageKey, CryptoHash, Gas, GasWeight, NearToken,
    PanicOnDefault, Promise, PublicKey,
};
use serde_json::{json, Map, Value};

#[macro_use]
mod errors;
mod drop_claiming;
mod drop_creation;
mod drop_deletion;
mod function_call;
mod internals;
mod models;
mod owner;
mod stores;
mod user_balances;
mod views;

#[cfg(test)]
mod tests;

pub use drop_claiming::*;
pub use drop_creation::*;
pub use errors::*;
pub use function_call::*;
pub use internals::*;
pub use models::*;
pub use stores::*;

#[derive(BorshSerialize, BorshStorageKey)]
#[borsh(crate = "near_sdk::borsh")]
pub enum StorageKeys {
    DropById,
    DropIdsByFunder,
    DropIdsByFunderInner { account_id_hash: CryptoHash },
    KeyInfoByPk,
    PksByDrop,
    PksByDropInner { drop_id_hash: CryptoHash },
    RetiredPks,
    UserBalances,
}

#[near(contract_state)]
#[derive(PanicOnDefault)]
pub struct ClaimRelay {
    /// Owner of the contract that can set configurations and freeze the contract
    pub owner_id: AccountId,
    /// Limits and allowances applied to every drop
    pub config: ContractConfig,
    /// While frozen, no drops can be created, no keys added and no keys claimed
    pub global_freeze: bool,

    /// Every drop on the contract, indexed by ID and by funder
    pub drops: DropStore,
    /// Every live access key and the retired ones
    pub keys: KeyStore,

    /// Prepaid balances funders can use instead of attaching deposits
    pub user_balances: LookupMap<AccountId, u128>,
}

#[near]
impl ClaimRelay {
    /// Initialize the contract. Any config value not passed in falls back to the defaults.
    #[init]
    #[handle_result]
    pub fn new(owner_id: AccountId, config: Option<ContractConfig>) -> Result<Self, ClaimError> {
        let config = config.unwrap_or_default();
        config.validate()?;

        Ok(Self {
            owner_id,
            config,
            global_freeze: false,
            drops: DropStore::new(),
            keys: KeyStore::new(),
            user_balances: LookupMap::new(StorageKeys::UserBalances),
        })
    }
}
