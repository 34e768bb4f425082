pub mod gas_amounts;
pub mod strings;

pub use gas_amounts::*;
pub use strings::*;

use crate::*;

/// Default gas allowance given to an access key for every use it has.
/// 300 TGas at 100M yocto per gas is 0.03 $NEAR.
pub const DEFAULT_ALLOWANCE_PER_USE: u128 = 30_000_000_000_000_000_000_000;

/// Default maximum number of keys that can be added in a single call
pub const DEFAULT_MAX_KEYS_PER_CALL: u32 = 100;

/// Default maximum number of methods that can be relayed in a single use
pub const DEFAULT_MAX_METHODS_PER_USE: u32 = 5;

/// Default maximum length (in bytes) of the stringified args of a single method
pub const DEFAULT_MAX_ARGS_LEN: u32 = 4096;

/// Default number of items returned by paginated views
pub const DEFAULT_PAGINATION_LIMIT: u64 = 50;

/// Key that the contract reserves at the root of every relayed payload to describe the injected fields
pub const KEYPOM_ARGS_FIELD: &str = "keypom_args";

/// Separator used for nested field paths (i.e `proposal.kind.member_id`)
pub const FIELD_PATH_SEPARATOR: char = '.';

/// Drop IDs cannot contain this character
pub const DROP_ID_FORBIDDEN_CHAR: char = ':';

