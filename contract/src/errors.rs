use std::fmt;

use near_sdk::FunctionError;

use crate::*;

/// Every way an operation on the contract can be rejected. None of these are retried internally and
/// every rejected operation leaves counters, escrow and balances untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClaimError {
    /// The claim was not signed with the key being claimed, or not routed through the contract itself.
    Unauthenticated,
    /// The key was never registered or was deleted.
    UnknownKey,
    /// The key has no uses left.
    Exhausted,
    /// The drop configuration is inconsistent or the request would produce one.
    InvalidConfig(String),
    /// The stored arguments could not be turned into a sanitized payload.
    MalformedArgs(String),
    /// Neither the attached deposit nor the funder's balance covers the cost.
    InsufficientDeposit { required: u128, available: u128 },
    /// The requested drop does not exist.
    NotFound(DropId),
    /// The caller is not allowed to act on this drop or contract.
    Unauthorized,
    /// Not enough gas was attached to relay the calls of the current use.
    InsufficientGas { required: Gas, prepaid: Gas },
    /// The owner froze the contract.
    ContractFrozen,
}

impl fmt::Display for ClaimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unauthenticated => write!(f, "Claim must be signed by the key being claimed"),
            Self::UnknownKey => write!(f, "No drop found for public key"),
            Self::Exhausted => write!(f, "Key has no uses remaining"),
            Self::InvalidConfig(msg) => write!(f, "Invalid drop configuration: {}", msg),
            Self::MalformedArgs(msg) => write!(f, "Malformed method args: {}", msg),
            Self::InsufficientDeposit { required, available } => write!(
                f,
                "Insufficient deposit. Required: {} yoctoNEAR, available: {} yoctoNEAR",
                required, available
            ),
            Self::NotFound(drop_id) => write!(f, "Drop {} not found", drop_id),
            Self::Unauthorized => write!(f, "Caller is not allowed to perform this action"),
            Self::InsufficientGas { required, prepaid } => write!(
                f,
                "Not enough gas attached. Required: {}, Prepaid: {}",
                required.as_gas(),
                prepaid.as_gas()
            ),
            Self::ContractFrozen => write!(f, "Contract is frozen"),
        }
    }
}

impl FunctionError for ClaimError {
    fn panic(&self) -> ! {
        env::panic_str(&format!("ClaimError: {}", self))
    }
}

/// Shorthand for building an `InvalidConfig` error
#[macro_export]
macro_rules! invalid_config {
    ($($arg:tt)*) => {
        $crate::ClaimError::InvalidConfig(format!($($arg)*))
    };
}

/// Shorthand for building a `MalformedArgs` error
#[macro_export]
macro_rules! malformed_args {
    ($($arg:tt)*) => {
        $crate::ClaimError::MalformedArgs(format!($($arg)*))
    };
}
