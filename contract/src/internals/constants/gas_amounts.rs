use crate::*;

// ------------------------ General ------------------------ //
/// For every cross contract call, there is a base 5 TGas cost on top of what is sent to the contract
pub const MIN_BASE_GAS_FOR_RECEIPT_SPIN_UP: Gas = Gas::from_tgas(5); // 5 TGas
/// Maximum amount of Gas that can be attached to the transaction
pub const MAX_GAS_ATTACHABLE: Gas = Gas::from_tgas(300); // 300 TGas
/// Minimum amount of gas required to perform any necessary computations for the receipt
pub const MIN_GAS_FOR_RECEIPT_COMPUTATION: Gas = Gas::from_tgas(5); // 5 TGas

// ------------------------ Claim ------------------------ //
/// The base amount of gas required for claim calls.
/// This covers key lookup, payload building and deleting the key once it's empty.
/// This does not include the relayed method calls
pub const BASE_GAS_FOR_CLAIM: Gas = Gas::from_gas(
    MIN_GAS_FOR_RECEIPT_COMPUTATION.as_gas() * 2 + MIN_BASE_GAS_FOR_RECEIPT_SPIN_UP.as_gas(),
); // 15 TGas
