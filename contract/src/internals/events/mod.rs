pub mod claim_relay;
pub mod events_core;
pub mod helpers;

pub use claim_relay::*;
pub use events_core::*;
pub use helpers::*;
