mod drop_store;
mod key_store;

pub use drop_store::*;
pub use key_store::*;
