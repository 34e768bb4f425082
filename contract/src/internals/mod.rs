pub mod constants;
pub mod events;
pub mod ext_traits;
pub mod helpers;
pub mod types;

pub use constants::*;
pub use events::*;
pub use ext_traits::*;
pub(crate) use helpers::*;
pub use types::*;
