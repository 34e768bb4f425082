mod injection;
mod payload;
mod validation;

pub use injection::*;
pub use payload::*;
pub use validation::*;
