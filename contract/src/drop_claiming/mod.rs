mod claims;
mod engine;

pub use engine::*;
