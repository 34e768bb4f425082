mod config;
mod drop_model;
mod key_model;
mod method_data;

pub use config::*;
pub use drop_model::*;
pub use key_model::*;
pub use method_data::*;
