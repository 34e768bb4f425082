mod add_keys;
mod create_drop;
mod helpers;

pub(crate) use helpers::*;
