
mod support;

mod governance_relay;
mod owner;
