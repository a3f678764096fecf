//! Port traits for the collaborators the request pipeline depends on.

pub mod config_port;
pub mod market_data_port;
pub mod symbol_port;
