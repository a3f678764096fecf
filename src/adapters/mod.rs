//! Concrete adapter implementations for ports.

pub mod alphavantage_adapter;
pub mod csv_adapter;
pub mod file_config_adapter;
#[cfg(feature = "web")]
pub mod web;
