//! Core domain types and logic.

pub mod chart;
pub mod chart_svg;
pub mod config;
pub mod error;
pub mod quote;
pub mod request;
pub mod series;
pub mod validator;
