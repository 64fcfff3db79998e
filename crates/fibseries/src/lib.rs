//! fibseries library — argument handling and dispatch for the fibseries tool.

pub mod app;
pub mod config;
pub mod errors;
