//! Database and configuration models shared across the crate.

pub mod config;
pub mod employee;
