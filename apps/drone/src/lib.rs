//! # Drone Application Library
//!
//! CLI and configuration layers of the `drone` binary, exposed as a
//! library so integration tests can drive them directly.

pub mod cli;
pub mod config;
