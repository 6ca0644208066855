//! CLI command handlers

pub mod commands;

pub use commands::{dummy, format_values, sheets, show, super_button};
