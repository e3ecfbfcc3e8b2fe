//! CLI command handlers

pub mod commands;

pub use commands::{classify, decode, import, sheets};
