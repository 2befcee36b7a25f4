//! Command-line interface for zametki.

pub mod args;
pub mod commands;
