//! Storage layer for zametki.
//!
//! This module provides SQLite-based persistence for calendar notes.

mod database;
mod migrations;
mod notes;

pub use database::Database;
pub use notes::NoteStore;
