//! Feature implementations for zametki.
//!
//! Currently the one non-trivial feature: natural language quick-note
//! parsing.

pub mod quicknote;
