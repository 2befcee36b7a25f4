//! zametki - A calendar notes CLI
//!
//! This crate provides a command-line calendar with quick-note entry:
//! free-text phrases (largely Russian) are parsed into notes with a
//! time range and a color tag.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod features;
pub mod notes;
pub mod output;
pub mod storage;

pub use cli::args::{Cli, Commands, OutputFormat};
pub use error::ZametkiError;
pub use features::quicknote::{parse_quick_note, ParsedQuickNote};
pub use notes::{Note, NoteColor};
