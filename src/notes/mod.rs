//! Note types for zametki.

mod types;

pub use types::{Note, NoteColor};
