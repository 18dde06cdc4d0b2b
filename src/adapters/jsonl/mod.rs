//! JSON-lines review journal
//!
//! Implements `ReviewJournal` as one JSON object per line.

mod journal;

pub use journal::JsonlJournal;
