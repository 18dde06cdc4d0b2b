//! Adapter implementations for port traits
//!
//! This module contains concrete implementations that handle I/O:
//!
//! - `jsonl/` - JSON-lines review journal
//! - `notify/` - Tag change notifier that writes to the log

pub mod jsonl;
pub mod notify;

pub use jsonl::JsonlJournal;
pub use notify::LogNotifier;
