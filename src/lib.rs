//! credence - A reputation-weighted credibility consensus engine
//!
//! Reviewers judge posts accurate or inaccurate; this library folds their
//! weighted verdicts into a consensus percentage, derives a credibility tag
//! (`true`, `false`, `misleading`, `unverified`) and keeps an append-only
//! history of how consensus moved.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod adapters;
pub mod config;
pub mod core;
pub mod engine;
pub mod error;
pub mod output;
pub mod paths;

pub use engine::ConsensusEngine;
pub use error::{ConsensusError, Result};
