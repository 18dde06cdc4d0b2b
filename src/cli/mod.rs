//! CLI layer for credence
//!
//! This module contains the command-line interface:
//!
//! - [`app`] - CLI definitions and entry point
//! - [`session`] - Config, journal and engine wiring shared by commands
//! - [`commands`] - Command implementations

pub mod app;
pub mod commands;
pub mod session;

// Re-export main entry point
pub use app::run;
