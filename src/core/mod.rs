//! Core domain logic for credence
//!
//! This module contains pure business logic with no I/O dependencies.
//! All external interactions are abstracted through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (`ReviewRecord`, `Tally`, `ConsensusSnapshot`, tags)
//! - `services/` - Aggregation, classification and history for a single post
//! - `ports/` - Trait definitions for persistence and notification collaborators

pub mod models;
pub mod ports;
pub mod services;
