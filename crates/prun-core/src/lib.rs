//! prun-core: Core types for the prun launch frontend
//!
//! This crate provides the fundamental types used throughout prun:
//! - Host allocation parsing and derived views
//! - Placement request and plan types
//! - Planner diagnostics
//! - Configuration types
//! - Error handling

pub mod allocation;
pub mod config;
pub mod error;
pub mod plan;

pub use allocation::*;
pub use config::*;
pub use error::*;
pub use plan::*;
