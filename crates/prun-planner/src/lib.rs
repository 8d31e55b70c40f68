//! prun-planner: Process placement planner for prun
//!
//! This crate decides how many processes each allocated host receives:
//! - Block distribution over hosts in allocation order
//! - Oversubscription detection
//! - Best-effort handling of infeasible per-node densities

pub mod placement;

pub use placement::{plan, BlockPlacement, PlacementStrategy, PlanOutcome};
