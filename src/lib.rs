//! escape_planner - kinodynamic "escape" behavior for a thruster-driven boat
//!
//! This crate supplies a sampling-based kinodynamic planner with the pieces
//! it needs to get a vehicle out of a confined region: a forward dynamics
//! model, a local feedback policy, a seed-centered sampling heuristic, goal
//! tolerances, and the assembled planner configuration.

// Core modules
pub mod common;
pub mod config;
pub mod utils;

// Behavior modules
pub mod dynamics;
pub mod control;
pub mod heuristics;
pub mod planner;

// Re-export common types for convenience
pub use common::{State, Effort, CostToGo, FeedbackGain, Interval, NSTATES, NCONTROLS};
pub use common::{DynamicsModel, LocalPolicy, SampleSpaceHeuristic, FeasibilityCheck, ErrorMetric, TimeSource};
pub use common::{EscapeError, EscapeResult};
pub use config::EscapeParams;
pub use planner::{PlannerBuilder, PlannerConfig};
