//! Control module
//!
//! Local feedback used by the planner to steer between sampled states.

pub mod stabilization;

pub use stabilization::StabilizationPolicy;
