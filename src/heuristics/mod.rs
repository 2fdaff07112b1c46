//! Planner heuristics: sample-space scoping and goal acceptance

pub mod sample_space;
pub mod tolerance;

pub use sample_space::{EscapeSampleSpace, SampleSpace};
pub use tolerance::GoalTolerance;
