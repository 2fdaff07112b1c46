//! Planner configuration module
//!
//! The kinodynamic search itself lives outside this crate. This module
//! assembles everything it consumes and offers the local steering rollout
//! the search uses to extend its tree.

pub mod configuration;
pub mod constraints;
pub mod slots;
pub mod steer;

pub use configuration::{PlannerBuilder, PlannerConfig};
pub use constraints::Constraints;
pub use slots::{AlwaysFeasible, DependencySlot, SystemClock, WrappedStateError};
pub use steer::{Rollout, RolloutOutcome};
