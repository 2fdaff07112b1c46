//! Common types, traits, and error definitions for escape_planner
//!
//! This module provides the foundational building blocks shared by the
//! dynamics model, the local policy, the sampling heuristic and the
//! planner configuration.

pub mod types;
pub mod traits;
pub mod error;

pub use types::*;
pub use traits::*;
pub use error::*;
