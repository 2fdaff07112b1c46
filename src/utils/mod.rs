//! Utility modules for escape_planner

pub mod visualization;

pub use visualization::{Visualizer, PathStyle, PointStyle, colors};
