//! Vehicle dynamics module
//!
//! Rigid-body planar model with sign-dependent drag and thruster saturation.

pub mod actuator;
pub mod boat;
pub mod drag;
pub mod rotation;

pub use actuator::ActuatorMap;
pub use boat::BoatDynamics;
pub use drag::DragModel;
pub use rotation::{rotation, wrap_angle};
