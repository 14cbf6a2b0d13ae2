//! Pure physics/math primitives for the magnetic pendulum.
//!
//! Nothing in here knows about scanning or drawing.

mod body;
mod magnet;
mod math;
mod physics_params;

pub mod physics;

pub use body::{classify, Body, Classification, Settlement};
pub use magnet::{ring, Magnet};
pub use math::{Vector, NORMALIZE_EPSILON};
pub use physics::{DAMPING, DT, HZ, MAX_ITERATIONS, PROXIMITY_RADIUS, SETTLE_THRESHOLD, SOFTENING};
pub use physics_params::PhysicsParams;
