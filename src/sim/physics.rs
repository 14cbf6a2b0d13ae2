pub const HZ: f64 = 60.0;
pub const DT: f64 = 1.0 / HZ;

/// Added to the raw magnet distance before the inverse-square falloff.
pub const SOFTENING: f64 = 0.05;
/// Softened distances below this produce no force.
pub const FORCE_EPSILON: f64 = 1e-6;
pub const MAGNET_STRENGTH: f64 = 0.01;

pub const PROXIMITY_RADIUS: f64 = 0.01;
pub const SETTLE_THRESHOLD: u32 = 150;
/// Per-step velocity decay, applied regardless of `dt`.
pub const DAMPING: f64 = 0.995;
pub const MAX_ITERATIONS: u32 = 20_000;
