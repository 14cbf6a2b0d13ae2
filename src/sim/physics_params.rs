use super::physics;

/// Simulation-wide constants shared by every magnet and body in a scan.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicsParams {
    pub strength: f64,
    pub softening: f64,
    pub proximity_radius: f64,
    pub settle_threshold: u32,
    pub damping: f64,
    pub dt: f64,
    pub max_iterations: u32,
}

impl PhysicsParams {
    pub fn new(
        strength: f64,
        softening: f64,
        proximity_radius: f64,
        settle_threshold: u32,
        damping: f64,
        dt: f64,
        max_iterations: u32,
    ) -> Self {
        Self {
            strength,
            softening,
            proximity_radius,
            settle_threshold,
            damping,
            dt,
            max_iterations,
        }
    }

    pub fn with_strength(self, strength: f64) -> Self {
        Self { strength, ..self }
    }

    pub fn with_max_iterations(self, max_iterations: u32) -> Self {
        Self {
            max_iterations,
            ..self
        }
    }
}

impl Default for PhysicsParams {
    fn default() -> Self {
        Self {
            strength: physics::MAGNET_STRENGTH,
            softening: physics::SOFTENING,
            proximity_radius: physics::PROXIMITY_RADIUS,
            settle_threshold: physics::SETTLE_THRESHOLD,
            damping: physics::DAMPING,
            dt: physics::DT,
            max_iterations: physics::MAX_ITERATIONS,
        }
    }
}
