use super::magnet::Magnet;
use super::math::Vector;
use super::PhysicsParams;

/// Which magnet a starting point ends up resting on.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Classification {
    /// Index of the winning magnet.
    Magnet(usize),
    /// The body did not stay near any magnet long enough before the iteration cap.
    NonConvergent,
}

impl Classification {
    pub fn magnet(self) -> Option<usize> {
        match self {
            Classification::Magnet(index) => Some(index),
            Classification::NonConvergent => None,
        }
    }
}

/// Outcome of running one body to classification.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Settlement {
    pub classification: Classification,
    /// Integration steps taken.
    pub steps: u32,
    /// Body state when the loop stopped.
    pub body: Body,
}

/// Point mass swinging over the magnets.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Body {
    pub position: Vector,
    pub velocity: Vector,
    /// Consecutive qualifying steps spent near `closest`.
    pub close_timer: u32,
    pub closest: Option<usize>,
}

impl Body {
    /// Fresh body at rest.
    pub const fn at(position: Vector) -> Self {
        Self {
            position,
            velocity: Vector::ZERO,
            close_timer: 0,
            closest: None,
        }
    }

    /// One explicit Euler step of `params.dt`.
    ///
    /// Magnet forces and the closeness tracker are updated per magnet in index
    /// order, then the spring toward the origin, then per-step damping, and
    /// finally the position moves with the updated velocity.
    pub fn integrate(&mut self, magnets: &[Magnet], params: &PhysicsParams) {
        let dt = params.dt;

        for (index, magnet) in magnets.iter().enumerate() {
            if magnet.position.distance(self.position) < params.proximity_radius {
                if self.closest == Some(index) {
                    self.close_timer = self.close_timer.saturating_add(1);
                } else {
                    self.closest = Some(index);
                    self.close_timer = 0;
                }
            }
            self.velocity = self.velocity + magnet.force(self.position, params) * dt;
        }

        let restoring = -self.position;
        self.velocity = self.velocity + restoring * dt;

        self.velocity = self.velocity * params.damping;
        self.position = self.position + self.velocity * dt;
    }

    pub fn is_settled(&self, threshold: u32) -> bool {
        self.closest.is_some() && self.close_timer >= threshold
    }
}

/// Releases a body at rest from `start` and integrates until it has stayed
/// near one magnet for `settle_threshold` steps, or `max_iterations` steps
/// have run.
pub fn classify(start: Vector, magnets: &[Magnet], params: &PhysicsParams) -> Settlement {
    let mut body = Body::at(start);
    let mut steps = 0;

    while body.close_timer < params.settle_threshold {
        if steps >= params.max_iterations {
            break;
        }
        body.integrate(magnets, params);
        steps += 1;
    }

    let classification = match body.closest {
        Some(index) if body.is_settled(params.settle_threshold) => Classification::Magnet(index),
        _ => Classification::NonConvergent,
    };

    Settlement {
        classification,
        steps,
        body,
    }
}
