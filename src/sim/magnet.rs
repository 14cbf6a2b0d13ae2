use super::math::Vector;
use super::physics;
use super::PhysicsParams;

/// Fixed point source of an attractive inverse-square field.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Magnet {
    pub position: Vector,
    /// Index into the scan palette.
    pub color_id: usize,
}

impl Magnet {
    pub const fn new(position: Vector, color_id: usize) -> Self {
        Self { position, color_id }
    }

    /// Force on a unit test mass at `at`, pointing toward the magnet.
    ///
    /// The distance is softened before squaring so the field stays bounded at
    /// the magnet itself. Directly on top of the magnet the direction term
    /// falls back to the zero vector, so the force vanishes there.
    pub fn force(&self, at: Vector, params: &PhysicsParams) -> Vector {
        let distance = self.position.distance(at) + params.softening;
        if distance < physics::FORCE_EPSILON {
            return Vector::ZERO;
        }
        (self.position - at).normalize() * (params.strength / (distance * distance))
    }
}

/// Places `count` magnets evenly on a circle of `radius` around the origin,
/// starting at `angle_offset` and numbering colors in placement order.
pub fn ring(count: usize, radius: f64, angle_offset: f64) -> Vec<Magnet> {
    (0..count)
        .map(|i| {
            let angle = angle_offset + std::f64::consts::TAU / count as f64 * i as f64;
            Magnet::new(Vector::xy(angle.cos() * radius, angle.sin() * radius), i)
        })
        .collect()
}
