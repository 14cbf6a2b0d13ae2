use crate::sim::Vector;

/// Affine map between simulation space and surface pixels.
///
/// The world origin lands on the surface centre and world `y` grows in the
/// same direction as pixel rows (downward).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CoordinateMapper {
    pub center: Vector,
    pub zoom: f64,
}

impl CoordinateMapper {
    pub fn new(width: f64, height: f64, zoom: f64) -> Self {
        Self {
            center: Vector::xy(width / 2.0, height / 2.0),
            zoom,
        }
    }

    pub fn world_to_screen(&self, p: Vector) -> Vector {
        Vector::xy(
            self.center.x + p.x * self.zoom,
            self.center.y + p.y * self.zoom,
        )
    }

    pub fn screen_to_world(&self, p: Vector) -> Vector {
        Vector::xy(
            (p.x - self.center.x) / self.zoom,
            (p.y - self.center.y) / self.zoom,
        )
    }

    /// Converts a world-space length to pixels.
    pub fn scale(&self, length: f64) -> f64 {
        length * self.zoom
    }
}
