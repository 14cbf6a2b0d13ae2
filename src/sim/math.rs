use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::error::{Error, Result};

/// Below this magnitude `normalize` hands the vector back untouched.
pub const NORMALIZE_EPSILON: f64 = 1e-6;

/// Relative size below which the perpendicular part of an axis rotation counts as
/// vanished, measured against the operands' own magnitudes.
const AXIS_EPSILON: f64 = 1e-12;

/// Value-type vector in simulation space.
///
/// 2D callers leave `z` at zero; every operation is then the plain 2D one,
/// since a zero `z` contributes nothing to length, dot or distance.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Vector {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub const fn xy(x: f64, y: f64) -> Self {
        Self::new(x, y, 0.0)
    }

    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);
    pub const UP: Self = Self::new(0.0, 1.0, 0.0);
    pub const DOWN: Self = Self::new(0.0, -1.0, 0.0);

    /// Builds a vector from up to three leading components; missing ones are zero.
    pub fn from_slice(components: &[f64]) -> Self {
        let at = |i: usize| components.get(i).copied().unwrap_or(0.0);
        Self::new(at(0), at(1), at(2))
    }

    pub fn length(self) -> f64 {
        self.dot(self).sqrt()
    }

    pub fn distance(self, other: Self) -> f64 {
        (self - other).length()
    }

    /// Unit vector in the same direction, or `self` unchanged when its length
    /// is below [`NORMALIZE_EPSILON`].
    pub fn normalize(self) -> Self {
        let len = self.length();
        if len < NORMALIZE_EPSILON {
            return self;
        }
        self / len
    }

    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn cross(self, other: Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    pub fn mul_components(self, other: Self) -> Self {
        Self::new(self.x * other.x, self.y * other.y, self.z * other.z)
    }

    /// Rotates counter-clockwise in the xy plane; `z` is carried through.
    pub fn rotate_2d(self, angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self::new(
            self.x * cos - self.y * sin,
            self.x * sin + self.y * cos,
            self.z,
        )
    }

    /// Rotates around `axis` by splitting into axis-parallel and perpendicular
    /// parts and turning the perpendicular part within its own plane.
    ///
    /// Fails with [`Error::DegenerateRotationAxis`] when the axis has zero length
    /// or `self` is parallel to it. Both checks scale with the inputs, so tiny
    /// but well-conditioned vectors still rotate.
    pub fn rotate_around_axis(self, axis: Self, angle: f64) -> Result<Self> {
        let axis_sq = axis.dot(axis);
        if axis_sq == 0.0 {
            return Err(Error::DegenerateRotationAxis);
        }

        let parallel = axis * (self.dot(axis) / axis_sq);
        let perpendicular = self - parallel;
        let perp_len = perpendicular.length();
        if perp_len <= AXIS_EPSILON * self.length() {
            return Err(Error::DegenerateRotationAxis);
        }

        let w = axis.cross(perpendicular);
        let w_len = w.length();
        if w_len <= AXIS_EPSILON * axis.length() * perp_len {
            return Err(Error::DegenerateRotationAxis);
        }

        let (sin, cos) = angle.sin_cos();
        let turned = (perpendicular * (cos / perp_len) + w * (sin / w_len)) * perp_len;
        Ok(turned + parallel)
    }

    /// Removes the component along `normal`, which is expected to be unit length.
    pub fn project_onto_plane(self, normal: Self) -> Self {
        self - normal * normal.dot(self)
    }

    pub fn lerp(self, other: Self, t: f64) -> Self {
        self + (other - self) * t
    }
}

impl Add for Vector {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl Sub for Vector {
    type Output = Self;
    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl Mul<f64> for Vector {
    type Output = Self;
    fn mul(self, scalar: f64) -> Self {
        Self::new(self.x * scalar, self.y * scalar, self.z * scalar)
    }
}

impl Div<f64> for Vector {
    type Output = Self;
    fn div(self, scalar: f64) -> Self {
        Self::new(self.x / scalar, self.y / scalar, self.z / scalar)
    }
}

impl Neg for Vector {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl Default for Vector {
    fn default() -> Self {
        Self::ZERO
    }
}
