//! Scan configuration, fixed at driver construction.
//!
//! Every field has a default matching the classic three-magnet picture, so a
//! TOML file only needs the values it changes:
//!
//! ```toml
//! magnet_count = 4
//! zoom_factor = 0.5
//! max_passes = 3
//! palette = [[0, 0, 0], [0, 0, 255], [238, 130, 238], [0, 160, 0]]
//! ```

use serde::{Deserialize, Serialize};

use super::surface::Color;
use crate::error::{Error, Result};
use crate::sim::{physics, ring, Magnet, PhysicsParams};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    pub magnet_count: usize,
    /// Radius of the circle the magnets sit on.
    pub magnet_spacing: f64,
    pub magnet_angle_offset: f64,
    pub magnet_strength: f64,
    pub softening: f64,
    pub proximity_radius: f64,
    pub settle_threshold: u32,
    pub damping: f64,
    pub dt: f64,
    pub max_iterations: u32,

    /// Step multiplier applied after each full sweep.
    pub zoom_factor: f64,
    pub initial_step: f64,
    pub half_extent: f64,
    /// Pixels per world unit.
    pub camera_zoom: f64,
    pub batch_size: usize,
    /// Stop after this many sweeps; `None` keeps refining forever.
    pub max_passes: Option<u32>,

    pub palette: Vec<Color>,
    pub unresolved_color: Color,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            magnet_count: 3,
            magnet_spacing: 0.1,
            magnet_angle_offset: 0.0,
            magnet_strength: physics::MAGNET_STRENGTH,
            softening: physics::SOFTENING,
            proximity_radius: physics::PROXIMITY_RADIUS,
            settle_threshold: physics::SETTLE_THRESHOLD,
            damping: physics::DAMPING,
            dt: physics::DT,
            max_iterations: physics::MAX_ITERATIONS,
            zoom_factor: 0.6,
            initial_step: 0.01,
            half_extent: 0.3,
            camera_zoom: 1200.0,
            batch_size: 50,
            max_passes: None,
            palette: vec![Color::BLACK, Color::BLUE, Color::VIOLET],
            unresolved_color: Color::RED,
        }
    }
}

impl ScanConfig {
    /// Parses and validates a TOML document.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: ScanConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        fn invalid(reason: impl Into<String>) -> Result<()> {
            Err(Error::InvalidConfiguration(reason.into()))
        }

        if self.magnet_count == 0 {
            return invalid("at least one magnet is required");
        }
        if !(self.initial_step > 0.0) {
            return invalid(format!("initial_step must be positive, got {}", self.initial_step));
        }
        if !(self.zoom_factor > 0.0 && self.zoom_factor <= 1.0) {
            return invalid(format!("zoom_factor must be in (0, 1], got {}", self.zoom_factor));
        }
        if !(self.camera_zoom > 0.0) {
            return invalid(format!("camera_zoom must be positive, got {}", self.camera_zoom));
        }
        if !(self.half_extent > 0.0) {
            return invalid(format!("half_extent must be positive, got {}", self.half_extent));
        }
        if !(self.dt > 0.0) {
            return invalid(format!("dt must be positive, got {}", self.dt));
        }
        if !(self.damping > 0.0 && self.damping <= 1.0) {
            return invalid(format!("damping must be in (0, 1], got {}", self.damping));
        }
        if !(self.proximity_radius > 0.0) {
            return invalid(format!(
                "proximity_radius must be positive, got {}",
                self.proximity_radius
            ));
        }
        if !(self.softening >= 0.0) || !self.magnet_strength.is_finite() {
            return invalid("softening must be non-negative and magnet_strength finite");
        }
        if self.settle_threshold == 0 {
            return invalid("settle_threshold must be at least 1");
        }
        if self.max_iterations == 0 {
            return invalid("max_iterations must be at least 1");
        }
        if self.batch_size == 0 {
            return invalid("batch_size must be at least 1");
        }
        if self.palette.is_empty() {
            return invalid("palette must contain at least one color");
        }
        Ok(())
    }

    pub fn magnets(&self) -> Vec<Magnet> {
        ring(self.magnet_count, self.magnet_spacing, self.magnet_angle_offset)
    }

    pub fn physics(&self) -> PhysicsParams {
        PhysicsParams::new(
            self.magnet_strength,
            self.softening,
            self.proximity_radius,
            self.settle_threshold,
            self.damping,
            self.dt,
            self.max_iterations,
        )
    }

    /// Palette entry for a magnet, cycling when there are more magnets than colors.
    pub fn magnet_color(&self, color_id: usize) -> Color {
        self.palette[color_id % self.palette.len()]
    }
}
