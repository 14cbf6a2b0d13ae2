//! Basin-of-attraction renderer for a damped pendulum over fixed magnets.
//!
//! # Architecture
//!
//! Layered modules with strict inward-only dependencies:
//!
//! - **sim**: Vector math, magnets, the pendulum body and its bounded convergence loop
//! - **scan**: Coordinate mapping, raster cursor state, and the batch-driven scan driver
//! - **render**: RGBA canvas implementing the drawing surface
//! - **ffi**: C FFI bindings for hosts that own the frame loop
//!
//! # Usage
//!
//! ```no_run
//! use pendulum_basins::{render::Canvas, scan::{Color, ScanConfig, ScanDriver, ScanPhase}};
//!
//! let config = ScanConfig { max_passes: Some(2), ..ScanConfig::default() };
//! let mut driver = ScanDriver::new(config)?;
//! let mut canvas = Canvas::new(720, 720, Color::WHITE);
//! while driver.advance(&mut canvas).phase == ScanPhase::Scanning {}
//! driver.render(&mut canvas);
//! # Ok::<(), pendulum_basins::Error>(())
//! ```

pub mod error;
pub mod render;
pub mod scan;
pub mod sim;

#[cfg(feature = "ffi")]
pub mod ffi;

// Re-export commonly used types at crate root
pub use error::{Error, Result};
pub use scan::{ScanConfig, ScanDriver};
pub use sim::{Body, Classification, Magnet, PhysicsParams, Vector};
