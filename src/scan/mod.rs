//! Progressive zoom-refinement scan over the simulation plane.
//!
//! `ScanDriver::advance` is the single entry point a frame loop calls; it
//! classifies one batch of sample points and paints a cell for each.

mod config;
mod driver;
mod mapper;
mod state;
mod surface;

pub use config::ScanConfig;
pub use driver::{BatchReport, ScanDriver, ScanPhase, StopHandle};
pub use mapper::CoordinateMapper;
pub use state::{Advance, ScanState};
pub use surface::{Color, Surface};
