//! Raster output for scans run outside a host canvas.

mod canvas;

pub use canvas::Canvas;
