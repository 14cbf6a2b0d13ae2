//! C FFI for hosts that own the frame loop.
//!
//! Functions:
//! - `pb_driver_new` / `pb_driver_free` - create a driver from TOML text (or defaults)
//! - `pb_driver_advance` - classify one batch, writing the painted cells
//! - `pb_driver_render` - write the magnet and body markers
//! - `pb_driver_stop` / `pb_driver_pass` - cancellation and progress
//!
//! # Error Codes
//! - `0`: Success
//! - `-1`: Null pointer
//! - `-3`: Buffer overflow (resize and retry)

use crate::scan::{Color, ScanConfig, ScanDriver, ScanPhase, Surface};

/// Filled square painted for one sample, in surface pixels.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PbCell {
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub color: Color,
}

/// Filled circle marker, in surface pixels.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PbMarker {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub color: Color,
}

/// Opaque handle to a scan driver.
pub type PbDriverHandle = *mut std::ffi::c_void;

/// Surface that records draw calls into plain vectors for copying out.
struct Recording {
    width: f64,
    height: f64,
    cells: Vec<PbCell>,
    markers: Vec<PbMarker>,
}

impl Recording {
    fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            cells: Vec::new(),
            markers: Vec::new(),
        }
    }
}

impl Surface for Recording {
    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        self.height
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, _h: f64, color: Color) {
        self.cells.push(PbCell {
            x,
            y,
            size: w,
            color,
        });
    }

    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Color) {
        self.markers.push(PbMarker {
            x,
            y,
            radius,
            color,
        });
    }
}

/// Create a driver.
///
/// `toml` may be null (or `toml_len` zero) to use the default configuration.
///
/// # Returns
/// - Valid handle on success (non-null)
/// - Null if the text is not UTF-8, does not parse, or fails validation
///
/// # Safety
/// - `toml` must be null or point to at least `toml_len` readable bytes
#[no_mangle]
pub unsafe extern "C" fn pb_driver_new(toml: *const u8, toml_len: usize) -> PbDriverHandle {
    let config = if toml.is_null() || toml_len == 0 {
        ScanConfig::default()
    } else {
        let bytes = std::slice::from_raw_parts(toml, toml_len);
        let Ok(text) = std::str::from_utf8(bytes) else {
            return std::ptr::null_mut();
        };
        match ScanConfig::from_toml_str(text) {
            Ok(config) => config,
            Err(_) => return std::ptr::null_mut(),
        }
    };

    match ScanDriver::new(config) {
        Ok(driver) => Box::into_raw(Box::new(driver)) as PbDriverHandle,
        Err(_) => std::ptr::null_mut(),
    }
}

/// Free a driver handle.
///
/// # Safety
/// - `handle` must be a valid handle returned by `pb_driver_new`, or null
#[no_mangle]
pub unsafe extern "C" fn pb_driver_free(handle: PbDriverHandle) {
    if !handle.is_null() {
        drop(Box::from_raw(handle as *mut ScanDriver));
    }
}

/// Classify one batch and copy the painted cells out.
///
/// `cells_capacity` must be at least the configured batch size; the check
/// happens before any sample is consumed, so a `-3` leaves the scan untouched.
/// `*done_out` is set to 1 once the scan has finished.
///
/// # Safety
/// - `handle` must be a valid handle from `pb_driver_new`
/// - `cells` must be valid for `cells_capacity` writes
/// - `count_out` and `done_out` must be valid pointers
#[no_mangle]
pub unsafe extern "C" fn pb_driver_advance(
    handle: PbDriverHandle,
    width: f64,
    height: f64,
    cells: *mut PbCell,
    cells_capacity: usize,
    count_out: *mut usize,
    done_out: *mut u8,
) -> i32 {
    if handle.is_null() || cells.is_null() || count_out.is_null() || done_out.is_null() {
        return -1;
    }
    let driver = &mut *(handle as *mut ScanDriver);

    if cells_capacity < driver.config().batch_size {
        return -3;
    }

    let mut surface = Recording::new(width, height);
    let report = driver.advance(&mut surface);

    for (i, cell) in surface.cells.iter().enumerate() {
        *cells.add(i) = *cell;
    }
    *count_out = surface.cells.len();
    *done_out = u8::from(report.phase == ScanPhase::Done);

    0
}

/// Copy the magnet markers and, once a sample has run, the body marker.
///
/// Needs room for `magnet_count + 1` markers.
///
/// # Safety
/// - `handle` must be a valid handle from `pb_driver_new`
/// - `markers` must be valid for `markers_capacity` writes
/// - `count_out` must be a valid pointer
#[no_mangle]
pub unsafe extern "C" fn pb_driver_render(
    handle: PbDriverHandle,
    width: f64,
    height: f64,
    markers: *mut PbMarker,
    markers_capacity: usize,
    count_out: *mut usize,
) -> i32 {
    if handle.is_null() || markers.is_null() || count_out.is_null() {
        return -1;
    }
    let driver = &*(handle as *const ScanDriver);

    let mut surface = Recording::new(width, height);
    driver.render(&mut surface);

    if surface.markers.len() > markers_capacity {
        return -3;
    }
    for (i, marker) in surface.markers.iter().enumerate() {
        *markers.add(i) = *marker;
    }
    *count_out = surface.markers.len();

    0
}

/// Request the scan to stop before its next batch.
///
/// # Safety
/// - `handle` must be a valid handle from `pb_driver_new`
#[no_mangle]
pub unsafe extern "C" fn pb_driver_stop(handle: PbDriverHandle) -> i32 {
    if handle.is_null() {
        return -1;
    }
    (*(handle as *const ScanDriver)).stop();
    0
}

/// Completed sweeps, or `-1` for a null handle.
///
/// # Safety
/// - `handle` must be a valid handle from `pb_driver_new`
#[no_mangle]
pub unsafe extern "C" fn pb_driver_pass(handle: PbDriverHandle) -> i64 {
    if handle.is_null() {
        return -1;
    }
    (*(handle as *const ScanDriver)).pass() as i64
}
