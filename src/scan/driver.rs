use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use log::{debug, info, trace};

use super::config::ScanConfig;
use super::mapper::CoordinateMapper;
use super::state::{Advance, ScanState};
use super::surface::{Color, Surface};
use crate::error::Result;
use crate::sim::{classify, Body, Classification, Magnet, PhysicsParams};

/// Body marker radius is `camera_zoom / BODY_MARKER_DIVISOR`.
const BODY_MARKER_DIVISOR: f64 = 70.0;
const MAGNET_MARKER_DIVISOR: f64 = 100.0;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ScanPhase {
    Scanning,
    /// Pass limit reached or stop requested; further batches do nothing.
    Done,
}

/// Summary of one `advance` call.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct BatchReport {
    pub samples: usize,
    pub unresolved: usize,
    /// At least one sweep finished during this batch.
    pub refined: bool,
    pub phase: ScanPhase,
}

/// Cancellation flag that can be handed to whoever owns the frame loop.
#[derive(Debug, Clone, Default)]
pub struct StopHandle(Arc<AtomicBool>);

impl StopHandle {
    pub fn stop(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_stopped(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Progressive basin scan, advanced one batch at a time by an external tick.
pub struct ScanDriver {
    config: ScanConfig,
    magnets: Vec<Magnet>,
    params: PhysicsParams,
    state: ScanState,
    phase: ScanPhase,
    stop: StopHandle,
    last_body: Option<Body>,
    classified: u64,
    unresolved: u64,
}

impl ScanDriver {
    pub fn new(config: ScanConfig) -> Result<Self> {
        config.validate()?;
        let magnets = config.magnets();
        let params = config.physics();
        let state = ScanState::new(config.half_extent, config.initial_step, config.zoom_factor);

        Ok(Self {
            config,
            magnets,
            params,
            state,
            phase: ScanPhase::Scanning,
            stop: StopHandle::default(),
            last_body: None,
            classified: 0,
            unresolved: 0,
        })
    }

    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    pub fn magnets(&self) -> &[Magnet] {
        &self.magnets
    }

    pub fn state(&self) -> &ScanState {
        &self.state
    }

    pub fn phase(&self) -> ScanPhase {
        self.phase
    }

    /// Completed sweeps.
    pub fn pass(&self) -> u32 {
        self.state.pass
    }

    pub fn step_size(&self) -> f64 {
        self.state.step
    }

    /// Samples classified so far, including non-convergent ones.
    pub fn classified(&self) -> u64 {
        self.classified
    }

    pub fn unresolved(&self) -> u64 {
        self.unresolved
    }

    pub fn stop_handle(&self) -> StopHandle {
        self.stop.clone()
    }

    pub fn stop(&self) {
        self.stop.stop();
    }

    /// Color a classification is painted with; a magnet index outside the ring
    /// gets `unresolved_color`.
    pub fn color_of(&self, classification: Classification) -> Color {
        match classification {
            Classification::Magnet(index) => match self.magnets.get(index) {
                Some(magnet) => self.config.magnet_color(magnet.color_id),
                None => self.config.unresolved_color,
            },
            Classification::NonConvergent => self.config.unresolved_color,
        }
    }

    /// Classifies up to `batch_size` samples, painting one cell each.
    pub fn advance<S: Surface + ?Sized>(&mut self, surface: &mut S) -> BatchReport {
        let mut report = BatchReport {
            samples: 0,
            unresolved: 0,
            refined: false,
            phase: self.phase,
        };

        if self.phase == ScanPhase::Done {
            return report;
        }
        if self.stop.is_stopped() {
            info!(
                "scan stopped after {} passes, {} samples ({} unresolved)",
                self.state.pass, self.classified, self.unresolved
            );
            self.phase = ScanPhase::Done;
            report.phase = self.phase;
            return report;
        }

        let mapper = CoordinateMapper::new(surface.width(), surface.height(), self.config.camera_zoom);

        for _ in 0..self.config.batch_size {
            let settlement = classify(self.state.cursor(), &self.magnets, &self.params);
            if settlement.classification == Classification::NonConvergent {
                report.unresolved += 1;
                self.unresolved += 1;
            }
            report.samples += 1;
            self.classified += 1;
            self.last_body = Some(settlement.body);

            let corner = mapper.world_to_screen(self.state.cell_origin());
            let side = mapper.scale(self.state.step);
            surface.fill_rect(corner.x, corner.y, side, side, self.color_of(settlement.classification));

            if self.state.advance() == Advance::Refined {
                report.refined = true;
                debug!(
                    "pass {} complete, step refined to {:.6}",
                    self.state.pass, self.state.step
                );
                if self.config.max_passes.is_some_and(|limit| self.state.pass >= limit) {
                    info!(
                        "scan done after {} passes, {} samples ({} unresolved)",
                        self.state.pass, self.classified, self.unresolved
                    );
                    self.phase = ScanPhase::Done;
                    break;
                }
            }
        }

        trace!(
            "batch: {} samples, {} unresolved, cursor ({:.4}, {:.4})",
            report.samples,
            report.unresolved,
            self.state.cursor_x,
            self.state.cursor_y
        );

        report.phase = self.phase;
        report
    }

    /// Draws the magnets and the most recently simulated body on top of the scan.
    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) {
        let mapper = CoordinateMapper::new(surface.width(), surface.height(), self.config.camera_zoom);

        for magnet in &self.magnets {
            let p = mapper.world_to_screen(magnet.position);
            surface.fill_circle(
                p.x,
                p.y,
                self.config.camera_zoom / MAGNET_MARKER_DIVISOR,
                self.config.magnet_color(magnet.color_id),
            );
        }

        if let Some(body) = &self.last_body {
            let p = mapper.world_to_screen(body.position);
            surface.fill_circle(
                p.x,
                p.y,
                self.config.camera_zoom / BODY_MARKER_DIVISOR,
                Color::GRAY,
            );
        }
    }
}
