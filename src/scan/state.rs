use crate::sim::Vector;

/// What a single cursor advance did.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Advance {
    /// Moved one column to the right.
    Column,
    /// Wrapped to the start of the next row.
    Row,
    /// Passed the last row: back to the first corner with a smaller step.
    Refined,
}

/// Raster cursor over the square `[min, max]²` with a shrinking step.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ScanState {
    pub cursor_x: f64,
    pub cursor_y: f64,
    pub step: f64,
    pub min: f64,
    pub max: f64,
    pub zoom_factor: f64,
    /// Completed sweeps of the whole square.
    pub pass: u32,
}

impl ScanState {
    pub fn new(half_extent: f64, step: f64, zoom_factor: f64) -> Self {
        Self {
            cursor_x: -half_extent,
            cursor_y: -half_extent,
            step,
            min: -half_extent,
            max: half_extent,
            zoom_factor,
            pass: 0,
        }
    }

    pub fn cursor(&self) -> Vector {
        Vector::xy(self.cursor_x, self.cursor_y)
    }

    /// Top-left corner of the cell painted for the current sample.
    pub fn cell_origin(&self) -> Vector {
        let half = self.step / 2.0;
        Vector::xy(self.cursor_x - half, self.cursor_y - half)
    }

    pub fn advance(&mut self) -> Advance {
        let mut event = Advance::Column;

        self.cursor_x += self.step;
        if self.cursor_x > self.max {
            self.cursor_x = self.min;
            self.cursor_y += self.step;
            event = Advance::Row;
        }
        if self.cursor_y > self.max {
            self.cursor_x = self.min;
            self.cursor_y = self.min;
            self.step *= self.zoom_factor;
            self.pass += 1;
            event = Advance::Refined;
        }

        event
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const TOLERANCE: f64 = 1e-12;

    #[test]
    fn starts_at_lower_corner() {
        let state = ScanState::new(0.3, 0.01, 0.6);
        assert_eq!(state.cursor(), Vector::xy(-0.3, -0.3));
        assert_eq!(state.pass, 0);
    }

    #[test]
    fn cell_origin_is_half_a_step_back() {
        let state = ScanState::new(0.3, 0.01, 0.6);
        let origin = state.cell_origin();
        assert_relative_eq!(origin.x, -0.305, epsilon = TOLERANCE);
        assert_relative_eq!(origin.y, -0.305, epsilon = TOLERANCE);
    }

    #[test]
    fn advance_moves_one_column() {
        let mut state = ScanState::new(0.3, 0.01, 0.6);
        assert_eq!(state.advance(), Advance::Column);
        assert_relative_eq!(state.cursor_x, -0.29, epsilon = TOLERANCE);
        assert_relative_eq!(state.cursor_y, -0.3, epsilon = TOLERANCE);
    }

    #[test]
    fn crossing_right_bound_wraps_row() {
        let mut state = ScanState::new(0.3, 0.25, 0.6);
        assert_eq!(state.advance(), Advance::Column);
        assert_eq!(state.advance(), Advance::Column);
        assert_eq!(state.advance(), Advance::Row);
        assert_relative_eq!(state.cursor_x, -0.3, epsilon = TOLERANCE);
        assert_relative_eq!(state.cursor_y, -0.05, epsilon = TOLERANCE);
    }

    #[test]
    fn crossing_bottom_bound_refines_step() {
        let mut state = ScanState::new(0.3, 0.25, 0.5);
        let events: Vec<Advance> = (0..9).map(|_| state.advance()).collect();

        assert_eq!(events[8], Advance::Refined);
        assert_eq!(events.iter().filter(|e| **e == Advance::Refined).count(), 1);
        assert_eq!(state.cursor(), Vector::xy(-0.3, -0.3));
        assert_relative_eq!(state.step, 0.125, epsilon = TOLERANCE);
        assert_eq!(state.pass, 1);
    }

    #[test]
    fn step_never_grows() {
        let mut state = ScanState::new(0.05, 0.01, 0.6);
        let mut last = state.step;
        for _ in 0..5_000 {
            state.advance();
            assert!(state.step > 0.0);
            assert!(state.step <= last);
            last = state.step;
        }
    }
}
