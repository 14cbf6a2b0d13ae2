use approx::assert_relative_eq;
use pendulum_basins::scan::{Advance, Color, ScanConfig, ScanDriver, ScanState, Surface};

struct Sink;

impl Surface for Sink {
    fn width(&self) -> f64 {
        100.0
    }
    fn height(&self) -> f64 {
        100.0
    }
    fn fill_rect(&mut self, _x: f64, _y: f64, _w: f64, _h: f64, _color: Color) {}
    fn fill_circle(&mut self, _x: f64, _y: f64, _radius: f64, _color: Color) {}
}

#[test]
fn step_size_decays_geometrically_over_full_sweeps() {
    let config = ScanConfig::default();
    let mut state = ScanState::new(config.half_extent, config.initial_step, config.zoom_factor);

    let mut steps = vec![state.step];
    while steps.len() < 5 {
        if state.advance() == Advance::Refined {
            steps.push(state.step);
        }
    }

    let expected = [0.01, 0.006, 0.0036, 0.00216, 0.001296];
    for (got, want) in steps.iter().zip(expected) {
        assert_relative_eq!(*got, want, epsilon = 1e-12);
    }
    assert_eq!(state.pass, 4);
}

#[test]
fn driver_refines_step_after_each_sweep() {
    let config = ScanConfig {
        half_extent: 0.01,
        batch_size: 1,
        max_passes: Some(4),
        ..ScanConfig::default()
    };
    let mut driver = ScanDriver::new(config).unwrap();
    let mut sink = Sink;

    let mut seen = vec![driver.step_size()];
    for _ in 0..1_000 {
        let report = driver.advance(&mut sink);
        if report.refined {
            seen.push(driver.step_size());
        }
        if report.phase == pendulum_basins::scan::ScanPhase::Done {
            break;
        }
    }

    assert_eq!(driver.pass(), 4);
    assert_eq!(seen.len(), 5);
    let mut expected = 0.01;
    for got in seen {
        assert_relative_eq!(got, expected, epsilon = 1e-12);
        expected *= 0.6;
    }
}
