use pendulum_basins::sim::{classify, ring, Classification, PhysicsParams, Vector};

#[test]
fn symmetric_three_magnets_from_origin_never_loops_forever() {
    let params = PhysicsParams::default();
    let magnets = ring(3, 0.1, 0.0);

    let settlement = classify(Vector::ZERO, &magnets, &params);

    assert!(settlement.steps <= params.max_iterations);
    match settlement.classification {
        Classification::Magnet(index) => {
            assert!(index < magnets.len());
            assert_eq!(settlement.body.close_timer, params.settle_threshold);
        }
        Classification::NonConvergent => {
            assert_eq!(settlement.steps, params.max_iterations);
        }
    }
}

#[test]
fn tight_iteration_cap_forces_non_convergent() {
    let params = PhysicsParams::default().with_max_iterations(100);
    let magnets = ring(3, 0.1, 0.0);

    // 100 steps cannot accumulate a 150-step closeness streak.
    let settlement = classify(Vector::xy(0.25, -0.25), &magnets, &params);

    assert_eq!(settlement.classification, Classification::NonConvergent);
    assert_eq!(settlement.steps, 100);
}
