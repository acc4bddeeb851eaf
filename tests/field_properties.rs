use approx::assert_abs_diff_eq;
use gradfield::{
    estimate_gradient, seed_store, FieldError, InterpolationParams, OscillatoryWells,
    QuarticBowl, RegularGrid, Sample, SampleStore, Vec2,
};

// ============================================================
// Interpolated-field properties over realistic stores
// ============================================================

#[test]
fn convex_combination_over_seeded_store() {
    let grid = RegularGrid::new((-1.5, 1.5), (-1.5, 1.5), 20, 20);
    let store = seed_store(&OscillatoryWells, &grid, 0, 4).unwrap();
    let params = InterpolationParams::default();

    let mut lo = Vec2::new(f64::INFINITY, f64::INFINITY);
    let mut hi = Vec2::new(f64::NEG_INFINITY, f64::NEG_INFINITY);
    for s in store.iter() {
        lo = lo.min(s.gradient());
        hi = hi.max(s.gradient());
    }

    // Query everywhere on a finer grid, including far outside the seed hull.
    let queries = RegularGrid::new((-3.0, 3.0), (-3.0, 3.0), 13, 13);
    for p in queries.positions() {
        let g = estimate_gradient(&store, p, &params).unwrap();
        assert!(
            g.x >= lo.x && g.x <= hi.x && g.y >= lo.y && g.y <= hi.y,
            "estimate at {p:?} escaped the gradient hull: {g:?}"
        );
    }
}

#[test]
fn single_sample_store_is_constant_field() {
    let sample = Sample::new(Vec2::new(1.0, 1.0), Vec2::new(2.0, 2.0)).unwrap();
    let store: SampleStore<f64> = [sample].into_iter().collect();
    let params = InterpolationParams::default();

    // Exactly the stored gradient, regardless of query distance.
    let g = estimate_gradient(&store, Vec2::new(1.0, 1.0), &params).unwrap();
    assert_eq!(g, Vec2::new(2.0, 2.0));

    let g = estimate_gradient(&store, Vec2::new(-50.0, 75.0), &params).unwrap();
    assert_eq!(g, Vec2::new(2.0, 2.0));
}

#[test]
fn influence_decays_monotonically_along_a_transect() {
    // Symmetric two-sample setup: the x-component of the estimate equals the
    // normalized weight of the left sample.
    let store: SampleStore<f64> = [
        Sample::new(Vec2::new(-1.0, 0.0), Vec2::new(1.0, 0.0)).unwrap(),
        Sample::new(Vec2::new(1.0, 0.0), Vec2::new(0.0, 0.0)).unwrap(),
    ]
    .into_iter()
    .collect();
    let params = InterpolationParams::default();

    let mut previous = f64::INFINITY;
    for step in 0..9 {
        let x = -0.8 + 0.2 * step as f64;
        let g = estimate_gradient(&store, Vec2::new(x, 0.0), &params).unwrap();
        assert!(
            g.x < previous,
            "left sample's influence should fall as the query moves right, \
             got {} after {} at x = {x}",
            g.x,
            previous
        );
        previous = g.x;
    }
}

#[test]
fn negative_epsilon_is_rejected_not_extrapolated() {
    // With ε = -1 the weights of samples closer than one unit flip negative,
    // which would push the estimate outside the gradient hull. The query has
    // to fail instead of extrapolating.
    let store: SampleStore<f64> = [
        Sample::new(Vec2::new(0.5, 0.0), Vec2::new(1.0, 0.0)).unwrap(),
        Sample::new(Vec2::new(1.5, 0.0), Vec2::new(0.0, 0.0)).unwrap(),
        Sample::new(Vec2::new(2.0, 0.0), Vec2::new(1.0, 0.0)).unwrap(),
    ]
    .into_iter()
    .collect();

    let err = estimate_gradient(&store, Vec2::zero(), &InterpolationParams { epsilon: -1.0 })
        .unwrap_err();
    assert!(matches!(
        err,
        FieldError::InvalidParameter { name: "epsilon", .. }
    ));
}

#[test]
fn estimate_is_deterministic() {
    let grid = RegularGrid::new((-1.0, 1.0), (-1.0, 1.0), 10, 10);
    let store = seed_store(&QuarticBowl, &grid, 0, 3).unwrap();
    let params = InterpolationParams::default();
    let query = Vec2::new(0.37, -0.81);

    let a = estimate_gradient(&store, query, &params).unwrap();
    let b = estimate_gradient(&store, query, &params).unwrap();
    assert_eq!(a, b);
}

#[test]
fn epsilon_is_configurable() {
    let store: SampleStore<f64> = [
        Sample::new(Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0)).unwrap(),
        Sample::new(Vec2::new(1.0, 0.0), Vec2::new(-1.0, 0.0)).unwrap(),
    ]
    .into_iter()
    .collect();

    // A larger epsilon flattens the weights, pulling the coincident-query
    // estimate away from the local sample and toward the mean.
    let sharp = estimate_gradient(
        &store,
        Vec2::zero(),
        &InterpolationParams { epsilon: 1e-9 },
    )
    .unwrap();
    let blunt = estimate_gradient(
        &store,
        Vec2::zero(),
        &InterpolationParams { epsilon: 0.5 },
    )
    .unwrap();

    assert_abs_diff_eq!(sharp.x, 1.0, epsilon = 1e-6);
    assert!(blunt.x < sharp.x);
}
