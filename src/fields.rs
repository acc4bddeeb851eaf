//! Analytic test fields with closed-form gradients.
//!
//! Interchangeable [`Oracle`] implementations used by the examples, tests,
//! and benchmarks. All three have a local minimum reachable from the
//! `(-1, -1)` region; [`OscillatoryWells`] is non-convex with multiple
//! stationary points.

use crate::float::Float;
use crate::oracle::Oracle;
use crate::vec2::Vec2;

fn two<F: Float>() -> F {
    F::one() + F::one()
}

fn four<F: Float>() -> F {
    two::<F>() + two::<F>()
}

/// Quartic bowl: `f(x, y) = x⁴ + y⁴ + 2x² + 2y²`.
///
/// Convex, single minimum at the origin.
#[derive(Debug, Clone, Copy, Default)]
pub struct QuarticBowl;

impl<F: Float> Oracle<F> for QuarticBowl {
    fn value(&self, p: Vec2<F>) -> F {
        let Vec2 { x, y } = p;
        x.powi(4) + y.powi(4) + two::<F>() * x * x + two::<F>() * y * y
    }

    fn gradient(&self, p: Vec2<F>) -> Vec2<F> {
        let Vec2 { x, y } = p;
        Vec2::new(
            four::<F>() * x.powi(3) + four::<F>() * x,
            four::<F>() * y.powi(3) + four::<F>() * y,
        )
    }
}

/// Exponential paraboloid: `f(x, y) = x² + y² + e^(x+y)`.
///
/// Convex; the exponential term pushes the minimum off the origin into the
/// third quadrant.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExpParaboloid;

impl<F: Float> Oracle<F> for ExpParaboloid {
    fn value(&self, p: Vec2<F>) -> F {
        let Vec2 { x, y } = p;
        x * x + y * y + (x + y).exp()
    }

    fn gradient(&self, p: Vec2<F>) -> Vec2<F> {
        let Vec2 { x, y } = p;
        let common = (x + y).exp();
        Vec2::new(two::<F>() * x + common, two::<F>() * y + common)
    }
}

/// Oscillatory wells: `f(x, y) = sin(x² + y²) + (x² − y²)²`.
///
/// Non-convex, with rings of stationary points; which well descent lands in
/// depends on the starting position and sample coverage.
#[derive(Debug, Clone, Copy, Default)]
pub struct OscillatoryWells;

impl<F: Float> Oracle<F> for OscillatoryWells {
    fn value(&self, p: Vec2<F>) -> F {
        let Vec2 { x, y } = p;
        (x * x + y * y).sin() + (x * x - y * y).powi(2)
    }

    fn gradient(&self, p: Vec2<F>) -> Vec2<F> {
        let Vec2 { x, y } = p;
        let radial = (x * x + y * y).cos();
        let saddle = x * x - y * y;
        Vec2::new(
            two::<F>() * x * radial + four::<F>() * x * saddle,
            two::<F>() * y * radial - four::<F>() * y * saddle,
        )
    }
}
