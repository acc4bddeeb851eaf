//! Seed-store construction and grid evaluation plumbing.
//!
//! A refinement run needs an initial store built by evaluating the oracle on
//! a coarse regular grid; display layers additionally want the interpolated
//! field evaluated at every grid node. Neither is part of the core
//! algorithm, but both are needed to drive it.

use crate::error::FieldError;
use crate::float::Float;
use crate::interpolate::{estimate_gradient, InterpolationParams};
use crate::oracle::Oracle;
use crate::sample::{Sample, SampleStore};
use crate::vec2::Vec2;

/// `n` evenly spaced values from `start` to `stop` inclusive.
///
/// Returns an empty vector for `n = 0` and `[start]` for `n = 1`.
pub fn linspace<F: Float>(start: F, stop: F, n: usize) -> Vec<F> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start)
                / F::from_usize(n - 1).expect("grid size representable as float");
            (0..n)
                .map(|i| start + step * F::from_usize(i).expect("grid index representable"))
                .collect()
        }
    }
}

/// A regular rectangular grid of query positions.
///
/// Nodes are iterated row-major: `y` varies slowest.
#[derive(Debug, Clone)]
pub struct RegularGrid<F> {
    xs: Vec<F>,
    ys: Vec<F>,
}

impl<F: Float> RegularGrid<F> {
    /// Grid spanning `x_range` × `y_range` with `nx` × `ny` nodes.
    pub fn new(x_range: (F, F), y_range: (F, F), nx: usize, ny: usize) -> Self {
        RegularGrid {
            xs: linspace(x_range.0, x_range.1, nx),
            ys: linspace(y_range.0, y_range.1, ny),
        }
    }

    /// Number of nodes along x.
    pub fn nx(&self) -> usize {
        self.xs.len()
    }

    /// Number of nodes along y.
    pub fn ny(&self) -> usize {
        self.ys.len()
    }

    /// Total number of nodes.
    pub fn len(&self) -> usize {
        self.xs.len() * self.ys.len()
    }

    /// True when the grid has no nodes.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Node position at column `i`, row `j`.
    pub fn node(&self, i: usize, j: usize) -> Vec2<F> {
        Vec2::new(self.xs[i], self.ys[j])
    }

    /// All node positions in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Vec2<F>> + '_ {
        self.ys
            .iter()
            .flat_map(move |&y| self.xs.iter().map(move |&x| Vec2::new(x, y)))
    }
}

/// Build a seed store by evaluating the oracle's gradient at every
/// `stride`-th node of `grid` along both axes, starting from index `offset`.
///
/// `offset = 0, stride = 1` samples every node; an interior offset with a
/// large stride produces the coarse, sparse seeds the refinement loop is
/// designed to start from. An offset past the last node yields an empty
/// store.
pub fn seed_store<F: Float, O: Oracle<F>>(
    oracle: &O,
    grid: &RegularGrid<F>,
    offset: usize,
    stride: usize,
) -> Result<SampleStore<F>, FieldError> {
    if stride == 0 {
        return Err(FieldError::InvalidParameter {
            name: "stride",
            value: 0.0,
        });
    }

    let mut store = SampleStore::new();
    for j in (offset..grid.ny()).step_by(stride) {
        for i in (offset..grid.nx()).step_by(stride) {
            let position = grid.node(i, j);
            store.push(Sample::new(position, oracle.gradient(position))?);
        }
    }
    Ok(store)
}

/// Evaluate the interpolated gradient field at every grid node.
///
/// Returns one vector per node in row-major order, suitable for quiver-style
/// display of the surrogate field.
pub fn sample_field<F: Float>(
    store: &SampleStore<F>,
    grid: &RegularGrid<F>,
    params: &InterpolationParams<F>,
) -> Result<Vec<Vec2<F>>, FieldError> {
    grid.positions()
        .map(|p| estimate_gradient(store, p, params))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::QuarticBowl;
    use approx::assert_abs_diff_eq;

    #[test]
    fn linspace_endpoints_and_spacing() {
        let v = linspace(-1.5, 1.5, 4);
        assert_eq!(v.len(), 4);
        assert_abs_diff_eq!(v[0], -1.5);
        assert_abs_diff_eq!(v[1], -0.5);
        assert_abs_diff_eq!(v[2], 0.5);
        assert_abs_diff_eq!(v[3], 1.5);

        assert!(linspace::<f64>(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(2.0, 5.0, 1), vec![2.0]);
    }

    #[test]
    fn grid_positions_are_row_major() {
        let grid = RegularGrid::new((0.0, 1.0), (0.0, 2.0), 2, 3);
        let positions: Vec<Vec2<f64>> = grid.positions().collect();
        assert_eq!(positions.len(), 6);
        assert_eq!(positions[0], Vec2::new(0.0, 0.0));
        assert_eq!(positions[1], Vec2::new(1.0, 0.0));
        assert_eq!(positions[2], Vec2::new(0.0, 1.0));
        assert_eq!(positions[5], Vec2::new(1.0, 2.0));
        assert_eq!(grid.node(1, 2), Vec2::new(1.0, 2.0));
    }

    #[test]
    fn seed_store_respects_offset_and_stride() {
        let grid = RegularGrid::new((-1.5, 1.5), (-1.5, 1.5), 20, 20);

        let dense = seed_store(&QuarticBowl, &grid, 0, 1).unwrap();
        assert_eq!(dense.len(), 400);

        // Interior coarse seed: indices 1 and 13 along each axis.
        let coarse = seed_store(&QuarticBowl, &grid, 1, 12).unwrap();
        assert_eq!(coarse.len(), 4);
        assert_eq!(coarse[0].position(), grid.node(1, 1));
        assert_eq!(coarse[3].position(), grid.node(13, 13));

        for s in coarse.iter() {
            assert_eq!(s.gradient(), QuarticBowl.gradient(s.position()));
        }
    }

    #[test]
    fn seed_store_rejects_zero_stride() {
        let grid = RegularGrid::new((0.0, 1.0), (0.0, 1.0), 4, 4);
        let err = seed_store(&QuarticBowl, &grid, 0, 0).unwrap_err();
        assert!(matches!(
            err,
            FieldError::InvalidParameter { name: "stride", .. }
        ));
    }

    #[test]
    fn offset_past_grid_yields_empty_store() {
        let grid = RegularGrid::new((0.0, 1.0), (0.0, 1.0), 4, 4);
        let store = seed_store(&QuarticBowl, &grid, 4, 1).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn sample_field_covers_every_node() {
        let grid = RegularGrid::new((-1.0, 1.0), (-1.0, 1.0), 5, 5);
        let store = seed_store(&QuarticBowl, &grid, 0, 2).unwrap();
        let field = sample_field(&store, &grid, &InterpolationParams::default()).unwrap();
        assert_eq!(field.len(), grid.len());
        assert!(field.iter().all(|v| v.is_finite()));
    }

    #[test]
    fn sample_field_fails_on_empty_store() {
        let grid = RegularGrid::new((0.0, 1.0), (0.0, 1.0), 3, 3);
        let store: SampleStore<f64> = SampleStore::new();
        let err = sample_field(&store, &grid, &InterpolationParams::default()).unwrap_err();
        assert_eq!(err, FieldError::EmptyStore);
    }
}
