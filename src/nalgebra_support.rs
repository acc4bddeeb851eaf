//! nalgebra adapters for gradfield's 2-D types.
//!
//! Thin conversion helpers between [`Vec2`] and `nalgebra::Vector2`, plus a
//! store constructor for callers that keep their sampled data in nalgebra
//! matrices.

use nalgebra::{Matrix2xX, Vector2};

use crate::error::FieldError;
use crate::float::Float;
use crate::sample::{Sample, SampleStore};
use crate::vec2::Vec2;

/// Convert a [`Vec2`] into a `nalgebra::Vector2`.
pub fn to_nalgebra<F: Float>(v: Vec2<F>) -> Vector2<F> {
    Vector2::new(v.x, v.y)
}

/// Convert a `nalgebra::Vector2` into a [`Vec2`].
pub fn from_nalgebra<F: Float>(v: &Vector2<F>) -> Vec2<F> {
    Vec2::new(v[0], v[1])
}

/// Build a sample from nalgebra position and gradient vectors.
pub fn sample_from_nalgebra<F: Float>(
    position: &Vector2<F>,
    gradient: &Vector2<F>,
) -> Result<Sample<F>, FieldError> {
    Sample::new(from_nalgebra(position), from_nalgebra(gradient))
}

/// Build a store from paired position/gradient columns.
///
/// Column `k` of `positions` and column `k` of `gradients` form one sample;
/// both matrices must have the same number of columns.
pub fn store_from_columns<F: Float>(
    positions: &Matrix2xX<F>,
    gradients: &Matrix2xX<F>,
) -> Result<SampleStore<F>, FieldError> {
    if positions.ncols() != gradients.ncols() {
        return Err(FieldError::InvalidParameter {
            name: "gradients.ncols",
            value: gradients.ncols() as f64,
        });
    }

    let mut store = SampleStore::new();
    for k in 0..positions.ncols() {
        let p = Vec2::new(positions[(0, k)], positions[(1, k)]);
        let g = Vec2::new(gradients[(0, k)], gradients[(1, k)]);
        store.push(Sample::new(p, g)?);
    }
    Ok(store)
}
