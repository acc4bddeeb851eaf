use crate::float::Float;
use crate::vec2::Vec2;

/// Ground-truth provider for a scalar field.
///
/// Implementors supply the true value and gradient at a position. Both are
/// assumed pure and deterministic, and potentially expensive — the entire
/// sparse-sampling design exists to minimize calls to this trait.
pub trait Oracle<F: Float> {
    /// Scalar field value at `position`.
    fn value(&self, position: Vec2<F>) -> F;

    /// Gradient of the field at `position`.
    fn gradient(&self, position: Vec2<F>) -> Vec2<F>;
}

impl<F: Float, O: Oracle<F> + ?Sized> Oracle<F> for &O {
    fn value(&self, position: Vec2<F>) -> F {
        (**self).value(position)
    }

    fn gradient(&self, position: Vec2<F>) -> Vec2<F> {
        (**self).gradient(position)
    }
}
