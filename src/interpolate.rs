use num_traits::ToPrimitive;

use crate::error::FieldError;
use crate::float::Float;
use crate::sample::SampleStore;
use crate::vec2::Vec2;

/// Parameters controlling inverse-distance weighting.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InterpolationParams<F> {
    /// Stabilizing offset added to every distance (default: 1e-5).
    ///
    /// Keeps the weight finite when the query coincides exactly with a
    /// stored sample position.
    pub epsilon: F,
}

impl Default for InterpolationParams<f64> {
    fn default() -> Self {
        InterpolationParams { epsilon: 1e-5 }
    }
}

impl Default for InterpolationParams<f32> {
    fn default() -> Self {
        InterpolationParams { epsilon: 1e-5 }
    }
}

impl<F: Float> InterpolationParams<F> {
    pub(crate) fn validate(&self) -> Result<(), FieldError> {
        if self.epsilon <= F::zero() || !self.epsilon.is_finite() {
            return Err(FieldError::InvalidParameter {
                name: "epsilon",
                value: self.epsilon.to_f64().unwrap_or(f64::NAN),
            });
        }
        Ok(())
    }
}

/// Estimate the gradient at `position` by inverse-distance weighting over
/// every sample in `store`.
///
/// Each sample contributes its gradient with weight `1 / (distance + ε)`, so
/// influence decays as `1/distance` but never reaches zero: the field has
/// global support. The result is a convex combination of the stored
/// gradients, continuous everywhere but not differentiable at sample
/// locations.
///
/// Returns [`FieldError::EmptyStore`] when the store holds no samples, and
/// [`FieldError::InvalidParameter`] for a non-positive or non-finite ε —
/// a negative ε would produce negative weights and estimates outside the
/// gradient hull, and a NaN ε would masquerade as a zero field.
pub fn estimate_gradient<F: Float>(
    store: &SampleStore<F>,
    position: Vec2<F>,
    params: &InterpolationParams<F>,
) -> Result<Vec2<F>, FieldError> {
    params.validate()?;
    if store.is_empty() {
        return Err(FieldError::EmptyStore);
    }

    let mut weighted_sum = Vec2::zero();
    let mut total_weight = F::zero();
    for sample in store.iter() {
        let distance = position.distance(sample.position()) + params.epsilon;
        let weight = F::one() / distance;
        weighted_sum += sample.gradient() * weight;
        total_weight = total_weight + weight;
    }

    // Weights are strictly positive for a non-empty store; the zero-vector
    // branch is a degenerate guard only.
    if total_weight > F::zero() {
        Ok(weighted_sum / total_weight)
    } else {
        Ok(Vec2::zero())
    }
}
