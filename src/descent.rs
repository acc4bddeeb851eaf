use std::fmt;

use num_traits::ToPrimitive;

use crate::error::FieldError;
use crate::float::Float;
use crate::interpolate::{estimate_gradient, InterpolationParams};
use crate::sample::SampleStore;
use crate::vec2::Vec2;

/// Configuration for fixed-step gradient descent over an interpolated field.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DescentConfig<F> {
    /// Step scale applied to the interpolated gradient (default: 0.1).
    pub learning_rate: F,
    /// Stop when the interpolated gradient norm falls below this (default: 1e-5).
    pub tolerance: F,
    /// Maximum number of descent steps (default: 1000).
    pub max_iter: usize,
    /// Interpolation parameters for field queries.
    pub interpolation: InterpolationParams<F>,
}

impl Default for DescentConfig<f64> {
    fn default() -> Self {
        DescentConfig {
            learning_rate: 0.1,
            tolerance: 1e-5,
            max_iter: 1000,
            interpolation: InterpolationParams::default(),
        }
    }
}

impl Default for DescentConfig<f32> {
    fn default() -> Self {
        DescentConfig {
            learning_rate: 0.1,
            tolerance: 1e-5,
            max_iter: 1000,
            interpolation: InterpolationParams::default(),
        }
    }
}

impl<F: Float> DescentConfig<F> {
    pub(crate) fn validate(&self) -> Result<(), FieldError> {
        if self.learning_rate <= F::zero() || !self.learning_rate.is_finite() {
            return Err(FieldError::InvalidParameter {
                name: "learning_rate",
                value: self.learning_rate.to_f64().unwrap_or(f64::NAN),
            });
        }
        if self.tolerance < F::zero() || self.tolerance.is_nan() {
            return Err(FieldError::InvalidParameter {
                name: "tolerance",
                value: self.tolerance.to_f64().unwrap_or(f64::NAN),
            });
        }
        self.interpolation.validate()
    }
}

/// Why descent stopped. Both variants are normal terminations, never errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TerminationReason {
    /// Interpolated gradient norm fell below tolerance.
    GradientNorm,
    /// Reached the maximum number of iterations.
    MaxIterations,
}

impl fmt::Display for TerminationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TerminationReason::GradientNorm => write!(f, "gradient norm below tolerance"),
            TerminationReason::MaxIterations => write!(f, "maximum iterations reached"),
        }
    }
}

/// Result of a descent run.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DescentResult<F> {
    /// Terminal position.
    pub position: Vec2<F>,
    /// Interpolated gradient norm at the terminal position.
    pub gradient_norm: F,
    /// Number of descent steps taken.
    pub iterations: usize,
    /// Reason for termination.
    pub termination: TerminationReason,
}

/// Fixed-step gradient descent against the field interpolated from `store`.
///
/// Each iteration estimates the gradient at the current position and steps
/// `learning_rate` times against it; no line search and no adaptive rate.
/// Terminates when the interpolated gradient norm drops below `tolerance` or
/// after `max_iter` steps — exhausting the budget is a silent, normal outcome,
/// distinguished only by [`DescentResult::termination`].
///
/// The interpolated field is globally supported by every sample, so descent
/// may settle at a stationary point of the surrogate that is not a stationary
/// point of the underlying function; refinement rounds correct this by
/// sampling at each terminal position.
pub fn descend<F: Float>(
    store: &SampleStore<F>,
    start: Vec2<F>,
    config: &DescentConfig<F>,
) -> Result<DescentResult<F>, FieldError> {
    config.validate()?;
    if store.is_empty() {
        return Err(FieldError::EmptyStore);
    }

    let mut current = start;
    for iter in 0..config.max_iter {
        let gradient = estimate_gradient(store, current, &config.interpolation)?;
        let step_size = gradient.norm();
        if step_size < config.tolerance {
            return Ok(DescentResult {
                position: current,
                gradient_norm: step_size,
                iterations: iter,
                termination: TerminationReason::GradientNorm,
            });
        }
        current -= gradient * config.learning_rate;
    }

    // Budget exhausted: one extra field query to report the terminal norm.
    let gradient = estimate_gradient(store, current, &config.interpolation)?;
    Ok(DescentResult {
        position: current,
        gradient_norm: gradient.norm(),
        iterations: config.max_iter,
        termination: TerminationReason::MaxIterations,
    })
}
