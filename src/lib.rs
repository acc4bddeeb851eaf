//! # Active-sampled gradient-field surrogates.
//!
//! Approximates the gradient field of an expensive scalar function from a
//! sparse set of (position, gradient) observations, descends the
//! approximated field to a stationary point, and sharpens the approximation
//! by sampling the true gradient at each point it discovers.
//!
//! Three pieces cooperate:
//!
//! - [`estimate_gradient`] — inverse-distance-weighted (IDW) interpolation of
//!   a continuous gradient estimate from a [`SampleStore`].
//! - [`descend`] — fixed-step gradient descent against the interpolated
//!   field, up to a tolerance or iteration budget.
//! - [`refine`] — the active-sampling loop: descend, query the [`Oracle`]
//!   for the true gradient at the result, append the observation, repeat.
//!   Each round sees a field built from strictly more information.
//!
//! The oracle is an external collaborator supplying ground-truth `value` and
//! `gradient`; it is assumed expensive, which is why the surrogate exists.
//! The method finds local minima only — where it lands depends on the start
//! position and on sample coverage.
//!
//! # Example
//!
//! ```
//! use gradfield::{
//!     refine, seed_store, QuarticBowl, RefineConfig, RegularGrid, TerminationReason, Vec2,
//! };
//!
//! # fn main() -> Result<(), gradfield::FieldError> {
//! // Coarse seed: the oracle's gradient at every 12th interior node of a
//! // 20x20 grid (four samples).
//! let grid = RegularGrid::new((-1.5, 1.5), (-1.5, 1.5), 20, 20);
//! let seed = seed_store(&QuarticBowl, &grid, 1, 12)?;
//!
//! // Ten rounds of descend-then-sample starting from (-1, -1).
//! let outcome = refine(&QuarticBowl, &seed, Vec2::new(-1.0, -1.0), &RefineConfig::default())?;
//!
//! assert_eq!(outcome.discovered.len(), 10);
//! assert_eq!(outcome.store.len(), seed.len() + 10);
//! assert!(outcome
//!     .rounds
//!     .iter()
//!     .all(|r| r.termination == TerminationReason::GradientNorm
//!         || r.termination == TerminationReason::MaxIterations));
//! # Ok(())
//! # }
//! ```
//!
//! # Features
//! - `serde` — `Serialize`/`Deserialize` for samples, stores, configurations,
//!   and results.
//! - `nalgebra` — conversions between [`Vec2`] and `nalgebra` vectors in
//!   [`nalgebra_support`].

pub mod descent;
pub mod error;
pub mod fields;
pub mod float;
pub mod grid;
pub mod interpolate;
pub mod oracle;
pub mod refine;
pub mod sample;
pub mod vec2;

#[cfg(feature = "nalgebra")]
pub mod nalgebra_support;

pub use descent::{descend, DescentConfig, DescentResult, TerminationReason};
pub use error::FieldError;
pub use fields::{ExpParaboloid, OscillatoryWells, QuarticBowl};
pub use float::Float;
pub use grid::{linspace, sample_field, seed_store, RegularGrid};
pub use interpolate::{estimate_gradient, InterpolationParams};
pub use oracle::Oracle;
pub use refine::{refine, RefineConfig, RefineOutcome};
pub use sample::{Sample, SampleStore};
pub use vec2::Vec2;
