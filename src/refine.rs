use crate::descent::{descend, DescentConfig, DescentResult};
use crate::error::FieldError;
use crate::float::Float;
use crate::oracle::Oracle;
use crate::sample::{Sample, SampleStore};
use crate::vec2::Vec2;

/// Configuration for an active-refinement run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RefineConfig<F> {
    /// Number of optimize-then-sample rounds (default: 10).
    pub rounds: usize,
    /// Descent configuration used by every round.
    pub descent: DescentConfig<F>,
}

impl Default for RefineConfig<f64> {
    fn default() -> Self {
        RefineConfig {
            rounds: 10,
            descent: DescentConfig::default(),
        }
    }
}

impl Default for RefineConfig<f32> {
    fn default() -> Self {
        RefineConfig {
            rounds: 10,
            descent: DescentConfig::default(),
        }
    }
}

/// Output of [`refine`].
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RefineOutcome<F> {
    /// Samples discovered by refinement, one per round, in discovery order.
    pub discovered: Vec<Sample<F>>,
    /// Final store: the seed samples followed by every discovered sample.
    pub store: SampleStore<F>,
    /// Per-round descent results, aligned with `discovered`.
    pub rounds: Vec<DescentResult<F>>,
}

/// Alternate gradient descent over the interpolated field with oracle
/// sampling at each terminal position.
///
/// Works on a clone of `seed`; the caller's store is never mutated. Each
/// round descends from the cursor, asks the oracle for the true gradient at
/// the terminal position, appends that observation to the working store, and
/// moves the cursor there. Every round therefore descends a field built from
/// strictly more information than the last, which is what progressively
/// sharpens the surrogate near the minimum.
///
/// Fully deterministic for a deterministic oracle. Fails without partial
/// results on an empty seed, invalid descent parameters, or a non-finite
/// oracle gradient.
pub fn refine<F: Float, O: Oracle<F>>(
    oracle: &O,
    seed: &SampleStore<F>,
    start: Vec2<F>,
    config: &RefineConfig<F>,
) -> Result<RefineOutcome<F>, FieldError> {
    config.descent.validate()?;
    if seed.is_empty() {
        return Err(FieldError::EmptyStore);
    }

    let mut store = seed.clone();
    let mut cursor = start;
    let mut discovered = Vec::with_capacity(config.rounds);
    let mut rounds = Vec::with_capacity(config.rounds);

    for _ in 0..config.rounds {
        let result = descend(&store, cursor, &config.descent)?;
        let minimum = result.position;

        let sample = Sample::new(minimum, oracle.gradient(minimum))?;
        discovered.push(sample);
        store.push(sample);

        cursor = minimum;
        rounds.push(result);
    }

    Ok(RefineOutcome {
        discovered,
        store,
        rounds,
    })
}
