use num_traits::ToPrimitive;

use crate::error::FieldError;
use crate::float::Float;
use crate::vec2::Vec2;

/// An observed (position, gradient) pair.
///
/// Samples are immutable once constructed: both components are validated as
/// finite at construction and never change afterwards. Equality is exact,
/// component-wise.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sample<F> {
    position: Vec2<F>,
    gradient: Vec2<F>,
}

impl<F: Float> Sample<F> {
    /// Create a sample, rejecting non-finite components.
    pub fn new(position: Vec2<F>, gradient: Vec2<F>) -> Result<Self, FieldError> {
        check_finite("position", position)?;
        check_finite("gradient", gradient)?;
        Ok(Sample { position, gradient })
    }

    /// The position this sample was observed at.
    pub fn position(&self) -> Vec2<F> {
        self.position
    }

    /// The gradient observed at this sample's position.
    pub fn gradient(&self) -> Vec2<F> {
        self.gradient
    }
}

fn check_finite<F: Float>(name: &'static str, v: Vec2<F>) -> Result<(), FieldError> {
    if !v.is_finite() {
        let bad = if v.x.is_finite() { v.y } else { v.x };
        return Err(FieldError::InvalidParameter {
            name,
            value: bad.to_f64().unwrap_or(f64::NAN),
        });
    }
    Ok(())
}

/// An append-only, insertion-ordered collection of samples.
///
/// The store only ever grows. A refinement run clones the seed store on entry
/// and appends past its snapshot length, so the caller's seed is never
/// aliased or mutated in place.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SampleStore<F> {
    samples: Vec<Sample<F>>,
}

impl<F: Float> SampleStore<F> {
    /// Create an empty store.
    pub fn new() -> Self {
        SampleStore {
            samples: Vec::new(),
        }
    }

    /// Number of samples in the store.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// True when the store holds no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Append a sample, preserving insertion order.
    pub fn push(&mut self, sample: Sample<F>) {
        self.samples.push(sample);
    }

    /// Sample at `index`, if present.
    pub fn get(&self, index: usize) -> Option<&Sample<F>> {
        self.samples.get(index)
    }

    /// Iterate samples in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Sample<F>> {
        self.samples.iter()
    }
}

impl<F: Float> FromIterator<Sample<F>> for SampleStore<F> {
    fn from_iter<I: IntoIterator<Item = Sample<F>>>(iter: I) -> Self {
        SampleStore {
            samples: iter.into_iter().collect(),
        }
    }
}

impl<F: Float> std::ops::Index<usize> for SampleStore<F> {
    type Output = Sample<F>;

    fn index(&self, index: usize) -> &Sample<F> {
        &self.samples[index]
    }
}
