use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

use crate::float::Float;

/// A fixed-size 2-D vector over a base float type.
///
/// Used for both positions in the plane and gradient vectors. All operations
/// are component-wise; `Mul`/`Div` take a scalar on the right.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2<F> {
    pub x: F,
    pub y: F,
}

impl<F: Float> Vec2<F> {
    /// Create a vector from its components.
    pub fn new(x: F, y: F) -> Self {
        Vec2 { x, y }
    }

    /// The zero vector.
    pub fn zero() -> Self {
        Vec2 {
            x: F::zero(),
            y: F::zero(),
        }
    }

    /// Squared Euclidean norm.
    pub fn norm_squared(self) -> F {
        self.x * self.x + self.y * self.y
    }

    /// Euclidean norm.
    pub fn norm(self) -> F {
        self.norm_squared().sqrt()
    }

    /// Dot product.
    pub fn dot(self, other: Self) -> F {
        self.x * other.x + self.y * other.y
    }

    /// Euclidean distance to another point.
    pub fn distance(self, other: Self) -> F {
        (self - other).norm()
    }

    /// True when both components are finite (no NaN or infinity).
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Component-wise minimum.
    pub fn min(self, other: Self) -> Self {
        Vec2 {
            x: self.x.min(other.x),
            y: self.y.min(other.y),
        }
    }

    /// Component-wise maximum.
    pub fn max(self, other: Self) -> Self {
        Vec2 {
            x: self.x.max(other.x),
            y: self.y.max(other.y),
        }
    }
}

impl<F: Float> Add for Vec2<F> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Vec2 {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl<F: Float> AddAssign for Vec2<F> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<F: Float> Sub for Vec2<F> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Vec2 {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

impl<F: Float> SubAssign for Vec2<F> {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<F: Float> Mul<F> for Vec2<F> {
    type Output = Self;

    fn mul(self, rhs: F) -> Self {
        Vec2 {
            x: self.x * rhs,
            y: self.y * rhs,
        }
    }
}

impl<F: Float> Div<F> for Vec2<F> {
    type Output = Self;

    fn div(self, rhs: F) -> Self {
        Vec2 {
            x: self.x / rhs,
            y: self.y / rhs,
        }
    }
}

impl<F: Float> Neg for Vec2<F> {
    type Output = Self;

    fn neg(self) -> Self {
        Vec2 {
            x: -self.x,
            y: -self.y,
        }
    }
}

impl<F: Float> From<(F, F)> for Vec2<F> {
    fn from((x, y): (F, F)) -> Self {
        Vec2 { x, y }
    }
}
